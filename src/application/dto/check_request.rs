use crate::shared::error::DepsyncError;
use crate::shared::Result;
use std::path::PathBuf;

/// CheckRequest - Request DTO for the consistency check use case
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Manifests, workspace files or directories to start from; never empty
    pub start_paths: Vec<PathBuf>,
    /// Directory relative start paths are resolved against
    pub working_dir: PathBuf,
    /// Dependency path patterns excluded from detection
    pub ignore_patterns: Vec<String>,
    /// Whether `// indirect` requirements are dropped before aggregation
    pub skip_indirect: bool,
}

impl CheckRequest {
    pub fn builder() -> CheckRequestBuilder {
        CheckRequestBuilder::default()
    }
}

/// Builder for CheckRequest
#[derive(Debug, Default)]
pub struct CheckRequestBuilder {
    start_paths: Vec<PathBuf>,
    working_dir: Option<PathBuf>,
    ignore_patterns: Vec<String>,
    skip_indirect: bool,
}

impl CheckRequestBuilder {
    pub fn start_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.start_paths.push(path.into());
        self
    }

    pub fn start_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.start_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn skip_indirect(mut self, skip: bool) -> Self {
        self.skip_indirect = skip;
        self
    }

    /// Builds the request
    ///
    /// The working directory defaults to the process's current directory.
    ///
    /// # Errors
    /// Returns a validation error when no start path was given, or when
    /// the current directory is needed but cannot be determined
    pub fn build(self) -> Result<CheckRequest> {
        if self.start_paths.is_empty() {
            return Err(DepsyncError::Validation {
                message: "at least one search path is required".to_string(),
            }
            .into());
        }

        let working_dir = match self.working_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| DepsyncError::Validation {
                message: format!("cannot determine the current directory: {}", e),
            })?,
        };

        Ok(CheckRequest {
            start_paths: self.start_paths,
            working_dir,
            ignore_patterns: self.ignore_patterns,
            skip_indirect: self.skip_indirect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_paths_and_options() {
        let request = CheckRequest::builder()
            .start_path("services/api")
            .start_paths(["go.work", "tools/go.mod"])
            .working_dir("/ws")
            .ignore_patterns(vec!["golang.org/x/*".to_string()])
            .skip_indirect(true)
            .build()
            .unwrap();

        assert_eq!(
            request.start_paths,
            vec![
                PathBuf::from("services/api"),
                PathBuf::from("go.work"),
                PathBuf::from("tools/go.mod")
            ]
        );
        assert_eq!(request.working_dir, PathBuf::from("/ws"));
        assert_eq!(request.ignore_patterns, vec!["golang.org/x/*"]);
        assert!(request.skip_indirect);
    }

    #[test]
    fn test_builder_rejects_empty_paths() {
        let err = CheckRequest::builder().working_dir("/ws").build().unwrap_err();
        assert!(err.to_string().contains("at least one search path is required"));
        assert!(matches!(
            err.downcast_ref::<DepsyncError>(),
            Some(DepsyncError::Validation { .. })
        ));
    }

    #[test]
    fn test_builder_keeps_empty_path_as_working_dir() {
        let request = CheckRequest::builder()
            .start_paths(["", "svc"])
            .working_dir("/ws")
            .build()
            .unwrap();
        assert_eq!(request.start_paths, vec![PathBuf::new(), PathBuf::from("svc")]);
        assert_eq!(request.working_dir.join(&request.start_paths[0]), PathBuf::from("/ws/"));
    }

    #[test]
    fn test_builder_defaults_working_dir_to_cwd() {
        let request = CheckRequest::builder().start_path(".").build().unwrap();
        assert_eq!(request.working_dir, std::env::current_dir().unwrap());
        assert!(!request.skip_indirect);
        assert!(request.ignore_patterns.is_empty());
    }
}
