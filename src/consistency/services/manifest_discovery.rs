use crate::consistency::domain::{DiscoveryOutcome, ManifestLayout, SkipReason, SkippedPath};
use crate::ports::outbound::{ManifestFileReader, WorkspaceParser};
use crate::shared::error::DepsyncError;
use crate::shared::Result;
use std::path::{Component, Path, PathBuf};

/// ManifestDiscovery service resolving start paths into manifest files
///
/// Each start path is one of:
/// - a manifest file, taken as-is when it exists
/// - a workspace file, expanded into the manifests of its members
/// - a directory, probed for a manifest and for a workspace file independently
///
/// Paths that do not exist are recorded as skipped, never reported as
/// errors. A workspace file that exists but cannot be read or parsed
/// aborts the whole discovery.
pub struct ManifestDiscovery<'a, R: ManifestFileReader, W: WorkspaceParser> {
    reader: &'a R,
    workspace_parser: &'a W,
    layout: &'a ManifestLayout,
}

impl<'a, R: ManifestFileReader, W: WorkspaceParser> ManifestDiscovery<'a, R, W> {
    pub fn new(reader: &'a R, workspace_parser: &'a W, layout: &'a ManifestLayout) -> Self {
        Self {
            reader,
            workspace_parser,
            layout,
        }
    }

    /// Discovers every manifest reachable from `start_paths`
    ///
    /// Relative start paths are resolved against `working_dir`. The
    /// resulting set holds absolute, lexically cleaned paths in the order
    /// they were first found.
    pub fn discover(&self, start_paths: &[PathBuf], working_dir: &Path) -> Result<DiscoveryOutcome> {
        let mut outcome = DiscoveryOutcome::default();

        for start_path in start_paths {
            let path = normalize_path(&working_dir.join(start_path));

            if self.has_file_name(&path, self.layout.manifest_file_name()) {
                if self.reader.file_exists(&path) {
                    outcome.manifests.insert(path);
                } else {
                    outcome
                        .skipped
                        .push(SkippedPath::new(path, SkipReason::MissingStartPath));
                }
            } else if self.has_file_name(&path, self.layout.workspace_file_name()) {
                if self.reader.file_exists(&path) {
                    self.expand_workspace(&path, &mut outcome)?;
                } else {
                    outcome
                        .skipped
                        .push(SkippedPath::new(path, SkipReason::MissingStartPath));
                }
            } else {
                self.probe_directory(path, &mut outcome)?;
            }
        }

        Ok(outcome)
    }

    fn has_file_name(&self, path: &Path, file_name: &str) -> bool {
        path.file_name().and_then(|name| name.to_str()) == Some(file_name)
    }

    fn probe_directory(&self, directory: PathBuf, outcome: &mut DiscoveryOutcome) -> Result<()> {
        let manifest = directory.join(self.layout.manifest_file_name());
        let workspace = directory.join(self.layout.workspace_file_name());
        let mut found = false;

        if self.reader.file_exists(&manifest) {
            outcome.manifests.insert(manifest);
            found = true;
        }

        if self.reader.file_exists(&workspace) {
            self.expand_workspace(&workspace, outcome)?;
            found = true;
        }

        if !found {
            let reason = if self.reader.file_exists(&directory) {
                SkipReason::NothingToCheck
            } else {
                SkipReason::MissingStartPath
            };
            outcome.skipped.push(SkippedPath::new(directory, reason));
        }

        Ok(())
    }

    /// Adds the manifest of every workspace member that has one
    fn expand_workspace(&self, workspace: &Path, outcome: &mut DiscoveryOutcome) -> Result<()> {
        let content =
            self.reader
                .read_file(workspace)
                .map_err(|e| DepsyncError::FileReadError {
                    path: workspace.to_path_buf(),
                    details: format!("{:#}", e),
                })?;

        let members = self
            .workspace_parser
            .parse_members(workspace, &content)
            .map_err(|e| DepsyncError::WorkspaceParseError {
                path: workspace.to_path_buf(),
                details: format!("{:#}", e),
            })?;

        let workspace_dir = workspace.parent().unwrap_or_else(|| Path::new("/"));
        for member in members {
            let manifest = normalize_path(
                &workspace_dir
                    .join(member)
                    .join(self.layout.manifest_file_name()),
            );

            if self.reader.file_exists(&manifest) {
                outcome.manifests.insert(manifest);
            } else {
                outcome.skipped.push(SkippedPath::new(
                    manifest,
                    SkipReason::MissingWorkspaceMember {
                        workspace: workspace.to_path_buf(),
                    },
                ));
            }
        }

        Ok(())
    }
}

/// Lexically cleans a path: drops `.` components and lets `..` remove the
/// component before it. Symlinks are not resolved and nothing is read
/// from disk.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}
