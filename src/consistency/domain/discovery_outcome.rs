use super::unique_set::ManifestSet;
use std::fmt;
use std::path::PathBuf;

/// Why a probed path contributed no manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A manifest or workspace file named on the command line does not exist
    MissingStartPath,
    /// A workspace `use` entry points at a directory without a manifest
    MissingWorkspaceMember { workspace: PathBuf },
    /// A directory start path holds neither a manifest nor a workspace file
    NothingToCheck,
}

/// A path discovery looked at and skipped without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPath {
    pub path: PathBuf,
    pub reason: SkipReason,
}

impl SkippedPath {
    pub fn new(path: PathBuf, reason: SkipReason) -> Self {
        Self { path, reason }
    }
}

impl fmt::Display for SkippedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            SkipReason::MissingStartPath => {
                write!(f, "{} does not exist", self.path.display())
            }
            SkipReason::MissingWorkspaceMember { workspace } => write!(
                f,
                "{} (listed in {}) does not exist",
                self.path.display(),
                workspace.display()
            ),
            SkipReason::NothingToCheck => write!(
                f,
                "{} contains neither a manifest nor a workspace file",
                self.path.display()
            ),
        }
    }
}

/// Manifests found from the start paths, plus everything skipped on the way
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOutcome {
    pub manifests: ManifestSet,
    pub skipped: Vec<SkippedPath>,
}
