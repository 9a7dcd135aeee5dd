use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Maximum length for module paths (security limit)
const MAX_DEPENDENCY_PATH_LENGTH: usize = 500;

/// Maximum length for version strings (security limit)
const MAX_VERSION_LENGTH: usize = 200;

/// NewType wrapper for a dependency (module) path, the aggregation key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyPath(String);

impl DependencyPath {
    pub fn new(path: String) -> Result<Self> {
        if path.is_empty() {
            anyhow::bail!("Dependency path cannot be empty");
        }

        if path.len() > MAX_DEPENDENCY_PATH_LENGTH {
            anyhow::bail!(
                "Dependency path is too long ({} bytes). Maximum allowed: {} bytes",
                path.len(),
                MAX_DEPENDENCY_PATH_LENGTH
            );
        }

        if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!("Dependency path '{}' contains whitespace or control characters", path);
        }

        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DependencyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for an ecosystem version string
///
/// Only the shape is checked here. Ordering is the job of a
/// `VersionComparator`, never of `Ord` on the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionString(String);

impl VersionString {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            anyhow::bail!("Version cannot be empty");
        }

        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        if version.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!("Version '{}' contains whitespace or control characters", version);
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VersionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single `require` declaration read from a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    dependency: DependencyPath,
    version: VersionString,
    indirect: bool,
}

impl Requirement {
    pub fn new(dependency: String, version: String) -> Result<Self> {
        Ok(Self {
            dependency: DependencyPath::new(dependency)?,
            version: VersionString::new(version)?,
            indirect: false,
        })
    }

    /// Marks the requirement as only needed by other dependencies (`// indirect`)
    pub fn with_indirect(mut self, indirect: bool) -> Self {
        self.indirect = indirect;
        self
    }

    pub fn dependency(&self) -> &DependencyPath {
        &self.dependency
    }

    pub fn version(&self) -> &VersionString {
        &self.version
    }

    pub fn is_indirect(&self) -> bool {
        self.indirect
    }

    pub fn into_parts(self) -> (DependencyPath, VersionString) {
        (self.dependency, self.version)
    }
}

/// One manifest's request for a dependency: where it came from and which version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementRecord {
    source_manifest: PathBuf,
    version: VersionString,
}

impl RequirementRecord {
    pub fn new(source_manifest: PathBuf, version: VersionString) -> Self {
        Self {
            source_manifest,
            version,
        }
    }

    pub fn source_manifest(&self) -> &Path {
        &self.source_manifest
    }

    pub fn version(&self) -> &VersionString {
        &self.version
    }
}
