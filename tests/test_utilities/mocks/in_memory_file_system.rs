use depsync::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ManifestFileReader backed by a map of absolute paths to contents
///
/// A path counts as an existing directory when some stored file lives
/// beneath it.
#[derive(Default, Clone)]
pub struct InMemoryFileSystem {
    files: HashMap<PathBuf, String>,
}

impl InMemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    /// Adds a go.mod declaring `module` with the given requirements
    pub fn with_go_mod(self, path: &str, module: &str, requires: &[(&str, &str)]) -> Self {
        let mut content = format!("module {}\n\ngo 1.21\n", module);
        for (dependency, version) in requires {
            content.push_str(&format!("\nrequire {} {}\n", dependency, version));
        }
        self.with_file(path, &content)
    }
}

impl ManifestFileReader for InMemoryFileSystem {
    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.files.keys().any(|file| file.starts_with(path))
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No such file: {}", path.display()))
    }
}
