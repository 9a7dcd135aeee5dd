use crate::ports::outbound::ManifestFileReader;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for probing and reading files on disk
///
/// This adapter implements the ManifestFileReader port used by discovery
/// (existence probes, workspace files) and loading (manifests).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Reads a file after checking it is a regular file within the size limit
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        let file_size = validate_regular_file(path, file_type)?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl ManifestFileReader for FileSystemReader {
    fn file_exists(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok()
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        let file_type = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());

        self.safe_read_file(path, &file_type)
    }
}
