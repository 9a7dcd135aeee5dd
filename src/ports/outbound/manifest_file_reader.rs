use crate::shared::Result;
use std::path::Path;

/// ManifestFileReader port for probing and reading manifest/workspace files
///
/// This port abstracts the file system so discovery and loading can run
/// against an in-memory tree in tests.
pub trait ManifestFileReader {
    /// Returns true if something exists at `path`
    ///
    /// A missing path is never an error; callers treat it as an optional
    /// probe that came back empty.
    fn file_exists(&self, path: &Path) -> bool;

    /// Reads the file at `path` as UTF-8 text
    ///
    /// # Errors
    /// Returns an error if:
    /// - The path is not a regular file
    /// - The file cannot be read due to permissions or I/O errors
    /// - The file is not valid UTF-8
    fn read_file(&self, path: &Path) -> Result<String>;
}
