use crate::consistency::domain::Requirement;
use crate::ports::outbound::{ManifestFileReader, ManifestParser};
use crate::shared::error::DepsyncError;
use crate::shared::Result;
use std::path::Path;

/// ManifestLoader service reading one manifest into its requirements
///
/// Any read or parse failure is returned as a `DepsyncError` naming the
/// manifest; there is no partial result for a broken manifest.
pub struct ManifestLoader<'a, R: ManifestFileReader, P: ManifestParser> {
    reader: &'a R,
    parser: &'a P,
}

impl<'a, R: ManifestFileReader, P: ManifestParser> ManifestLoader<'a, R, P> {
    pub fn new(reader: &'a R, parser: &'a P) -> Self {
        Self { reader, parser }
    }

    pub fn load_requirements(&self, manifest: &Path) -> Result<Vec<Requirement>> {
        let content = self
            .reader
            .read_file(manifest)
            .map_err(|e| DepsyncError::ManifestReadError {
                path: manifest.to_path_buf(),
                details: format!("{:#}", e),
            })?;

        let requirements = self
            .parser
            .parse_requirements(manifest, &content)
            .map_err(|e| DepsyncError::ManifestParseError {
                path: manifest.to_path_buf(),
                details: format!("{:#}", e),
            })?;

        Ok(requirements)
    }
}
