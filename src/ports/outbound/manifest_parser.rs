use crate::consistency::domain::Requirement;
use crate::shared::Result;
use std::path::Path;

/// ManifestParser port for turning manifest text into requirement declarations
pub trait ManifestParser {
    /// Extracts the dependency requirements declared in a manifest
    ///
    /// Only direct requirement declarations are returned; replacements,
    /// exclusions and other directives are validated but dropped.
    ///
    /// # Arguments
    /// * `path` - Path of the manifest, used in error messages
    /// * `content` - Raw manifest text
    ///
    /// # Errors
    /// Returns an error if the content does not follow the manifest grammar
    fn parse_requirements(&self, path: &Path, content: &str) -> Result<Vec<Requirement>>;
}
