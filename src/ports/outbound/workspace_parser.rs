use crate::shared::Result;
use std::path::Path;

/// WorkspaceParser port for reading the member list of a workspace file
pub trait WorkspaceParser {
    /// Returns the member directory entries declared in a workspace file
    ///
    /// Entries are returned as written, relative to the workspace file's
    /// own directory unless they are absolute.
    ///
    /// # Errors
    /// Returns an error if the content does not follow the workspace grammar
    fn parse_members(&self, path: &Path, content: &str) -> Result<Vec<String>>;
}
