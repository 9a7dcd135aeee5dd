use crate::application::read_models::ConsistencyReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering a consistency report
///
/// This port abstracts the output format (plain text, JSON, Markdown).
pub trait ReportFormatter {
    /// Formats the report read model
    ///
    /// # Returns
    /// Formatted report content as a string; may be empty when the format
    /// prints nothing for a clean run
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &ConsistencyReadModel) -> Result<String>;
}
