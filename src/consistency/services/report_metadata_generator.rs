use crate::consistency::domain::ReportMetadata;
use chrono::Utc;

/// Name reported as the producing tool
pub const TOOL_NAME: &str = "depsync";

/// ReportMetadataGenerator service stamping reports with time and tool info
pub struct ReportMetadataGenerator;

impl ReportMetadataGenerator {
    /// Metadata with the current UTC time in RFC 3339
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        ReportMetadata::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
        )
    }

    /// Metadata for this build of depsync
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
