//! Consistency read model for report rendering
//!
//! A flat, string-based view of one run that formatters can render
//! without reaching into domain types.

/// Read model handed to every report formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyReadModel {
    pub metadata: ReportMetadataView,
    pub summary: SummaryView,
    /// Manifests that were checked, in discovery order
    pub manifests: Vec<String>,
    /// Mismatched dependencies in ascending dependency order
    pub mismatches: Vec<MismatchView>,
}

impl ConsistencyReadModel {
    pub fn has_mismatch(&self) -> bool {
        !self.mismatches.is_empty()
    }
}

/// View representation of report metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadataView {
    /// RFC 3339 time the report was produced
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// Counts shown at the top of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryView {
    pub manifests: usize,
    pub dependencies: usize,
    pub mismatches: usize,
}

/// One dependency requested at more than one version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchView {
    pub dependency: String,
    pub version_count: usize,
    /// Distinct versions, lowest first
    pub versions: Vec<String>,
    /// Every (version, manifest) pair, ordered by version then manifest path
    pub requirements: Vec<RequirementView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementView {
    pub version: String,
    pub manifest: String,
}
