mod dependency_filter;
mod manifest_discovery;
mod manifest_loader;
mod mismatch_detector;
mod record_ordering;
mod report_metadata_generator;
mod requirement_aggregator;

pub use dependency_filter::DependencyFilter;
pub use manifest_discovery::{normalize_path, ManifestDiscovery};
pub use manifest_loader::ManifestLoader;
pub use mismatch_detector::MismatchDetector;
pub use record_ordering::compare_records;
pub use report_metadata_generator::{ReportMetadataGenerator, TOOL_NAME};
pub use requirement_aggregator::RequirementAggregator;
