pub mod dep_map;
pub mod discovery_outcome;
pub mod manifest_layout;
pub mod mismatch;
pub mod report_metadata;
pub mod requirement;
pub mod unique_set;

pub use dep_map::DepMap;
pub use discovery_outcome::{DiscoveryOutcome, SkipReason, SkippedPath};
pub use manifest_layout::ManifestLayout;
pub use mismatch::{DependencyReport, DetectionResult};
pub use report_metadata::ReportMetadata;
pub use requirement::{DependencyPath, Requirement, RequirementRecord, VersionString};
pub use unique_set::{ManifestSet, UniqueSet};
