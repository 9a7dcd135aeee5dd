use crate::consistency::domain::{DetectionResult, SkippedPath};
use std::path::PathBuf;

/// CheckResponse - Response DTO for the consistency check use case
#[derive(Debug, Clone)]
pub struct CheckResponse {
    /// Manifests that were loaded, in discovery order
    pub manifests: Vec<PathBuf>,
    /// Paths discovery looked at and skipped
    pub skipped: Vec<SkippedPath>,
    /// Ignore patterns that matched no dependency
    pub unmatched_patterns: Vec<String>,
    pub detection: DetectionResult,
}

impl CheckResponse {
    pub fn new(
        manifests: Vec<PathBuf>,
        skipped: Vec<SkippedPath>,
        unmatched_patterns: Vec<String>,
        detection: DetectionResult,
    ) -> Self {
        Self {
            manifests,
            skipped,
            unmatched_patterns,
            detection,
        }
    }

    /// Number of distinct dependencies that went through detection
    pub fn checked_dependencies(&self) -> usize {
        self.detection.checked_dependencies()
    }

    pub fn has_mismatch(&self) -> bool {
        self.detection.has_mismatch()
    }
}
