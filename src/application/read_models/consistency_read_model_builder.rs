//! Builder for constructing ConsistencyReadModel from a check response

use super::consistency_read_model::{
    ConsistencyReadModel, MismatchView, ReportMetadataView, RequirementView, SummaryView,
};
use crate::application::dto::CheckResponse;
use crate::consistency::domain::{DependencyReport, ReportMetadata};

/// Transforms a CheckResponse into the read model formatters consume
pub struct ConsistencyReadModelBuilder;

impl ConsistencyReadModelBuilder {
    pub fn build(response: &CheckResponse, metadata: &ReportMetadata) -> ConsistencyReadModel {
        let mismatches: Vec<MismatchView> = response
            .detection
            .reports()
            .iter()
            .map(Self::build_mismatch)
            .collect();

        ConsistencyReadModel {
            metadata: ReportMetadataView {
                timestamp: metadata.timestamp().to_string(),
                tool_name: metadata.tool_name().to_string(),
                tool_version: metadata.tool_version().to_string(),
            },
            summary: SummaryView {
                manifests: response.manifests.len(),
                dependencies: response.checked_dependencies(),
                mismatches: mismatches.len(),
            },
            manifests: response
                .manifests
                .iter()
                .map(|path| path.display().to_string())
                .collect(),
            mismatches,
        }
    }

    fn build_mismatch(report: &DependencyReport) -> MismatchView {
        MismatchView {
            dependency: report.dependency().to_string(),
            version_count: report.version_count(),
            versions: report
                .distinct_versions()
                .iter()
                .map(|v| v.to_string())
                .collect(),
            requirements: report
                .requirements()
                .iter()
                .map(|record| RequirementView {
                    version: record.version().to_string(),
                    manifest: record.source_manifest().display().to_string(),
                })
                .collect(),
        }
    }
}
