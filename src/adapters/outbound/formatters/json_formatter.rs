use crate::application::read_models::{ConsistencyReadModel, MismatchView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    metadata: Metadata<'a>,
    summary: Summary,
    mismatches: Vec<Mismatch<'a>>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    tool_name: &'a str,
    tool_version: &'a str,
}

#[derive(Debug, Serialize)]
struct Summary {
    manifests: usize,
    dependencies: usize,
    mismatches: usize,
}

#[derive(Debug, Serialize)]
struct Mismatch<'a> {
    dependency: &'a str,
    version_count: usize,
    versions: &'a [String],
    requirements: Vec<RequirementEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct RequirementEntry<'a> {
    version: &'a str,
    manifest: &'a str,
}

/// JsonFormatter adapter for machine-readable reports
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_mismatch(mismatch: &MismatchView) -> Mismatch<'_> {
        Mismatch {
            dependency: &mismatch.dependency,
            version_count: mismatch.version_count,
            versions: &mismatch.versions,
            requirements: mismatch
                .requirements
                .iter()
                .map(|r| RequirementEntry {
                    version: &r.version,
                    manifest: &r.manifest,
                })
                .collect(),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &ConsistencyReadModel) -> Result<String> {
        let report = Report {
            metadata: Metadata {
                timestamp: &model.metadata.timestamp,
                tool_name: &model.metadata.tool_name,
                tool_version: &model.metadata.tool_version,
            },
            summary: Summary {
                manifests: model.summary.manifests,
                dependencies: model.summary.dependencies,
                mismatches: model.summary.mismatches,
            },
            mismatches: model.mismatches.iter().map(Self::build_mismatch).collect(),
        };

        let mut json = serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON report: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
