use crate::consistency::domain::{DepMap, DependencyReport, DetectionResult, VersionString};

/// MismatchDetector service flagging dependencies requested at several versions
///
/// Expects each record list to be sorted already (see `RequirementAggregator`),
/// so equal versions are adjacent and can be collapsed in one pass.
pub struct MismatchDetector;

impl MismatchDetector {
    pub fn detect(dep_map: &DepMap) -> DetectionResult {
        let reports = dep_map
            .iter()
            .filter_map(|(dependency, records)| {
                let mut versions: Vec<VersionString> =
                    records.iter().map(|r| r.version().clone()).collect();
                versions.dedup();

                (versions.len() > 1).then(|| {
                    DependencyReport::new(dependency.clone(), versions, records.to_vec())
                })
            })
            .collect();

        DetectionResult::new(reports, dep_map.len())
    }
}
