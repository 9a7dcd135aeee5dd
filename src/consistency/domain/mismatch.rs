use super::requirement::{DependencyPath, RequirementRecord, VersionString};

/// Report for a dependency requested at more than one version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReport {
    dependency: DependencyPath,
    distinct_versions: Vec<VersionString>,
    requirements: Vec<RequirementRecord>,
}

impl DependencyReport {
    pub fn new(
        dependency: DependencyPath,
        distinct_versions: Vec<VersionString>,
        requirements: Vec<RequirementRecord>,
    ) -> Self {
        Self {
            dependency,
            distinct_versions,
            requirements,
        }
    }

    pub fn dependency(&self) -> &DependencyPath {
        &self.dependency
    }

    /// Distinct versions in ascending version order
    pub fn distinct_versions(&self) -> &[VersionString] {
        &self.distinct_versions
    }

    pub fn version_count(&self) -> usize {
        self.distinct_versions.len()
    }

    /// Every contributing record, ordered by version then manifest path
    pub fn requirements(&self) -> &[RequirementRecord] {
        &self.requirements
    }
}

/// Outcome of mismatch detection over a whole DepMap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionResult {
    reports: Vec<DependencyReport>,
    checked_dependencies: usize,
}

impl DetectionResult {
    pub fn new(reports: Vec<DependencyReport>, checked_dependencies: usize) -> Self {
        Self {
            reports,
            checked_dependencies,
        }
    }

    pub fn reports(&self) -> &[DependencyReport] {
        &self.reports
    }

    pub fn into_reports(self) -> Vec<DependencyReport> {
        self.reports
    }

    pub fn checked_dependencies(&self) -> usize {
        self.checked_dependencies
    }

    pub fn has_mismatch(&self) -> bool {
        !self.reports.is_empty()
    }
}
