use super::requirement::{DependencyPath, RequirementRecord};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Requirement records grouped by dependency path
///
/// A key only exists once a record has been pushed for it, so every
/// record list is non-empty. Keys iterate in ascending path order.
#[derive(Debug, Clone, Default)]
pub struct DepMap {
    entries: BTreeMap<DependencyPath, Vec<RequirementRecord>>,
}

impl DepMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the dependency's list, creating the entry on first sight
    pub fn push(&mut self, dependency: DependencyPath, record: RequirementRecord) {
        self.entries.entry(dependency).or_default().push(record);
    }

    /// Sorts every record list with the given comparator
    pub fn sort_records_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&RequirementRecord, &RequirementRecord) -> Ordering,
    {
        for records in self.entries.values_mut() {
            records.sort_by(&mut compare);
        }
    }

    /// Keeps only the dependencies for which the predicate returns true
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&DependencyPath) -> bool,
    {
        self.entries.retain(|dependency, _| keep(dependency));
    }

    pub fn get(&self, dependency: &DependencyPath) -> Option<&[RequirementRecord]> {
        self.entries.get(dependency).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DependencyPath, &[RequirementRecord])> {
        self.entries
            .iter()
            .map(|(dependency, records)| (dependency, records.as_slice()))
    }

    pub fn dependencies(&self) -> impl Iterator<Item = &DependencyPath> {
        self.entries.keys()
    }

    /// Number of distinct dependencies
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records across all dependencies
    pub fn record_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
