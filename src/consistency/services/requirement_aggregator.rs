use super::record_ordering::compare_records;
use crate::consistency::domain::{DepMap, Requirement, RequirementRecord};
use crate::ports::outbound::VersionComparator;
use std::path::Path;

/// RequirementAggregator service merging manifests into a DepMap
///
/// Manifests are added one at a time; `finish` sorts every dependency's
/// records so the result does not depend on the order manifests were added.
#[derive(Debug, Default)]
pub struct RequirementAggregator {
    dep_map: DepMap,
}

impl RequirementAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records every requirement of one manifest
    pub fn add_manifest(&mut self, manifest: &Path, requirements: Vec<Requirement>) {
        for requirement in requirements {
            let (dependency, version) = requirement.into_parts();
            self.dep_map
                .push(dependency, RequirementRecord::new(manifest.to_path_buf(), version));
        }
    }

    pub fn finish<C: VersionComparator + ?Sized>(mut self, comparator: &C) -> DepMap {
        self.dep_map
            .sort_records_by(|a, b| compare_records(comparator, a, b));
        self.dep_map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consistency::domain::DependencyPath;
    use std::cmp::Ordering;
    use std::path::PathBuf;

    struct Lexical;

    impl VersionComparator for Lexical {
        fn compare(&self, a: &str, b: &str) -> Ordering {
            a.cmp(b)
        }
    }

    fn aggregate(manifests: Vec<(PathBuf, Vec<Requirement>)>, comparator: &Lexical) -> DepMap {
        let mut aggregator = RequirementAggregator::new();
        for (manifest, requirements) in manifests {
            aggregator.add_manifest(&manifest, requirements);
        }
        aggregator.finish(comparator)
    }

    fn req(dep: &str, version: &str) -> Requirement {
        Requirement::new(dep.to_string(), version.to_string()).unwrap()
    }

    fn dep(path: &str) -> DependencyPath {
        DependencyPath::new(path.to_string()).unwrap()
    }

    fn versions_and_paths(map: &DepMap, dependency: &str) -> Vec<(String, PathBuf)> {
        map.get(&dep(dependency))
            .unwrap()
            .iter()
            .map(|r| {
                (
                    r.version().as_str().to_string(),
                    r.source_manifest().to_path_buf(),
                )
            })
            .collect()
    }

    #[test]
    fn test_aggregate_groups_by_dependency() {
        let map = aggregate(
            vec![
                (
                    PathBuf::from("/b/go.mod"),
                    vec![req("pkg", "v1.3.0"), req("other", "v0.1.0")],
                ),
                (PathBuf::from("/a/go.mod"), vec![req("pkg", "v1.2.0")]),
            ],
            &Lexical,
        );

        assert_eq!(map.len(), 2);
        assert_eq!(map.record_count(), 3);
        assert_eq!(
            versions_and_paths(&map, "pkg"),
            vec![
                ("v1.2.0".to_string(), PathBuf::from("/a/go.mod")),
                ("v1.3.0".to_string(), PathBuf::from("/b/go.mod")),
            ]
        );
    }

    #[test]
    fn test_order_independent_of_manifest_order() {
        let manifests = vec![
            (PathBuf::from("/c/go.mod"), vec![req("pkg", "v1.0.0")]),
            (PathBuf::from("/a/go.mod"), vec![req("pkg", "v2.0.0")]),
            (PathBuf::from("/b/go.mod"), vec![req("pkg", "v1.0.0")]),
        ];
        let mut reversed = manifests.clone();
        reversed.reverse();

        let forward = aggregate(manifests, &Lexical);
        let backward = aggregate(reversed, &Lexical);

        assert_eq!(
            versions_and_paths(&forward, "pkg"),
            versions_and_paths(&backward, "pkg")
        );
        assert_eq!(
            versions_and_paths(&forward, "pkg")[0].1,
            PathBuf::from("/b/go.mod")
        );
    }

    #[test]
    fn test_empty_input() {
        let map = aggregate(Vec::new(), &Lexical);
        assert!(map.is_empty());
    }
}
