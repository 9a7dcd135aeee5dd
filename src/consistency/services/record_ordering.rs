use crate::consistency::domain::RequirementRecord;
use crate::ports::outbound::VersionComparator;
use std::cmp::Ordering;

/// Orders records by version, then by source manifest path
///
/// Equal versions end up adjacent, which is what lets the mismatch
/// detector count distinct versions in a single pass.
pub fn compare_records<C: VersionComparator + ?Sized>(
    comparator: &C,
    a: &RequirementRecord,
    b: &RequirementRecord,
) -> Ordering {
    comparator
        .compare(a.version().as_str(), b.version().as_str())
        .then_with(|| {
            a.source_manifest()
                .as_os_str()
                .cmp(b.source_manifest().as_os_str())
        })
}
