use std::cmp::Ordering;

/// VersionComparator port implementing the ecosystem's version precedence
pub trait VersionComparator {
    /// Compares two version strings, ascending
    ///
    /// Implementations must be a total order: `Equal` only for strings that
    /// should be reported as the same version.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}
