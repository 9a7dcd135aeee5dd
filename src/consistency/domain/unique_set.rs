use std::collections::HashSet;
use std::hash::Hash;
use std::path::PathBuf;

/// Insertion-ordered collection that keeps each value at most once
///
/// Membership is tracked in a `HashSet`, order in a `Vec`, so iteration
/// is deterministic for a given sequence of inserts.
#[derive(Debug, Clone)]
pub struct UniqueSet<T> {
    seen: HashSet<T>,
    items: Vec<T>,
}

/// Absolute manifest paths discovered during a run
pub type ManifestSet = UniqueSet<PathBuf>;

impl<T: Eq + Hash + Clone> UniqueSet<T> {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
            items: Vec::new(),
        }
    }

    /// Inserts a value, returning `false` if it was already present
    pub fn insert(&mut self, value: T) -> bool {
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Eq + Hash + Clone> Default for UniqueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
