use crate::consistency::domain::{DepMap, Requirement};
use crate::shared::error::DepsyncError;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of ignore patterns accepted in one run
const MAX_IGNORE_PATTERNS: usize = 64;

/// Maximum length of a single ignore pattern, in bytes
const MAX_PATTERN_LENGTH: usize = 255;

/// DependencyFilter - drops dependencies the user asked not to check
///
/// Two independent rules:
/// - ignore patterns matched against the dependency path, with `*`
///   matching any run of characters (including `/`)
/// - `skip_indirect`, dropping requirements marked `// indirect`
///
/// Patterns remember whether they matched anything so unused ones can be
/// reported after filtering.
#[derive(Debug, Default)]
pub struct DependencyFilter {
    patterns: Vec<IgnorePattern>,
    skip_indirect: bool,
}

impl DependencyFilter {
    /// Creates a filter from raw pattern strings
    ///
    /// # Errors
    /// Returns a validation error if there are too many patterns or a
    /// pattern is empty, too long, only wildcards, or has characters
    /// outside `[A-Za-z0-9-_./~+*]`
    pub fn new(patterns: Vec<String>, skip_indirect: bool) -> Result<Self> {
        if patterns.len() > MAX_IGNORE_PATTERNS {
            return Err(validation(format!(
                "Too many ignore patterns: {} (maximum: {})",
                patterns.len(),
                MAX_IGNORE_PATTERNS
            )));
        }

        let patterns = patterns
            .into_iter()
            .map(IgnorePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns,
            skip_indirect,
        })
    }

    /// True when the filter would keep everything
    pub fn is_noop(&self) -> bool {
        self.patterns.is_empty() && !self.skip_indirect
    }

    /// Drops indirect requirements of one manifest when `skip_indirect` is set
    pub fn filter_requirements(&self, requirements: Vec<Requirement>) -> Vec<Requirement> {
        if !self.skip_indirect {
            return requirements;
        }
        requirements
            .into_iter()
            .filter(|requirement| !requirement.is_indirect())
            .collect()
    }

    /// Removes ignored dependencies from the map; surviving record lists
    /// are left untouched
    pub fn filter_dep_map(&self, dep_map: &mut DepMap) {
        if self.patterns.is_empty() {
            return;
        }
        dep_map.retain(|dependency| !self.is_ignored(dependency.as_str()));
    }

    fn is_ignored(&self, dependency: &str) -> bool {
        // Every pattern is evaluated so each one records its own match.
        self.patterns
            .iter()
            .fold(false, |ignored, pattern| pattern.matches(dependency) || ignored)
    }

    /// Patterns that have not matched any dependency so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

fn validation(message: String) -> anyhow::Error {
    DepsyncError::Validation { message }.into()
}

/// A validated ignore pattern split on its wildcards
#[derive(Debug)]
struct IgnorePattern {
    original: String,
    /// Literal pieces between `*`; a pattern without `*` has exactly one
    pieces: Vec<String>,
    matched: Cell<bool>,
}

impl IgnorePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let pieces = pattern.split('*').map(String::from).collect();
        Ok(Self {
            original: pattern,
            pieces,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, dependency: &str) -> bool {
        let is_match = glob_match(&self.pieces, dependency);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

/// Anchored wildcard match: the first piece is a prefix, the last a
/// suffix, and the pieces in between appear in order
fn glob_match(pieces: &[String], text: &str) -> bool {
    let (first, rest) = match pieces.split_first() {
        Some(split) => split,
        None => return text.is_empty(),
    };
    let (last, middle) = match rest.split_last() {
        Some(split) => split,
        None => return text == first.as_str(),
    };

    if text.len() < first.len() + last.len() || !text.starts_with(first.as_str()) {
        return false;
    }
    if !text.ends_with(last.as_str()) {
        return false;
    }

    let mut remaining = &text[first.len()..text.len() - last.len()];
    for piece in middle {
        match remaining.find(piece.as_str()) {
            Some(pos) => remaining = &remaining[pos + piece.len()..],
            None => return false,
        }
    }
    true
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(validation("Ignore pattern cannot be empty".to_string()));
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(validation(format!(
            "Ignore pattern is too long: '{}' ({} bytes). Maximum: {} bytes",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        )));
    }

    if let Some(ch) = pattern.chars().find(|&c| !is_valid_pattern_char(c)) {
        return Err(validation(format!(
            "Ignore pattern '{}' contains invalid character '{}'. \
             Only letters, digits, '-', '_', '.', '/', '~', '+' and '*' are allowed.",
            pattern, ch
        )));
    }

    if pattern.chars().all(|c| c == '*') {
        return Err(validation(format!(
            "Ignore pattern cannot contain only wildcards: '{}'",
            pattern
        )));
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '~' | '+' | '*')
}
