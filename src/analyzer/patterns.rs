use regex::Regex;

use crate::error::{Result, SrcAnaError};

/// Ordered list of suffix-anchored path patterns.
///
/// A path matches pattern `p` when the whole path matches `.*` followed by
/// `p`, so `p` only needs to describe a trailing part of the path.
#[derive(Debug, Clone, Default)]
pub struct PathPatterns {
    patterns: Vec<(String, Regex)>,
}

impl PathPatterns {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Compile and append a pattern.
    ///
    /// # Errors
    /// Returns [`SrcAnaError::InvalidPattern`] if the pattern is not a valid
    /// regular expression.
    pub fn add(&mut self, pattern: &str) -> Result<()> {
        let anchored = format!("^(?:.*{pattern})$");
        let regex =
            Regex::new(&anchored).map_err(|e| SrcAnaError::invalid_pattern(pattern, e))?;
        self.patterns.push((pattern.to_string(), regex));
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// The first pattern (as given) matching `path`.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|(_, regex)| regex.is_match(path))
            .map(|(pattern, _)| pattern.as_str())
    }

    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// Patterns in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(pattern, _)| pattern.as_str())
    }
}

/// Include/ignore configuration deciding which entries a traversal visits.
#[derive(Debug, Clone)]
pub struct PathFilter {
    pub(super) include: PathPatterns,
    pub(super) ignore: PathPatterns,
    pub(super) include_before_ignore: bool,
}

impl Default for PathFilter {
    fn default() -> Self {
        Self {
            include: PathPatterns::new(),
            ignore: PathPatterns::new(),
            include_before_ignore: true,
        }
    }
}

/// Why an entry was left out of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip<'a> {
    /// Include patterns exist and none matched.
    NotIncluded,
    /// The given ignore pattern matched.
    Ignored(&'a str),
}

impl PathFilter {
    /// Why an entry (file or directory) is left out, or `None` if it is
    /// visited.
    ///
    /// Ignore patterns are only consulted while `include_before_ignore` is
    /// enabled; with the flag off they have no effect at all.
    #[must_use]
    pub fn skip_reason(&self, path: &str) -> Option<Skip<'_>> {
        if !self.include.is_empty() && !self.include.is_match(path) {
            return Some(Skip::NotIncluded);
        }
        if self.include_before_ignore {
            return self.ignore.find(path).map(Skip::Ignored);
        }
        None
    }
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
