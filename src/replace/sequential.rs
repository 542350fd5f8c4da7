use std::path::Path;
use std::sync::Arc;

use regex::Regex;
use tracing::trace;

use crate::error::{Result, SrcAnaError};
use crate::handler::{FileHandler, HandlerTemplate};
use crate::text;

use super::ReplacementTable;

/// Ordered regex rules, compiled once and shared by every handler built
/// from them.
#[derive(Debug, Clone)]
pub struct RegexRules {
    rules: Arc<[(Regex, String)]>,
}

impl RegexRules {
    /// Compile every key of `table` as a regular expression, keeping order.
    ///
    /// # Errors
    /// Returns [`SrcAnaError::InvalidPattern`] for the first key that is not
    /// a valid regular expression.
    pub fn compile(table: &ReplacementTable) -> Result<Self> {
        let rules = table
            .iter()
            .map(|(pattern, replacement)| {
                Regex::new(pattern)
                    .map(|regex| (regex, replacement.to_string()))
                    .map_err(|e| SrcAnaError::invalid_pattern(pattern, e))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rules: rules.into(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order, each one to the output of the previous.
    ///
    /// Replacements may reference capture groups as `$1` or `${name}`.
    #[must_use]
    pub fn rewrite(&self, text: &str) -> String {
        let mut current = text.to_string();
        for (regex, replacement) in self.rules.iter() {
            current = regex
                .replace_all(&current, replacement.as_str())
                .into_owned();
        }
        current
    }
}

impl HandlerTemplate for RegexRules {
    fn instantiate(&self, extension: &str) -> Box<dyn FileHandler> {
        Box::new(RegexReplacer::with_rules(extension, self.clone()))
    }
}

/// Rewrites files by applying ordered regex rules to the whole text.
///
/// Rules run one after another, so a later rule may match text inserted by
/// an earlier one: `a -> b` followed by `b -> c` turns `a` into `c`.
#[derive(Debug, Clone)]
pub struct RegexReplacer {
    extension: String,
    rules: RegexRules,
}

impl RegexReplacer {
    /// # Errors
    /// Returns an error if a key of `table` is not a valid regular expression.
    pub fn new(extension: impl Into<String>, table: &ReplacementTable) -> Result<Self> {
        Ok(Self::with_rules(extension, RegexRules::compile(table)?))
    }

    #[must_use]
    pub fn with_rules(extension: impl Into<String>, rules: RegexRules) -> Self {
        Self {
            extension: extension.into(),
            rules,
        }
    }

    #[must_use]
    pub const fn rules(&self) -> &RegexRules {
        &self.rules
    }
}

impl FileHandler for RegexReplacer {
    fn extension(&self) -> &str {
        &self.extension
    }

    fn kind(&self) -> &'static str {
        "regex-replace"
    }

    fn reset(&mut self) {}

    fn handle_file(&mut self, path: &Path) -> Result<()> {
        let original = text::read_normalized(path)?;
        let rewritten = self.rules.rewrite(&original);
        trace!(path = %path.display(), rules = self.rules.len(), "regex rewrite");
        text::write_text(path, &rewritten)
    }
}

#[cfg(test)]
#[path = "sequential_tests.rs"]
mod tests;
