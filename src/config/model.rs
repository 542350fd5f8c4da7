use serde::{Deserialize, Serialize};

use crate::analyzer::Analyzer;
use crate::counter::CounterKind;
use crate::error::Result;
use crate::handler::HandlerTemplate;
use crate::replace::{LiteralRules, RegexRules, ReplaceMode, ReplacementTable};

/// Complete `.src-ana.toml` contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    /// Counter handlers [[counter]], registered in declaration order.
    #[serde(default, rename = "counter")]
    pub counters: Vec<CounterConfig>,

    /// Replacer handlers [[replace]], registered after all counters.
    #[serde(default, rename = "replace")]
    pub replacers: Vec<ReplaceConfig>,
}

/// Traversal filtering [scan].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Suffix-anchored regular expressions an entry must match to be visited.
    #[serde(default)]
    pub include: Vec<String>,

    /// Suffix-anchored regular expressions that prune matching entries.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Consult ignore patterns for included entries (default: true).
    #[serde(default = "default_true")]
    pub include_before_ignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            ignore: Vec::new(),
            include_before_ignore: true,
        }
    }
}

/// A line counter registered for a set of extensions [[counter]].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CounterConfig {
    #[serde(default)]
    pub kind: CounterKind,

    /// Empty means every file.
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// A replacer registered for a set of extensions [[replace]].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReplaceConfig {
    #[serde(default)]
    pub mode: ReplaceMode,

    /// Empty means every file.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Rules [[replace.rules]], applied in order.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// One `find` to `with` substitution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    pub find: String,
    pub with: String,
}

const fn default_true() -> bool {
    true
}

/// Registration keys for a configured extension list; none means all files.
fn extension_keys(extensions: &[String]) -> Vec<&str> {
    if extensions.is_empty() {
        vec![""]
    } else {
        extensions.iter().map(String::as_str).collect()
    }
}

impl ScanConfig {
    /// Install the patterns and policy flag on an analyzer.
    ///
    /// # Errors
    /// Returns an error if any pattern is not a valid regular expression.
    pub fn apply(&self, analyzer: &mut Analyzer) -> Result<()> {
        for pattern in &self.include {
            analyzer.add_include_pattern(pattern)?;
        }
        for pattern in &self.ignore {
            analyzer.add_ignore_pattern(pattern)?;
        }
        analyzer.set_include_before_ignore(self.include_before_ignore);
        Ok(())
    }
}

impl CounterConfig {
    pub fn register(&self, analyzer: &mut Analyzer) {
        analyzer.register_for_extensions(&self.kind, extension_keys(&self.extensions));
    }
}

impl ReplaceConfig {
    /// The rules as an ordered table. A repeated `find` keeps its first
    /// position and takes the last `with`.
    #[must_use]
    pub fn table(&self) -> ReplacementTable {
        self.rules
            .iter()
            .map(|rule| (rule.find.as_str(), rule.with.as_str()))
            .collect()
    }

    /// Compile the rules for the configured mode.
    ///
    /// # Errors
    /// Returns an error if a regex rule does not compile or a literal rule
    /// has an empty key.
    pub fn compile(&self) -> Result<Box<dyn HandlerTemplate>> {
        let table = self.table();
        Ok(match self.mode {
            ReplaceMode::Regex => Box::new(RegexRules::compile(&table)?),
            ReplaceMode::Literal => Box::new(LiteralRules::compile(&table)?),
        })
    }

    /// # Errors
    /// Returns an error if the rules do not compile.
    pub fn register(&self, analyzer: &mut Analyzer) -> Result<()> {
        let template = self.compile()?;
        analyzer.register_for_extensions(&*template, extension_keys(&self.extensions));
        Ok(())
    }
}

impl Config {
    /// An analyzer with the scan settings applied and every configured
    /// handler registered: counters first, then replacers.
    ///
    /// # Errors
    /// Returns an error if a pattern or replacement rule does not compile.
    pub fn build_analyzer(&self) -> Result<Analyzer> {
        let mut analyzer = Analyzer::new();
        self.scan.apply(&mut analyzer)?;
        for counter in &self.counters {
            counter.register(&mut analyzer);
        }
        for replacer in &self.replacers {
            replacer.register(&mut analyzer)?;
        }
        Ok(analyzer)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
