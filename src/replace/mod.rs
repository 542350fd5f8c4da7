//! Handlers that rewrite files by string substitution.
//!
//! Two engines share the same [`ReplacementTable`] input but differ in
//! semantics: [`RegexReplacer`] applies its rules one after another over the
//! whole text, so later rules see what earlier ones inserted, while
//! [`AutomatonReplacer`] scans the original text once and never rescans
//! inserted text.

mod automaton;
mod sequential;
mod table;

pub use automaton::{AutomatonReplacer, LiteralRules, Token, Tokens};
pub use sequential::{RegexReplacer, RegexRules};
pub use table::ReplacementTable;

use serde::{Deserialize, Serialize};

/// Which engine a configured rule set runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplaceMode {
    /// Keys are regular expressions, applied in table order.
    #[default]
    Regex,
    /// Keys are literal strings, matched in a single pass.
    Literal,
}

impl std::str::FromStr for ReplaceMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "regex" | "sequential" => Ok(Self::Regex),
            "literal" | "automaton" => Ok(Self::Literal),
            _ => Err(format!("Unknown replace mode: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
