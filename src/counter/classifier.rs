use regex::{Regex, RegexSet};
use serde::{Deserialize, Serialize};

use crate::handler::{FileHandler, HandlerTemplate};

use super::LineCounter;

/// Decides per line whether it is real code.
pub trait LineClassifier {
    /// `false` for classifiers that only exist to satisfy the counter and
    /// never report a significant-line count.
    const CLASSIFIES: bool = true;

    /// Kind name reported by the owning counter.
    fn name(&self) -> &'static str;

    fn is_significant(&mut self, line: &str) -> bool;

    /// Called before the first line of each file.
    fn start_file(&mut self) {}

    /// Called when the owning counter resets.
    fn reset(&mut self) {}
}

/// No classification at all: counts files, characters and lines only.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainLines;

impl LineClassifier for PlainLines {
    const CLASSIFIES: bool = false;

    fn name(&self) -> &'static str {
        "lines"
    }

    fn is_significant(&mut self, _line: &str) -> bool {
        false
    }
}

/// Whole-line patterns of lines that are not code in C-like languages:
/// blank or brace-only, `//` comments, and lines opening or continuing a
/// `/* */` block, each optionally preceded by braces.
const C_FAMILY_NOISE: [&str; 3] = [
    r"^\s*[{]?\s*[}]?\s*$",
    r"^\s*[{]?\s*[}]?\s*//.*$",
    r"^\s*[{]?\s*[}]?\s*/?\*.*$",
];

/// Single-line heuristic for Java, C, C++, C# and friends.
///
/// Block comments are not tracked across lines: code after an unclosed
/// `/*` still counts unless it starts with `*`.
#[derive(Debug, Clone)]
pub struct CFamilyLines {
    noise: RegexSet,
}

impl CFamilyLines {
    /// # Panics
    /// Never in practice: the patterns are compile-time constants.
    #[must_use]
    pub fn new() -> Self {
        Self {
            // SAFETY: constant patterns, covered by tests
            noise: RegexSet::new(C_FAMILY_NOISE).expect("valid C-family patterns"),
        }
    }
}

impl Default for CFamilyLines {
    fn default() -> Self {
        Self::new()
    }
}

impl LineClassifier for CFamilyLines {
    fn name(&self) -> &'static str {
        "c-family"
    }

    fn is_significant(&mut self, line: &str) -> bool {
        !self.noise.is_match(line)
    }
}

/// Classifier for XML-like markup with `<!-- -->` comments.
///
/// Tracks whether the current line is inside a comment. A line that opens
/// a comment is itself inside it; it only counts when the comment closes on
/// the same line and content follows the `-->`.
#[derive(Debug, Clone)]
pub struct MarkupLines {
    blank: Regex,
    open: Regex,
    close: Regex,
    content_after_close: Regex,
    in_comment: bool,
}

impl MarkupLines {
    /// # Panics
    /// Never in practice: the patterns are compile-time constants.
    #[must_use]
    pub fn new() -> Self {
        // SAFETY: constant patterns, covered by tests
        let compile = |pattern| Regex::new(pattern).expect("valid markup pattern");
        Self {
            blank: compile(r"^\s*$"),
            open: compile(r"<!--"),
            close: compile(r"-->"),
            content_after_close: compile(r"-->\s*\S"),
            in_comment: false,
        }
    }

    /// Whether the last classified line left a comment open.
    #[must_use]
    pub const fn in_comment(&self) -> bool {
        self.in_comment
    }
}

impl Default for MarkupLines {
    fn default() -> Self {
        Self::new()
    }
}

impl LineClassifier for MarkupLines {
    fn name(&self) -> &'static str {
        "markup"
    }

    fn is_significant(&mut self, line: &str) -> bool {
        let opens = self.open.is_match(line);
        let closes = self.close.is_match(line);
        let inside = self.in_comment || opens;
        let significant = !self.blank.is_match(line)
            && (!inside || self.content_after_close.is_match(line));

        if opens {
            self.in_comment = true;
        }
        if closes {
            self.in_comment = false;
        }
        significant
    }

    fn start_file(&mut self) {
        self.in_comment = false;
    }

    fn reset(&mut self) {
        self.in_comment = false;
    }
}

/// Built-in counter flavors, usable as a template for several extensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CounterKind {
    Plain,
    #[default]
    CFamily,
    Markup,
}

impl HandlerTemplate for CounterKind {
    fn instantiate(&self, extension: &str) -> Box<dyn FileHandler> {
        match self {
            Self::Plain => Box::new(LineCounter::plain(extension)),
            Self::CFamily => Box::new(LineCounter::new(extension, CFamilyLines::new())),
            Self::Markup => Box::new(LineCounter::new(extension, MarkupLines::new())),
        }
    }
}

impl std::str::FromStr for CounterKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "lines" => Ok(Self::Plain),
            "c-family" | "c" | "java" => Ok(Self::CFamily),
            "markup" | "xml" => Ok(Self::Markup),
            _ => Err(format!("Unknown counter kind: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
