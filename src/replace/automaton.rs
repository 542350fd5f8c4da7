use std::path::Path;
use std::sync::Arc;

use aho_corasick::{AhoCorasick, FindIter, MatchKind};
use tracing::trace;

use crate::error::{Result, SrcAnaError};
use crate::handler::{FileHandler, HandlerTemplate};
use crate::text;

use super::ReplacementTable;

#[derive(Debug)]
struct Compiled {
    matcher: AhoCorasick,
    replacements: Vec<String>,
}

/// Literal keys compiled into one leftmost-longest Aho-Corasick automaton.
///
/// Built once and immutable afterwards; clones share the automaton.
#[derive(Debug, Clone)]
pub struct LiteralRules {
    compiled: Arc<Compiled>,
}

impl LiteralRules {
    /// # Errors
    /// Returns [`SrcAnaError::EmptyKey`] if a key is empty, or
    /// [`SrcAnaError::Automaton`] if the automaton cannot be built.
    pub fn compile(table: &ReplacementTable) -> Result<Self> {
        if table.keys().any(str::is_empty) {
            return Err(SrcAnaError::EmptyKey);
        }
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(table.keys())?;
        let replacements = table.iter().map(|(_, r)| r.to_string()).collect();
        Ok(Self {
            compiled: Arc::new(Compiled {
                matcher,
                replacements,
            }),
        })
    }

    /// Split `text` into matched keys and the fragments between them.
    #[must_use]
    pub fn tokenize<'a>(&'a self, text: &'a str) -> Tokens<'a> {
        Tokens {
            text,
            replacements: &self.compiled.replacements,
            matches: self.compiled.matcher.find_iter(text),
            pos: 0,
            pending: None,
        }
    }

    /// Replace every match in a single pass over `text`.
    #[must_use]
    pub fn rewrite(&self, text: &str) -> String {
        self.tokenize(text).map(|token| token.output()).collect()
    }
}

impl HandlerTemplate for LiteralRules {
    fn instantiate(&self, extension: &str) -> Box<dyn FileHandler> {
        Box::new(AutomatonReplacer::with_rules(extension, self.clone()))
    }
}

/// One span of scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A key found in the text together with its replacement.
    Match { key: &'a str, replacement: &'a str },
    /// Text between matches, copied through unchanged.
    Fragment(&'a str),
}

impl<'a> Token<'a> {
    /// The original text this token covers.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        match *self {
            Self::Match { key, .. } => key,
            Self::Fragment(text) => text,
        }
    }

    /// The text this token is rewritten to.
    #[must_use]
    pub const fn output(&self) -> &'a str {
        match *self {
            Self::Match { replacement, .. } => replacement,
            Self::Fragment(text) => text,
        }
    }

    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

/// Lazy, gap-free sequence of [`Token`]s covering a text end to end.
pub struct Tokens<'a> {
    text: &'a str,
    replacements: &'a [String],
    matches: FindIter<'a, 'a>,
    pos: usize,
    pending: Option<aho_corasick::Match>,
}

impl<'a> Tokens<'a> {
    fn matched(&mut self, m: &aho_corasick::Match) -> Token<'a> {
        let (text, replacements) = (self.text, self.replacements);
        self.pos = m.end();
        Token::Match {
            key: &text[m.start()..m.end()],
            replacement: &replacements[m.pattern().as_usize()],
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(m) = self.pending.take() {
            return Some(self.matched(&m));
        }
        match self.matches.next() {
            Some(m) if m.start() > self.pos => {
                let text = self.text;
                let fragment = &text[self.pos..m.start()];
                self.pos = m.start();
                self.pending = Some(m);
                Some(Token::Fragment(fragment))
            }
            Some(m) => Some(self.matched(&m)),
            None if self.pos < self.text.len() => {
                let text = self.text;
                let fragment = &text[self.pos..];
                self.pos = self.text.len();
                Some(Token::Fragment(fragment))
            }
            None => None,
        }
    }
}

/// Rewrites files by replacing literal keys in a single automaton pass.
///
/// Inserted text is never rescanned: with `a -> b` and `b -> c`, the text
/// `a` becomes `b`. Overlapping keys resolve leftmost first, then longest.
#[derive(Debug, Clone)]
pub struct AutomatonReplacer {
    extension: String,
    rules: LiteralRules,
}

impl AutomatonReplacer {
    /// # Errors
    /// Returns an error if the automaton cannot be built from `table`.
    pub fn new(extension: impl Into<String>, table: &ReplacementTable) -> Result<Self> {
        Ok(Self::with_rules(extension, LiteralRules::compile(table)?))
    }

    #[must_use]
    pub fn with_rules(extension: impl Into<String>, rules: LiteralRules) -> Self {
        Self {
            extension: extension.into(),
            rules,
        }
    }

    #[must_use]
    pub const fn rules(&self) -> &LiteralRules {
        &self.rules
    }
}

impl FileHandler for AutomatonReplacer {
    fn extension(&self) -> &str {
        &self.extension
    }

    fn kind(&self) -> &'static str {
        "literal-replace"
    }

    fn reset(&mut self) {}

    fn handle_file(&mut self, path: &Path) -> Result<()> {
        let original = text::read_normalized(path)?;
        let rewritten = self.rules.rewrite(&original);
        trace!(path = %path.display(), "literal rewrite");
        text::write_text(path, &rewritten)
    }
}

#[cfg(test)]
#[path = "automaton_tests.rs"]
mod tests;
