use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::trace;

use crate::error::{Result, SrcAnaError};
use crate::handler::FileHandler;
use crate::text;

use super::{LineClassifier, PlainLines};

/// Totals accumulated by a counter since its last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    /// Files handed to the counter.
    pub files: usize,
    /// Characters over all lines, line terminators excluded.
    pub characters: usize,
    /// Lines over all files.
    pub lines: usize,
    /// Lines the classifier considered real code, if it classifies at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub significant: Option<usize>,
}

/// Handler counting files, characters and lines, delegating every line to
/// a [`LineClassifier`] for the significant-line count.
#[derive(Debug, Clone)]
pub struct LineCounter<C = PlainLines> {
    extension: String,
    classifier: C,
    files: usize,
    characters: usize,
    lines: usize,
    significant: usize,
}

impl LineCounter<PlainLines> {
    /// Counter without line classification.
    #[must_use]
    pub fn plain(extension: impl Into<String>) -> Self {
        Self::new(extension, PlainLines)
    }
}

impl<C: LineClassifier> LineCounter<C> {
    #[must_use]
    pub fn new(extension: impl Into<String>, classifier: C) -> Self {
        Self {
            extension: extension.into(),
            classifier,
            files: 0,
            characters: 0,
            lines: 0,
            significant: 0,
        }
    }

    #[must_use]
    pub const fn scanned_files(&self) -> usize {
        self.files
    }

    #[must_use]
    pub const fn characters(&self) -> usize {
        self.characters
    }

    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.lines
    }

    /// `None` for counters whose classifier does not classify lines.
    #[must_use]
    pub const fn significant_lines(&self) -> Option<usize> {
        if C::CLASSIFIES {
            Some(self.significant)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Count one file read from `reader`.
    ///
    /// Lines read before an I/O error stay counted.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn count_reader<R: BufRead>(&mut self, reader: R) -> std::io::Result<()> {
        self.files += 1;
        self.classifier.start_file();
        for line in text::lines(reader) {
            self.count_line(&line?);
        }
        Ok(())
    }

    fn count_line(&mut self, line: &str) {
        self.lines += 1;
        self.characters += line.chars().count();
        if self.classifier.is_significant(line) {
            self.significant += 1;
        }
    }
}

impl<C: LineClassifier> FileHandler for LineCounter<C> {
    fn extension(&self) -> &str {
        &self.extension
    }

    fn kind(&self) -> &'static str {
        self.classifier.name()
    }

    fn reset(&mut self) {
        self.files = 0;
        self.characters = 0;
        self.lines = 0;
        self.significant = 0;
        self.classifier.reset();
    }

    fn handle_file(&mut self, path: &Path) -> Result<()> {
        let before = self.lines;
        let counted = match File::open(path) {
            Ok(file) => self.count_reader(BufReader::new(file)),
            Err(e) => {
                // A file that cannot be opened still counts as scanned.
                self.files += 1;
                Err(e)
            }
        };
        counted.map_err(|source| SrcAnaError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        trace!(path = %path.display(), lines = self.lines - before, "counted");
        Ok(())
    }

    fn stats(&self) -> Option<LineStats> {
        Some(LineStats {
            files: self.files,
            characters: self.characters,
            lines: self.lines,
            significant: self.significant_lines(),
        })
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
