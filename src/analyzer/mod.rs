//! Directory traversal, include/ignore filtering and handler dispatch.

mod patterns;
mod report;

pub use patterns::{PathFilter, PathPatterns, Skip};
pub use report::{AnalysisReport, HandlerFailure};

use std::path::Path;

use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use crate::error::Result;
use crate::handler::{FileHandler, HandlerTemplate};

/// Walks directory trees and hands every visited file to the registered
/// handlers whose extension key is a suffix of the file's absolute path.
///
/// Handlers run in registration order. Handler state accumulates across
/// traversals until [`Analyzer::reset`] is called; patterns and the
/// include-before-ignore flag are configuration and survive resets.
pub struct Analyzer {
    handlers: Vec<Box<dyn FileHandler>>,
    filter: PathFilter,
    file_count: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            filter: PathFilter::default(),
            file_count: 0,
        }
    }

    /// Register a single handler under its own extension key.
    pub fn register(&mut self, handler: impl FileHandler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Register an already boxed handler.
    pub fn register_boxed(&mut self, handler: Box<dyn FileHandler>) {
        self.handlers.push(handler);
    }

    /// Register one fresh instance of `template` per extension, in order.
    pub fn register_for_extensions<T, I, S>(&mut self, template: &T, extensions: I)
    where
        T: HandlerTemplate + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for extension in extensions {
            self.handlers.push(template.instantiate(extension.as_ref()));
        }
    }

    /// Add a suffix-anchored regular expression for entries to skip.
    ///
    /// # Errors
    /// Returns an error if `pattern` is not a valid regular expression.
    pub fn add_ignore_pattern(&mut self, pattern: &str) -> Result<()> {
        self.filter.ignore.add(pattern)
    }

    /// Add a suffix-anchored regular expression for entries to visit
    /// exclusively. Without include patterns every entry is a candidate.
    ///
    /// # Errors
    /// Returns an error if `pattern` is not a valid regular expression.
    pub fn add_include_pattern(&mut self, pattern: &str) -> Result<()> {
        self.filter.include.add(pattern)
    }

    /// Enable or disable ignore checks for included entries (default: on).
    ///
    /// When disabled, ignore patterns are not evaluated at all.
    pub const fn set_include_before_ignore(&mut self, enabled: bool) {
        self.filter.include_before_ignore = enabled;
    }

    #[must_use]
    pub const fn include_before_ignore(&self) -> bool {
        self.filter.include_before_ignore
    }

    #[must_use]
    pub const fn filter(&self) -> &PathFilter {
        &self.filter
    }

    /// Zero the file counter and reset every handler.
    ///
    /// Must be called between independent traversals, otherwise results of
    /// the runs accumulate.
    pub fn reset(&mut self) {
        self.file_count = 0;
        for handler in &mut self.handlers {
            handler.reset();
        }
    }

    /// Files dispatched since the last reset.
    #[must_use]
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Walk `dir` recursively and dispatch every visited file.
    pub fn analyze(&mut self, dir: &Path) -> AnalysisReport {
        self.analyze_with(dir, |_| {})
    }

    /// Like [`Analyzer::analyze`], calling `on_file` for every dispatched
    /// file before its handlers run.
    ///
    /// Directories that cannot be listed contribute no entries; handler
    /// failures are collected in the report and never stop the walk.
    pub fn analyze_with<F: FnMut(&Path)>(&mut self, dir: &Path, mut on_file: F) -> AnalysisReport {
        let mut report = AnalysisReport::default();
        let root = match dunce::canonicalize(dir) {
            Ok(root) => root,
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "cannot resolve directory");
                return report;
            }
        };

        let filter = &self.filter;
        let walker = WalkDir::new(&root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || admits(filter, entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.depth() == 0 || !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            self.file_count += 1;
            report.files_seen += 1;
            on_file(path);
            dispatch(&mut self.handlers, path, &mut report);
        }
        report
    }

    /// All registered handlers in dispatch order.
    pub fn handlers(&self) -> impl Iterator<Item = &dyn FileHandler> {
        self.handlers.iter().map(|handler| &**handler)
    }

    /// The first handler whose extension key equals `extension`.
    #[must_use]
    pub fn lookup(&self, extension: &str) -> Option<&dyn FileHandler> {
        self.handlers().find(|h| h.extension() == extension)
    }

    /// Every handler whose extension key equals `extension`.
    #[must_use]
    pub fn lookup_exact(&self, extension: &str) -> Vec<&dyn FileHandler> {
        self.handlers()
            .filter(|h| h.extension() == extension)
            .collect()
    }

    /// Every handler whose extension key ends with `extension`.
    #[must_use]
    pub fn lookup_by_suffix(&self, extension: &str) -> Vec<&dyn FileHandler> {
        self.handlers()
            .filter(|h| h.extension().ends_with(extension))
            .collect()
    }
}

fn admits(filter: &PathFilter, path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    match filter.skip_reason(&path_str) {
        None => true,
        Some(reason) => {
            debug!(path = %path_str, ?reason, "skipped");
            false
        }
    }
}

fn dispatch(handlers: &mut [Box<dyn FileHandler>], path: &Path, report: &mut AnalysisReport) {
    let path_str = path.to_string_lossy();
    for handler in handlers.iter_mut().filter(|h| h.matches(&path_str)) {
        trace!(path = %path_str, extension = handler.extension(), "dispatch");
        if let Err(error) = handler.handle_file(path) {
            warn!(
                path = %path_str,
                extension = handler.extension(),
                error = %error,
                "handler failed"
            );
            report.failures.push(HandlerFailure {
                path: path.to_path_buf(),
                extension: handler.extension().to_string(),
                error,
            });
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
