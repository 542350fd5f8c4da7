//! The per-file capability the analyzer dispatches to.

use std::path::Path;

use crate::counter::LineStats;
use crate::error::Result;

/// A pluggable unit of per-file behavior.
///
/// The analyzer only ever sees handlers through this trait: it asks for the
/// extension key, resets the handler between traversals and hands it every
/// file whose absolute path ends with that key.
pub trait FileHandler {
    /// Suffix a file path must end with to be handled, e.g. `"java"`,
    /// `".java"` or `"Handler.java"`. The empty string matches every file.
    fn extension(&self) -> &str;

    /// Short name of the handler kind, used in reports.
    fn kind(&self) -> &'static str;

    /// Restore the state the handler had right after construction.
    fn reset(&mut self);

    /// Process one file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or written. The failure
    /// only concerns this file; the traversal carries on.
    fn handle_file(&mut self, path: &Path) -> Result<()>;

    /// Accumulated line statistics, for handlers that count.
    fn stats(&self) -> Option<LineStats> {
        None
    }

    /// Whether a file path (as a string) falls under this handler.
    fn matches(&self, path: &str) -> bool {
        path.ends_with(self.extension())
    }
}

/// Factory producing independent handler instances, one per extension.
///
/// One configured template (a counter kind, a compiled rule set) can be
/// registered for several extensions; each instantiation owns its own
/// accumulator state.
pub trait HandlerTemplate {
    fn instantiate(&self, extension: &str) -> Box<dyn FileHandler>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
