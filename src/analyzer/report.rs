use std::path::PathBuf;

use crate::error::SrcAnaError;

/// A handler that failed on one file.
#[derive(Debug)]
pub struct HandlerFailure {
    pub path: PathBuf,
    /// Extension key of the failing handler.
    pub extension: String,
    pub error: SrcAnaError,
}

/// Outcome of a single traversal.
#[derive(Debug, Default)]
pub struct AnalysisReport {
    /// Files dispatched during this traversal.
    pub files_seen: usize,
    pub failures: Vec<HandlerFailure>,
}

impl AnalysisReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
