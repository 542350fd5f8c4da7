use std::error::Error as _;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::analyzer::{AnalysisReport, Analyzer, HandlerFailure};
use crate::counter::LineStats;

/// Everything a formatter needs to describe one traversal.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub root: PathBuf,
    pub files_seen: usize,
    pub handlers: Vec<HandlerSummary>,
    pub failures: Vec<FailureSummary>,
}

/// One registered handler, in registration order.
#[derive(Debug, Clone, Serialize)]
pub struct HandlerSummary {
    pub extension: String,
    pub kind: &'static str,
    #[serde(flatten)]
    pub stats: Option<LineStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailureSummary {
    pub path: PathBuf,
    pub extension: String,
    pub error_type: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl RunSummary {
    #[must_use]
    pub fn collect(root: &Path, analyzer: &Analyzer, report: &AnalysisReport) -> Self {
        Self {
            root: root.to_path_buf(),
            files_seen: report.files_seen,
            handlers: analyzer
                .handlers()
                .map(|handler| HandlerSummary {
                    extension: handler.extension().to_string(),
                    kind: handler.kind(),
                    stats: handler.stats(),
                })
                .collect(),
            failures: report.failures.iter().map(FailureSummary::from).collect(),
        }
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl From<&HandlerFailure> for FailureSummary {
    fn from(failure: &HandlerFailure) -> Self {
        Self {
            path: failure.path.clone(),
            extension: failure.extension.clone(),
            error_type: failure.error.error_type(),
            message: failure.error.to_string(),
            cause: failure.error.source().map(ToString::to_string),
        }
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
