use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::counter::{CounterKind, LineCounter};
use crate::replace::{RegexRules, ReplacementTable};

#[test]
fn collect_lists_handlers_in_registration_order() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.java"), "int x;\n\n").unwrap();
    let table: ReplacementTable = [("x", "y")].into_iter().collect();

    let mut analyzer = Analyzer::new();
    analyzer.register_for_extensions(&CounterKind::CFamily, [".java"]);
    analyzer.register(LineCounter::plain(""));
    analyzer.register_for_extensions(&RegexRules::compile(&table).unwrap(), [".java"]);
    let report = analyzer.analyze(dir.path());

    let summary = RunSummary::collect(dir.path(), &analyzer, &report);

    assert_eq!(summary.files_seen, 1);
    assert_eq!(summary.handlers.len(), 3);
    assert_eq!(summary.handlers[0].kind, "c-family");
    assert_eq!(summary.handlers[0].stats.unwrap().significant, Some(1));
    assert_eq!(summary.handlers[1].extension, "");
    assert_eq!(summary.handlers[1].stats.unwrap().significant, None);
    assert!(summary.handlers[2].stats.is_none());
    assert!(!summary.has_failures());
}

#[test]
fn failure_summary_carries_category_and_cause() {
    let failure = HandlerFailure {
        path: PathBuf::from("/tmp/x.java"),
        extension: ".java".to_string(),
        error: crate::error::SrcAnaError::FileWrite {
            path: PathBuf::from("/tmp/x.java"),
            source: std::io::Error::other("read-only"),
        },
    };

    let summary = FailureSummary::from(&failure);

    assert_eq!(summary.error_type, "IO");
    assert_eq!(summary.message, "Failed to write file: /tmp/x.java");
    assert_eq!(summary.cause.as_deref(), Some("read-only"));
    assert_eq!(summary.path, Path::new("/tmp/x.java"));
}
