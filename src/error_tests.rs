use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = SrcAnaError::Config("unknown counter kind".to_string());
    assert_eq!(err.to_string(), "Configuration error: unknown counter kind");
}

#[test]
fn error_display_file_read() {
    let err = SrcAnaError::FileRead {
        path: PathBuf::from("Test.java"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("Test.java"));
}

#[test]
fn error_display_file_write() {
    let err = SrcAnaError::FileWrite {
        path: PathBuf::from("out/Test.java"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to write file: out/Test.java");
}

#[test]
fn error_display_invalid_pattern() {
    let source = regex::Regex::new("(unclosed").unwrap_err();
    let err = SrcAnaError::invalid_pattern("(unclosed", source);
    assert_eq!(err.to_string(), "Invalid regular expression: (unclosed");
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(SrcAnaError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(
        SrcAnaError::FileRead {
            path: PathBuf::from("a.c"),
            source: std::io::Error::other("boom"),
        }
        .error_type(),
        "IO"
    );
    assert_eq!(SrcAnaError::EmptyKey.error_type(), "Automaton");
    assert_eq!(
        SrcAnaError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn suggestion_file_read_not_found() {
    let err = SrcAnaError::FileRead {
        path: PathBuf::from("missing.java"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert!(err.suggestion().unwrap().contains("file path exists"));
}

#[test]
fn suggestion_file_write_permission_denied() {
    let err = SrcAnaError::FileWrite {
        path: PathBuf::from("protected.java"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
    };
    assert!(err.suggestion().unwrap().contains("permissions"));
}

#[test]
fn suggestion_other_io_error_has_none() {
    let err = SrcAnaError::FileRead {
        path: PathBuf::from("unknown.java"),
        source: std::io::Error::other("unknown error"),
    };
    assert!(err.suggestion().is_none());
}

#[test]
fn io_error_converts_with_question_mark() {
    fn fails() -> Result<()> {
        Err(std::io::Error::other("disk gone"))?;
        Ok(())
    }
    assert!(matches!(fails(), Err(SrcAnaError::Io(_))));
}

#[test]
fn not_a_directory_is_io_with_hint() {
    let err = SrcAnaError::NotADirectory(PathBuf::from("missing"));
    assert_eq!(err.to_string(), "Not a directory: missing");
    assert_eq!(err.error_type(), "IO");
    assert!(err.suggestion().is_some());
}
