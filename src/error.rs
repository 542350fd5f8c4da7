use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SrcAnaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid regular expression: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to build replacement automaton: {0}")]
    Automaton(#[from] aho_corasick::BuildError),

    #[error("Replacement keys must not be empty")]
    EmptyKey,

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SrcAnaError {
    /// Short category name, used when reporting failures.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::NotADirectory(_) | Self::Io(_) => {
                "IO"
            }
            Self::InvalidPattern { .. } => "Pattern",
            Self::Automaton(_) | Self::EmptyKey => "Automaton",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Get a hint for fixing the error, if one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the .src-ana.toml file format and field names")
            }
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => {
                match source.kind() {
                    std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check file permissions for the current user")
                    }
                    _ => None,
                }
            }
            Self::InvalidPattern { .. } => {
                Some("Patterns are regular expressions; escape literal dots as \\.")
            }
            Self::EmptyKey => Some("Remove the rule with an empty search string"),
            Self::NotADirectory(_) => Some("Pass an existing directory to walk"),
            Self::Automaton(_) | Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// Wrap a regex compilation failure with the offending pattern.
    pub(crate) fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SrcAnaError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
