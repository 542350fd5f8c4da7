//! Walk a directory tree and hand each file to pluggable per-file handlers:
//! line counters and string replacers keyed by path suffix.

pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod error;
pub mod handler;
pub mod output;
pub mod replace;
pub mod text;

pub use analyzer::Analyzer;
pub use error::{Result, SrcAnaError};
pub use handler::{FileHandler, HandlerTemplate};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_HANDLER_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
