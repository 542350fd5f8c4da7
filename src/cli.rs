use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::counter::CounterKind;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "src-ana")]
#[command(author, version, about = "Walk a source tree and count or rewrite its files")]
#[command(long_about = "Walks a directory tree and hands every file to the handlers \
    registered for its extension: line counters or string replacers.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - A handler failed on at least one file\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the progress spinner and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file (default: .src-ana.toml, then user config)
    #[arg(long, global = true, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count files, lines and significant lines per extension
    Count(CountArgs),

    /// Rewrite files in place by string substitution
    Replace(ReplaceArgs),
}

/// Traversal filters shared by all commands, added to those from config.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only visit entries whose path ends with a match (regex, repeatable)
    #[arg(long, short = 'I')]
    pub include: Vec<String>,

    /// Prune entries whose path ends with a match (regex, repeatable)
    #[arg(long, short = 'x')]
    pub ignore: Vec<String>,

    /// Never consult ignore patterns
    #[arg(long)]
    pub no_include_before_ignore: bool,
}

#[derive(Parser, Debug)]
pub struct CountArgs {
    /// Directory to walk
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Extensions to count (comma-separated, e.g. .java,.c,.h)
    #[arg(long, value_delimiter = ',')]
    pub ext: Vec<String>,

    /// Line classification for --ext [possible values: plain, c-family, markup]
    #[arg(long)]
    pub kind: Option<CounterKind>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ReplaceArgs {
    /// Directory to walk
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Substitution as FIND=WITH (repeatable, applied in order)
    #[arg(long, short = 'r', value_parser = parse_rule)]
    pub rule: Vec<ReplaceRule>,

    /// Treat FIND as a literal string and replace in a single pass
    #[arg(long)]
    pub literal: bool,

    /// Extensions to rewrite (comma-separated); required with --rule
    #[arg(long, value_delimiter = ',')]
    pub ext: Vec<String>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// One `FIND=WITH` pair from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceRule {
    pub find: String,
    pub with: String,
}

/// Split at the first `=`; `WITH` may be empty or contain further `=`.
///
/// # Errors
/// Returns an error if the argument has no `=`.
pub fn parse_rule(s: &str) -> std::result::Result<ReplaceRule, String> {
    let (find, with) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid rule '{s}': expected FIND=WITH"))?;
    Ok(ReplaceRule {
        find: find.to_string(),
        with: with.to_string(),
    })
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
