//! Plumbing shared by the subcommands: config, filters, tracing, output.

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::analyzer::Analyzer;
use crate::cli::{ColorChoice, FilterArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, ScanConfig};
use crate::error::{Result, SrcAnaError};
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, RunSummary, ScanProgress,
    TextFormatter,
};
use crate::{EXIT_HANDLER_FAILURE, EXIT_SUCCESS};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Default log filter for the given verbosity, used when `RUST_LOG` is unset.
#[must_use]
pub const fn log_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over
/// the verbosity flags. A second call is a no-op.
pub fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load the config the way the CLI flags ask for.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn load_config(path: Option<&Path>, no_config: bool) -> Result<Config> {
    load_config_with(&FileConfigLoader::new(), path, no_config)
}

/// # Errors
/// Returns an error if the loader fails.
pub fn load_config_with<L: ConfigLoader>(
    loader: &L,
    path: Option<&Path>,
    no_config: bool,
) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let result = match path {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };
    Ok(result.config)
}

/// Append CLI filters to the configured ones.
pub fn apply_filter_args(scan: &mut ScanConfig, filter: &FilterArgs) {
    scan.include.extend(filter.include.iter().cloned());
    scan.ignore.extend(filter.ignore.iter().cloned());
    if filter.no_include_before_ignore {
        scan.include_before_ignore = false;
    }
}

/// Walk `root` once with a spinner on stderr.
///
/// # Errors
/// Returns an error if `root` is not a directory.
pub fn run_analysis(analyzer: &mut Analyzer, root: &Path, quiet: bool) -> Result<RunSummary> {
    if !root.is_dir() {
        return Err(SrcAnaError::NotADirectory(root.to_path_buf()));
    }

    let progress = ScanProgress::new(quiet);
    let report = analyzer.analyze_with(root, |path| progress.tick(path));
    progress.finish();

    info!(
        files = report.files_seen,
        failures = report.failures.len(),
        "traversal finished"
    );
    Ok(RunSummary::collect(root, analyzer, &report))
}

/// # Errors
/// Returns an error if serialization fails.
pub fn format_output(
    format: OutputFormat,
    summary: &RunSummary,
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(summary),
        OutputFormat::Json => JsonFormatter.format(summary),
    }
}

#[must_use]
pub fn summary_exit_code(summary: &RunSummary) -> i32 {
    if summary.has_failures() {
        EXIT_HANDLER_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
