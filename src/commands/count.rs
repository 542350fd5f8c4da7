use tracing::debug;

use crate::EXIT_CONFIG_ERROR;
use crate::cli::{Cli, CountArgs};
use crate::config::{Config, CounterConfig};
use crate::counter::CounterKind;
use crate::error::Result;
use crate::output::print_error;

use super::context::{
    apply_filter_args, color_choice_to_mode, format_output, load_config, run_analysis,
    summary_exit_code,
};

#[must_use]
pub fn run_count(args: &CountArgs, cli: &Cli) -> i32 {
    match run_count_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns an error if the config is invalid or the path is not a directory.
pub fn run_count_impl(args: &CountArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    prepare_count_config(&mut config, args);

    let mut analyzer = config.build_analyzer()?;
    let summary = run_analysis(&mut analyzer, &args.path, cli.quiet)?;

    let output = format_output(
        args.format,
        &summary,
        color_choice_to_mode(cli.color),
        cli.verbose,
    )?;
    print!("{output}");
    Ok(summary_exit_code(&summary))
}

/// Counting never rewrites files, so configured replacers are dropped. CLI
/// counters come after configured ones; with none at all every file is
/// counted by a plain counter.
pub(crate) fn prepare_count_config(config: &mut Config, args: &CountArgs) {
    config.replacers.clear();
    apply_filter_args(&mut config.scan, &args.filter);

    if !args.ext.is_empty() || args.kind.is_some() {
        config.counters.push(CounterConfig {
            kind: args.kind.unwrap_or_default(),
            extensions: args.ext.clone(),
        });
    }
    if config.counters.is_empty() {
        debug!("no counters configured, counting all files");
        config.counters.push(CounterConfig {
            kind: CounterKind::Plain,
            extensions: Vec::new(),
        });
    }
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
