use crate::EXIT_CONFIG_ERROR;
use crate::cli::{Cli, ReplaceArgs};
use crate::config::{Config, ReplaceConfig, RuleConfig};
use crate::error::{Result, SrcAnaError};
use crate::output::{print_error, print_warning};
use crate::replace::ReplaceMode;

use super::context::{
    apply_filter_args, color_choice_to_mode, format_output, load_config, run_analysis,
    summary_exit_code,
};

#[must_use]
pub fn run_replace(args: &ReplaceArgs, cli: &Cli) -> i32 {
    match run_replace_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns an error if no rules are given, a rule does not compile, or the
/// path is not a directory.
pub fn run_replace_impl(args: &ReplaceArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    if args.rule.is_empty() && (args.literal || !args.ext.is_empty()) && !cli.quiet {
        print_warning(
            "--literal and --ext only apply to rules given with --rule",
            Some("Add --rule FIND=WITH"),
        );
    }
    prepare_replace_config(&mut config, args)?;

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

/// Only replacers run; CLI rules form one more replacer after the
/// configured ones. CLI rules need at least one extension so a bare
/// `--rule` never rewrites every file under the root.
pub(crate) fn prepare_replace_config(config: &mut Config, args: &ReplaceArgs) -> Result<()> {
    config.counters.clear();
    apply_filter_args(&mut config.scan, &args.filter);

    if !args.rule.is_empty() {
        if args.ext.is_empty() {
            return Err(SrcAnaError::Config(
                "--rule needs --ext: name the extensions to rewrite (e.g. --ext .java)"
                    .to_string(),
            ));
        }
        config.replacers.push(ReplaceConfig {
            mode: if args.literal {
                ReplaceMode::Literal
            } else {
                ReplaceMode::Regex
            },
            extensions: args.ext.clone(),
            rules: args
                .rule
                .iter()
                .map(|rule| RuleConfig {
                    find: rule.find.clone(),
                    with: rule.with.clone(),
                })
                .collect(),
        });
    }
    if config.replacers.is_empty() {
        return Err(SrcAnaError::Config(
            "no replacement rules: pass --rule FIND=WITH or add [[replace]] to the config"
                .to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "replace_tests.rs"]
mod tests;
