use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

fn parse(args: &[&str]) -> (Cli, ReplaceArgs) {
    let argv = || std::iter::once("src-ana").chain(args.iter().copied());
    let Commands::Replace(replace) = Cli::parse_from(argv()).command else {
        panic!("Expected Replace command");
    };
    (Cli::parse_from(argv()), replace)
}

#[test]
fn cli_rules_become_trailing_replacer() {
    let (_, args) = parse(&["replace", "--rule", "a=b", "--literal", "--ext", ".txt"]);
    let mut config: Config = toml::from_str(
        r#"
[[counter]]
kind = "plain"

[[replace]]
[[replace.rules]]
find = "x"
with = "y"
"#,
    )
    .unwrap();

    prepare_replace_config(&mut config, &args).unwrap();

    assert!(config.counters.is_empty());
    assert_eq!(config.replacers.len(), 2);
    assert_eq!(config.replacers[1].mode, ReplaceMode::Literal);
    assert_eq!(config.replacers[1].extensions, vec![".txt"]);
    assert_eq!(config.replacers[1].rules[0].find, "a");
}

#[test]
fn no_rules_anywhere_is_an_error() {
    let (_, args) = parse(&["replace"]);
    let mut config = Config::default();

    let result = prepare_replace_config(&mut config, &args);

    assert!(matches!(result, Err(SrcAnaError::Config(_))));
}

#[test]
fn cli_rules_without_extension_are_rejected() {
    let (_, args) = parse(&["replace", "--rule", "a=b"]);
    let mut config = Config::default();

    let err = prepare_replace_config(&mut config, &args).unwrap_err();

    assert!(matches!(err, SrcAnaError::Config(ref msg) if msg.contains("--ext")));
    assert!(config.replacers.is_empty());
}

#[test]
fn run_replace_rewrites_sequentially() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("Year.java");
    std::fs::write(&file, "int year = 2017;").unwrap();
    let root = dir.path().to_string_lossy().to_string();
    let (cli, args) = parse(&[
        "--no-config",
        "-q",
        "replace",
        &root,
        "--rule",
        "2017=7102",
        "--rule",
        "7102=2018",
        "--ext",
        ".java",
    ]);

    assert_eq!(run_replace_impl(&args, &cli).unwrap(), EXIT_SUCCESS);
    assert_eq!(std::fs::read_to_string(file).unwrap(), "int year = 2018;\n");
}

#[test]
fn run_replace_literal_single_pass() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.txt");
    std::fs::write(&file, "2017\n").unwrap();
    let root = dir.path().to_string_lossy().to_string();
    let (cli, args) = parse(&[
        "--no-config",
        "-q",
        "replace",
        &root,
        "--literal",
        "--rule",
        "2017=7102",
        "--rule",
        "7102=2018",
        "--ext",
        ".txt",
    ]);

    assert_eq!(run_replace(&args, &cli), EXIT_SUCCESS);
    assert_eq!(std::fs::read_to_string(file).unwrap(), "7102\n");
}

#[test]
fn run_replace_invalid_regex_is_config_error() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_string_lossy().to_string();
    let (cli, args) = parse(&[
        "--no-config",
        "-q",
        "replace",
        &root,
        "--rule",
        "(=x",
        "--ext",
        ".java",
    ]);

    assert_eq!(run_replace(&args, &cli), EXIT_CONFIG_ERROR);
}
