use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn defaults_with_no_arguments() {
    let cli = Cli::parse_from(["project-index"]);
    assert_eq!(cli.root, PathBuf::from("."));
    assert_eq!(cli.max_depth(), None);
    assert_eq!(cli.output_format(), None);
    assert!(!cli.no_gitignore);
    assert!(!cli.no_config);
    assert!(cli.output.is_none());
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
}

#[test]
fn parses_positional_arguments() {
    let cli = Cli::parse_from(["project-index", "/tmp/p", "2", "json"]);
    assert_eq!(cli.root, PathBuf::from("/tmp/p"));
    assert_eq!(cli.max_depth(), Some(2));
    assert_eq!(cli.output_format(), Some(OutputFormat::Json));
}

#[test]
fn non_numeric_depth_is_ignored() {
    let cli = Cli::parse_from(["project-index", ".", "abc"]);
    assert_eq!(cli.max_depth(), None);
}

#[test]
fn fractional_depth_is_ignored() {
    let cli = Cli::parse_from(["project-index", ".", "1.5"]);
    assert_eq!(cli.max_depth(), None);
}

#[test]
fn zero_depth_is_accepted() {
    let cli = Cli::parse_from(["project-index", ".", "0"]);
    assert_eq!(cli.max_depth(), Some(0));
}

#[test]
fn negative_depth_is_ignored() {
    let cli = Cli::parse_from(["project-index", ".", "-1", "json"]);
    assert_eq!(cli.depth.as_deref(), Some("-1"));
    assert_eq!(cli.max_depth(), None);
    assert_eq!(cli.output_format(), Some(OutputFormat::Json));
}

#[test]
fn surplus_positionals_are_ignored() {
    let cli = Cli::parse_from(["project-index", ".", "2", "json", "extra", "more"]);
    assert_eq!(cli.max_depth(), Some(2));
    assert_eq!(cli.output_format(), Some(OutputFormat::Json));
    assert_eq!(cli.extra, vec!["extra", "more"]);
}

#[test]
fn flags_still_parse_after_surplus_positionals() {
    let cli = Cli::parse_from(["project-index", ".", "2", "json", "extra", "-q"]);
    assert!(cli.quiet);
    assert_eq!(cli.extra, vec!["extra"]);
}

#[test]
fn unknown_positional_format_is_not_a_choice() {
    let cli = Cli::parse_from(["project-index", ".", "3", "html"]);
    assert_eq!(cli.output_format(), None);
}

#[test]
fn no_gitignore_flag_after_positionals() {
    let cli = Cli::parse_from(["project-index", ".", "3", "--no-gitignore"]);
    assert!(cli.no_gitignore);
    assert_eq!(cli.format_arg, None);
    assert_eq!(cli.max_depth(), Some(3));
}

#[test]
fn named_format_wins_over_positional() {
    let cli = Cli::parse_from(["project-index", ".", "3", "json", "--format", "markdown"]);
    assert_eq!(cli.output_format(), Some(OutputFormat::Markdown));
}

#[test]
fn named_format_rejects_unknown_value() {
    assert!(Cli::try_parse_from(["project-index", "--format", "yaml"]).is_err());
}

#[test]
fn output_and_config_flags() {
    let cli = Cli::parse_from([
        "project-index",
        "-o",
        "INDEX.md",
        "-c",
        "conf.toml",
        "-vv",
    ]);
    assert_eq!(cli.output, Some(PathBuf::from("INDEX.md")));
    assert_eq!(cli.config, Some(PathBuf::from("conf.toml")));
    assert_eq!(cli.verbose, 2);
}

#[test]
fn config_conflicts_with_no_config() {
    assert!(Cli::try_parse_from(["project-index", "-c", "a.toml", "--no-config"]).is_err());
}
