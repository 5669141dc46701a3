use clap::Parser;
use std::path::PathBuf;

use swiftlint_annotate::cli::{Cli, Verbosity};

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["swiftlint-annotate"]);

    assert_eq!(cli.swiftlint_version, None);
    assert!(!cli.strict);
    assert_eq!(cli.args, None);
    assert_eq!(cli.workspace, None);
    assert_eq!(cli.tool_cache, None);
    assert_eq!(cli.releases_url, None);
    assert_eq!(cli.config, None);
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
    assert_eq!(cli.verbosity(), Verbosity::Normal);
}

#[test]
fn test_all_options() {
    let cli = Cli::parse_from([
        "swiftlint-annotate",
        "--swiftlint-version",
        "0.57.0",
        "-s",
        "--args=--config foo.yml",
        "-w",
        "/repo",
        "--tool-cache",
        "/cache",
        "--releases-url",
        "https://mirror.example.com",
        "-c",
        "ci.toml",
    ]);

    assert_eq!(cli.swiftlint_version.as_deref(), Some("0.57.0"));
    assert!(cli.strict);
    assert_eq!(cli.args.as_deref(), Some("--config foo.yml"));
    assert_eq!(cli.workspace, Some(PathBuf::from("/repo")));
    assert_eq!(cli.tool_cache, Some(PathBuf::from("/cache")));
    assert_eq!(cli.releases_url.as_deref(), Some("https://mirror.example.com"));
    assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
}

#[test]
fn test_args_value_may_start_with_hyphen() {
    let cli = Cli::parse_from(["swiftlint-annotate", "--args", "--strict --quiet"]);

    assert_eq!(cli.args.as_deref(), Some("--strict --quiet"));
    assert!(!cli.strict);
}

#[test]
fn test_verbosity_levels() {
    let cli = Cli::parse_from(["swiftlint-annotate", "-q"]);
    assert_eq!(cli.verbosity(), Verbosity::Quiet);
    assert_eq!(cli.verbosity().level_filter(), log::LevelFilter::Error);

    let cli = Cli::parse_from(["swiftlint-annotate", "-v"]);
    assert_eq!(cli.verbosity(), Verbosity::Verbose);
    assert_eq!(cli.verbosity().level_filter(), log::LevelFilter::Debug);

    let cli = Cli::parse_from(["swiftlint-annotate", "-vvv"]);
    assert_eq!(cli.verbosity(), Verbosity::Debug);
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["swiftlint-annotate", "-q", "-v"]).is_err());
}
