// gitscope: git repository inspection via the git CLI
//
// SPDX-FileCopyrightText: 2026 gitscope contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::Path;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["gitscope", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_branch_with_repo() {
    let cli = Cli::try_parse_from(["gitscope", "-C", "/tmp/repo", "branch"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Branch)));
    assert_eq!(cli.global.repo, Path::new("/tmp/repo"));
}

#[test]
fn test_parse_repo_after_subcommand() {
    // --repo is a global arg and may follow the subcommand
    let cli = Cli::try_parse_from(["gitscope", "status", "-C", "/tmp/repo"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Status)));
    assert_eq!(cli.global.repo, Path::new("/tmp/repo"));
}

#[test]
fn test_parse_repo_defaults_to_cwd() {
    let cli = Cli::try_parse_from(["gitscope", "branches"]).unwrap();
    assert_eq!(cli.global.repo, Path::new("."));
    assert!(!cli.global.json);
}

#[test]
fn test_parse_commit_with_branch() {
    let cli = Cli::try_parse_from(["gitscope", "commit", "feature/x"]).unwrap();
    match cli.command {
        Some(Command::Commit(args)) => assert_eq!(args.branch.as_deref(), Some("feature/x")),
        other => panic!("expected commit command, got {other:?}"),
    }
}

#[test]
fn test_parse_commit_without_branch() {
    let cli = Cli::try_parse_from(["gitscope", "commit"]).unwrap();
    match cli.command {
        Some(Command::Commit(args)) => assert!(args.branch.is_none()),
        other => panic!("expected commit command, got {other:?}"),
    }
}

#[test]
fn test_parse_tags_requires_rev() {
    assert!(Cli::try_parse_from(["gitscope", "tags"]).is_err());

    let cli = Cli::try_parse_from(["gitscope", "tags", "abc1234"]).unwrap();
    match cli.command {
        Some(Command::Tags(args)) => assert_eq!(args.rev, "abc1234"),
        other => panic!("expected tags command, got {other:?}"),
    }
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "gitscope",
        "-l",
        "5",
        "--log-file",
        "out.log",
        "--json",
        "status",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert!(cli.global.json);
    assert!(matches!(cli.command, Some(Command::Status)));
}

#[test]
fn test_parse_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["gitscope", "-l", "6", "status"]).is_err());
}

#[test]
fn test_parse_set_overrides_repeatable() {
    let cli = Cli::try_parse_from([
        "gitscope",
        "-s",
        "git.abbrev=10",
        "-s",
        "global.log_level=4",
        "branch",
    ])
    .unwrap();
    assert_eq!(
        cli.global.options,
        ["git.abbrev=10", "global.log_level=4"]
    );
}

#[test]
fn test_config_overrides_include_log_flags() {
    let cli = Cli::try_parse_from(["gitscope", "-l", "4", "--log-file", "x.log", "branch"]).unwrap();
    let overrides = cli.global.to_config_overrides();
    assert!(overrides.contains(&"global.log_level=4".to_string()));
    // file level falls back to console level
    assert!(overrides.contains(&"global.file_log_level=4".to_string()));
    assert!(overrides.contains(&"global.log_file=x.log".to_string()));
}
