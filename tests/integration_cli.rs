// gitscope: git repository inspection via the git CLI
//
// SPDX-FileCopyrightText: 2026 gitscope contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use clap::error::ErrorKind;
use gitscope::cli::{Cli, Command};

// =============================================================================
// Help / Version
// =============================================================================

#[test]
fn cli_help_is_display_help() {
    let err = Cli::try_parse_from(["gitscope", "--help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
}

#[test]
fn cli_version_flag() {
    let err = Cli::try_parse_from(["gitscope", "--version"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn cli_version_subcommand_alias() {
    let cli = Cli::try_parse_from(["gitscope", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

// =============================================================================
// Unknown input
// =============================================================================

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["gitscope", "frobnicate"]).is_err());
}

#[test]
fn cli_commit_rejects_extra_positionals() {
    assert!(Cli::try_parse_from(["gitscope", "commit", "main", "extra"]).is_err());
}

// =============================================================================
// Global flags around subcommands
// =============================================================================

#[test]
fn cli_json_flag_after_subcommand() {
    let cli = Cli::try_parse_from(["gitscope", "tags", "abc1234", "--json"]).unwrap();
    assert!(cli.global.json);
    match cli.command {
        Some(Command::Tags(args)) => assert_eq!(args.rev, "abc1234"),
        other => panic!("expected tags command, got {other:?}"),
    }
}

#[test]
fn cli_no_command_is_accepted_by_parser() {
    // Dispatch reports the missing command; parsing itself succeeds
    let cli = Cli::try_parse_from(["gitscope"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_init_with_directory() {
    let cli = Cli::try_parse_from(["gitscope", "init", "/tmp/new-repo"]).unwrap();
    match cli.command {
        Some(Command::Init(args)) => {
            assert_eq!(
                args.dir.as_deref(),
                Some(std::path::Path::new("/tmp/new-repo"))
            );
        }
        other => panic!("expected init command, got {other:?}"),
    }
}

#[test]
fn cli_config_files_repeatable() {
    let cli = Cli::try_parse_from([
        "gitscope",
        "-c",
        "one.toml",
        "--config",
        "two.toml",
        "options",
    ])
    .unwrap();
    assert_eq!(cli.global.configs.len(), 2);
    assert!(matches!(cli.command, Some(Command::Options)));
}
