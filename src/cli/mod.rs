// gitscope: git repository inspection via the git CLI
//
// SPDX-FileCopyrightText: 2026 gitscope contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gitscope using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitscope [global options] <command>
//! branch              current branch
//! branches            list local branches
//! commit [BRANCH]     latest abbreviated commit of a branch
//! status              working-tree cleanliness
//! tags <REV>          tags pointing at a commit
//! init [DIR]          initialize a repository
//! options             print resolved configuration
//! version             print the version
//! ```

pub mod global;
pub mod repo;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::repo::{CommitArgs, InitArgs, TagsArgs};
use clap::{Parser, Subcommand};

/// Git repository inspection via the git CLI.
///
/// Answers questions about a local repository (current branch, branches,
/// latest commit, dirtiness, tags) by invoking the installed git binary.
#[derive(Debug, Parser)]
#[command(
    name = "gitscope",
    author,
    version,
    about = "Git repository inspection via the git CLI",
    after_help = "CONFIG FILES:\n\n\
                  By default, gitscope loads an optional `gitscope.toml` from\n\
                  the current directory. Additional TOML files can be given\n\
                  with --config and are applied on top; GITSCOPE_* environment\n\
                  variables and --set overrides apply last. Use\n\
                  --no-default-config to skip the automatic file."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their resolved values.
    Options,

    /// Prints the current branch of the repository.
    Branch,

    /// Lists the local branches of the repository.
    Branches,

    /// Prints the latest abbreviated commit id of a branch.
    Commit(CommitArgs),

    /// Reports whether the working tree is clean or dirty.
    Status,

    /// Lists tags pointing at a commit.
    Tags(TagsArgs),

    /// Initializes a new repository.
    Init(InitArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
