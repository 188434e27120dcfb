// gitscope: git repository inspection via the git CLI
//
// SPDX-FileCopyrightText: 2026 gitscope contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository command handlers.
//!
//! Each handler opens the target repository, runs one query or mutation
//! through the facade, and prints the result as plain text or JSON.

use std::path::Path;

use serde_json::json;
use tracing::info;

use crate::cli::repo::{CommitArgs, InitArgs, TagsArgs};
use crate::config::Config;
use crate::error::Result;
use crate::git::repository::Repository;

fn open_repo(config: &Config, repo_path: &Path) -> Result<Repository> {
    Ok(Repository::open_with(repo_path, &config.git)?)
}

/// Prints the current branch, or `(detached)` when HEAD is detached.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened or queried.
pub fn run_branch_command(config: &Config, repo_path: &Path, json: bool) -> Result<()> {
    let repo = open_repo(config, repo_path)?;
    let branch = repo.current_branch()?;

    if json {
        println!("{}", json!({ "branch": branch }));
    } else {
        println!("{}", branch.as_deref().unwrap_or("(detached)"));
    }
    Ok(())
}

/// Lists local branch names, one per line.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened or queried.
pub fn run_branches_command(config: &Config, repo_path: &Path, json: bool) -> Result<()> {
    let repo = open_repo(config, repo_path)?;
    let branches = repo.branches()?;

    if json {
        println!("{}", json!({ "branches": branches }));
    } else {
        for branch in &branches {
            println!("{branch}");
        }
    }
    Ok(())
}

/// Prints the latest abbreviated commit id of a branch.
///
/// Without an explicit branch the current branch is used; on a detached
/// HEAD the resolution falls back to `HEAD` itself.
///
/// # Errors
///
/// Returns an error if the branch cannot be resolved.
pub fn run_commit_command(
    args: &CommitArgs,
    config: &Config,
    repo_path: &Path,
    json: bool,
) -> Result<()> {
    let repo = open_repo(config, repo_path)?;

    let branch = match &args.branch {
        Some(branch) => branch.clone(),
        None => repo.current_branch()?.unwrap_or_else(|| "HEAD".to_string()),
    };
    let commit = repo.latest_commit(&branch)?;

    if json {
        println!("{}", json!({ "branch": branch, "commit": commit }));
    } else {
        println!("{commit}");
    }
    Ok(())
}

/// Reports whether the working tree is clean or dirty.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened or queried.
pub fn run_status_command(config: &Config, repo_path: &Path, json: bool) -> Result<()> {
    let repo = open_repo(config, repo_path)?;
    let flags = repo.status()?;

    if json {
        println!(
            "{}",
            json!({
                "dirty": !flags.is_clean(),
                "state": flags.summary(),
            })
        );
    } else {
        println!("{}", flags.summary());
    }
    Ok(())
}

/// Lists tags pointing at the given commit, one per line.
///
/// # Errors
///
/// Returns an error if the revision cannot be resolved.
pub fn run_tags_command(
    args: &TagsArgs,
    config: &Config,
    repo_path: &Path,
    json: bool,
) -> Result<()> {
    let repo = open_repo(config, repo_path)?;
    let tags = repo.tags_at(&args.rev)?;

    if json {
        println!("{}", json!({ "rev": args.rev, "tags": tags }));
    } else {
        for tag in &tags {
            println!("{tag}");
        }
    }
    Ok(())
}

/// Initializes a new repository.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or `git init` fails.
pub fn run_init_command(
    args: &InitArgs,
    config: &Config,
    repo_path: &Path,
    json: bool,
) -> Result<()> {
    let dir = args.dir.as_deref().unwrap_or(repo_path);
    let repo = Repository::init_with(dir, &config.git)?;

    info!(root = %repo.root().display(), "repository initialized");
    if json {
        println!("{}", json!({ "initialized": repo.root() }));
    } else {
        println!("Initialized repository in {}", repo.root().display());
    }
    Ok(())
}

/// Prints the loaded config files and all resolved options.
pub fn run_options_command(config: &Config, loaded_files: &[String], json: bool) {
    if json {
        println!(
            "{}",
            json!({ "files": loaded_files, "options": config })
        );
    } else {
        for file in loaded_files {
            println!("{file}");
        }
        if !loaded_files.is_empty() {
            println!();
        }
        for line in config.format_options() {
            println!("{line}");
        }
    }
}
