// gitscope: git repository inspection via the git CLI
//
// SPDX-FileCopyrightText: 2026 gitscope contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the repository query commands.
//!
//! ```text
//! commit [BRANCH]   → latest abbreviated commit (default: current branch)
//! tags <REV>        → tags pointing at the commit
//! init [DIR]        → initialize a repository (default: --repo target)
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `commit` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CommitArgs {
    /// Branch to resolve. Defaults to the current branch.
    #[arg(value_name = "BRANCH")]
    pub branch: Option<String>,
}

/// Arguments for the `tags` command.
#[derive(Debug, Clone, Args)]
pub struct TagsArgs {
    /// Commit id (or any revision) to list tags for.
    #[arg(value_name = "REV")]
    pub rev: String,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, Args)]
pub struct InitArgs {
    /// Directory to initialize. Defaults to the --repo target.
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}
