// gitscope: git repository inspection via the git CLI
//
// SPDX-FileCopyrightText: 2026 gitscope contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository facade bound to one work tree.
//!
//! ```text
//! Repository::open(dir)  -- fails fast unless dir is a work tree
//! Repository::init(dir)  -- git init, then open
//!     .current_branch()   .branches()   .latest_commit(rev)
//!     .status()           .is_dirty()   .tags_at(rev)
//!     .add_all()  .commit()  .tag()  .checkout()  .set_config()
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::GitSection;
use crate::error::{GitError, ScopeResult};

use super::backend::{GitMutation, GitQuery, ShellBackend};
use super::status::{StatusFlags, flags_for};

/// Handle to a git work tree, answering queries through the git CLI.
#[derive(Debug, Clone)]
pub struct Repository {
    root: PathBuf,
    backend: ShellBackend,
    abbrev: Option<u32>,
}

impl Repository {
    /// Open an existing repository with default git settings.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepository` when `path` is not inside a git
    /// work tree, or `ProcessError::ExecutableNotFound` when git is missing.
    pub fn open(path: impl Into<PathBuf>) -> ScopeResult<Self> {
        Self::open_with(path, &GitSection::default())
    }

    /// Open an existing repository using the given git settings.
    ///
    /// # Errors
    ///
    /// Same as [`Repository::open`].
    pub fn open_with(path: impl Into<PathBuf>, git: &GitSection) -> ScopeResult<Self> {
        let root = path.into();
        let backend = ShellBackend::new(&git.executable)?;

        if !backend.is_work_tree(&root) {
            return Err(GitError::NotARepository {
                path: root.display().to_string(),
            }
            .into());
        }

        debug!(root = %root.display(), "opened repository");
        Ok(Self {
            root,
            backend,
            abbrev: git.abbrev,
        })
    }

    /// Initialize a new repository at `path` (creating the directory if
    /// needed) and open it.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or `git init`
    /// fails.
    pub fn init(path: impl Into<PathBuf>) -> ScopeResult<Self> {
        Self::init_with(path, &GitSection::default())
    }

    /// Initialize a new repository using the given git settings.
    ///
    /// # Errors
    ///
    /// Same as [`Repository::init`].
    pub fn init_with(path: impl Into<PathBuf>, git: &GitSection) -> ScopeResult<Self> {
        let root = path.into();
        let backend = ShellBackend::new(&git.executable)?;

        std::fs::create_dir_all(&root)?;
        backend.init_repo(&root)?;

        debug!(root = %root.display(), "initialized repository");
        Ok(Self {
            root,
            backend,
            abbrev: git.abbrev,
        })
    }

    /// The work-tree directory this handle is bound to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    // --- Queries ---

    /// Current branch name, or `None` on a detached HEAD.
    ///
    /// A freshly initialized repository reports its unborn default branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the query fails.
    pub fn current_branch(&self) -> ScopeResult<Option<String>> {
        self.backend.current_branch(&self.root)
    }

    /// Local branch names. Empty before the first commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the listing fails.
    pub fn branches(&self) -> ScopeResult<BTreeSet<String>> {
        self.backend.branch_names(&self.root)
    }

    /// Abbreviated commit id of the tip of `revspec` (a branch, usually).
    ///
    /// The abbreviation width follows the `[git] abbrev` setting when
    /// present, otherwise git's own `--short` default; git extends the
    /// width as needed to keep the id unambiguous.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RevisionNotFound` for an unknown branch, including
    /// the unborn branch of a repository with no commits.
    pub fn latest_commit(&self, revspec: &str) -> ScopeResult<String> {
        self.backend.resolve_short(&self.root, revspec, self.abbrev)
    }

    /// Pending-change classification for the work tree.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the status check fails.
    pub fn status(&self) -> ScopeResult<StatusFlags> {
        let entries = self.backend.status_entries(&self.root)?;
        Ok(flags_for(&entries))
    }

    /// True when any staged, unstaged, or untracked change exists.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the status check fails.
    pub fn is_dirty(&self) -> ScopeResult<bool> {
        Ok(!self.status()?.is_clean())
    }

    /// Tags pointing at exactly the given commit. Empty set when none do.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RevisionNotFound` for an unknown revision.
    pub fn tags_at(&self, revspec: &str) -> ScopeResult<BTreeSet<String>> {
        self.backend.tags_at(&self.root, revspec)
    }

    // --- Mutations ---

    /// Stage all changes in the work tree.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if staging fails.
    pub fn add_all(&self) -> ScopeResult<()> {
        self.backend.add_all(&self.root)
    }

    /// Record a commit with the given message.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit fails.
    pub fn commit(&self, message: &str) -> ScopeResult<()> {
        self.backend.commit(&self.root, message)
    }

    /// Create an annotated tag at HEAD.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the tag cannot be created.
    pub fn tag(&self, name: &str, message: &str) -> ScopeResult<()> {
        self.backend.tag(&self.root, name, message)
    }

    /// Checkout a branch, tag, or commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the checkout fails.
    pub fn checkout(&self, what: &str) -> ScopeResult<()> {
        self.backend.checkout(&self.root, what)
    }

    /// Create a new branch at HEAD and switch to it.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the branch cannot be created.
    pub fn checkout_new_branch(&self, name: &str) -> ScopeResult<()> {
        self.backend.checkout_new_branch(&self.root, name)
    }

    /// Set a repository-local git config value.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the config value cannot be set.
    pub fn set_config(&self, key: &str, value: &str) -> ScopeResult<()> {
        self.backend.set_config(&self.root, key, value)
    }
}
