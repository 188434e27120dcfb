// gitscope: git repository inspection via the git CLI
//
// SPDX-FileCopyrightText: 2026 gitscope contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working-tree status model.
//!
//! ```text
//! git status --porcelain
//!   "XY path"
//!    ||
//!    |+-- worktree column  (unstaged)
//!    +--- index column     (staged)
//!   "?? path" -> untracked
//!        |
//!        v
//!   Vec<StatusEntry> --> StatusFlags { STAGED | UNSTAGED | UNTRACKED }
//! ```
//!
//! Dirty means any flag set: a staged-only, unstaged-only, or
//! untracked-only tree each counts as dirty.

use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Kinds of pending change present in a work tree.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StatusFlags: u8 {
        /// Changes staged in the index
        const STAGED = 0x01;
        /// Tracked files modified in the work tree but not staged
        const UNSTAGED = 0x02;
        /// Files unknown to the index
        const UNTRACKED = 0x04;
    }
}

impl StatusFlags {
    /// True when no pending changes of any kind exist.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.is_empty()
    }

    /// Human-readable summary, e.g. `"staged, untracked"` or `"clean"`.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.is_clean() {
            return "clean".to_string();
        }
        let mut parts = Vec::new();
        if self.contains(Self::STAGED) {
            parts.push("staged");
        }
        if self.contains(Self::UNSTAGED) {
            parts.push("unstaged");
        }
        if self.contains(Self::UNTRACKED) {
            parts.push("untracked");
        }
        parts.join(", ")
    }
}

/// One parsed `git status --porcelain` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    /// Index (staged) column.
    pub index: char,
    /// Work-tree (unstaged) column.
    pub worktree: char,
    /// Path as printed by git; renames keep the full `old -> new` field.
    pub path: String,
}

/// Parse porcelain v1 output into status entries.
///
/// Lines shorter than the `XY path` minimum are skipped rather than
/// treated as errors; git does not produce them.
#[must_use]
pub fn parse_porcelain(output: &str) -> Vec<StatusEntry> {
    output
        .lines()
        .filter(|line| line.len() >= 4)
        .filter_map(|line| {
            let mut chars = line.chars();
            let index = chars.next()?;
            let worktree = chars.next()?;
            if chars.next() != Some(' ') {
                return None;
            }
            // Status columns are ASCII in porcelain output, so the path
            // starts at byte 3; get() guards against malformed input.
            Some(StatusEntry {
                index,
                worktree,
                path: line.get(3..)?.to_string(),
            })
        })
        .collect()
}

/// Classify parsed entries into [`StatusFlags`].
#[must_use]
pub fn flags_for(entries: &[StatusEntry]) -> StatusFlags {
    let mut flags = StatusFlags::empty();
    for entry in entries {
        if entry.index == '?' && entry.worktree == '?' {
            flags |= StatusFlags::UNTRACKED;
            continue;
        }
        // '!' only appears for ignored files under --ignored; tolerated here.
        if entry.index == '!' && entry.worktree == '!' {
            continue;
        }
        if entry.index != ' ' {
            flags |= StatusFlags::STAGED;
        }
        if entry.worktree != ' ' {
            flags |= StatusFlags::UNSTAGED;
        }
    }
    flags
}
