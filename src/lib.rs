// gitscope: git repository inspection via the git CLI
//
// SPDX-FileCopyrightText: 2026 gitscope contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                  main.rs
//!                     |
//!          +----------+----------+
//!          v                     v
//!       cli (clap)          cmd (handlers)
//!          |          branch / commit / status ...
//!          +----------+----------+
//!                     v
//!        ,---------------------------,
//!        |          config           |
//!        |   TOML, layered settings  |
//!        '------------+--------------'
//!                     |
//!                     v
//!                    git
//!        repository facade -> ShellBackend
//!          one subprocess per query
//!
//!   +-----------------------------------------+
//!   |  foundation       error, logging        |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
