// gitscope: git repository inspection via the git CLI
//
// SPDX-FileCopyrightText: 2026 gitscope contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Branch | Branches | Commit | Status | Tags | Init | Options | Version
//! ```

use std::process::ExitCode;

use gitscope::cli::global::GlobalOptions;
use gitscope::cli::{self, Command};
use gitscope::cmd::repo::{
    run_branch_command, run_branches_command, run_commit_command, run_init_command,
    run_options_command, run_status_command, run_tags_command,
};
use gitscope::config::Config;
use gitscope::config::loader::ConfigLoader;
use gitscope::error::{Result, ScopeError};
use gitscope::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

/// Derive the logging setup from the merged configuration.
///
/// CLI log flags reach the config as overrides, so the config is already
/// the single source of truth here.
fn build_log_config(config: &Config) -> LogConfig {
    let console_level = config.global.log_level;
    let file_level = config.global.file_log_level.unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let repo_path = &cli.global.repo;
    let json = cli.global.json;

    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => match build_config_loader(&cli.global) {
            Ok(loader) => {
                let files = loader.format_loaded_files();
                loader
                    .build()
                    .map(|config| run_options_command(&config, &files, json))
            }
            Err(e) => Err(e),
        },
        Some(Command::Branch) => run_branch_command(config, repo_path, json),
        Some(Command::Branches) => run_branches_command(config, repo_path, json),
        Some(Command::Commit(args)) => run_commit_command(args, config, repo_path, json),
        Some(Command::Status) => run_status_command(config, repo_path, json),
        Some(Command::Tags(args)) => run_tags_command(args, config, repo_path, json),
        Some(Command::Init(args)) => run_init_command(args, config, repo_path, json),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();

    if !global.no_default_config {
        loader = loader.add_toml_file_optional("gitscope.toml");
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("GITSCOPE");

    for override_str in global.to_config_overrides() {
        let Some((key, value)) = override_str.split_once('=') else {
            return Err(ScopeError::other(format!(
                "invalid override '{override_str}', expected KEY=VAL"
            ))
            .into());
        };
        loader = loader.set(key, value)?;
    }

    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global)?.build()
}
