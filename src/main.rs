// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Settings --> Command Dispatch
//!   Add | Remove | Show | Version
//! ```

use std::process::ExitCode;

use korg_rs::cli::global::GlobalOptions;
use korg_rs::cli::{self, Command};
use korg_rs::cmd::add::{DRY_RUN_BANNER, run_add_command};
use korg_rs::cmd::remove::run_remove_command;
use korg_rs::cmd::show::run_show_command;
use korg_rs::config::Settings;
use korg_rs::logging::init_logging;
use korg_rs::logging::{LogConfig, LogFile, LogLevel};
use korg_rs::org::OrgRepo;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or_default();

    let file = global.log_file.clone().map(|path| LogFile {
        path,
        level: global
            .file_log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(console),
    });

    LogConfig { console, file }
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    if !cli.global.confirm && cli.command.as_ref().is_some_and(Command::is_mutating) {
        println!("{DRY_RUN_BANNER}");
    }

    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Add(args)) => load_repo(&cli.global)
            .and_then(|repo| run_add_command(args, &repo, cli.global.confirm)),
        Some(Command::Remove(args)) => run_remove_command(args),
        Some(Command::Show(args)) => {
            load_repo(&cli.global).and_then(|repo| run_show_command(args, &repo))
        }
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

fn load_repo(global: &GlobalOptions) -> korg_rs::error::Result<OrgRepo> {
    let settings = Settings::load(&global.default_settings_file(), &global.inis, "KORG")
        .inspect_err(|e| eprintln!("Failed to load settings: {e}"))?;
    Ok(OrgRepo::from_settings(&global.root, &settings))
}
