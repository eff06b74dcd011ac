// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! --confirm         ← write files and commit (default: dry run)
//! --root DIR        ← org repo checkout
//! --ini FILE        ← additional settings files (can repeat)
//! --log-level N     ← console verbosity (0-6)
//! --file-log-level  ← file verbosity (defaults to --log-level)
//! --log-file FILE   ← also log to this file
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalOptions {
    /// Persist changes. Without it, every check runs but nothing is written.
    #[arg(long, global = true)]
    pub confirm: bool,

    /// Root of the org repo checkout.
    #[arg(long, value_name = "DIR", default_value = ".", global = true)]
    pub root: PathBuf,

    /// Path to additional TOML settings file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Location of the optional settings file inside the checkout.
    #[must_use]
    pub fn default_settings_file(&self) -> PathBuf {
        self.root.join("korg.toml")
    }
}
