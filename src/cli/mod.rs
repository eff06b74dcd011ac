// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for korg-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! korg [global options] <command>
//! add <user> [--org ORG]... [--team SPEC]...
//! remove <user> [--org ORG]... [--team SPEC]...
//! show --org ORG [--merge-teams]
//! version
//! ```

pub mod global;
pub mod member;
pub mod show;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::member::MemberArgs;
use crate::cli::show::ShowArgs;
use clap::{Parser, Subcommand};

/// Kubernetes Org Membership Tool
///
/// Edits the membership files of a local org repo checkout.
#[derive(Debug, Parser)]
#[command(
    name = "korg",
    author,
    version,
    about = "Kubernetes org membership tool",
    long_about = "korg-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Adds users to GitHub organizations and teams by editing the\n\
                  YAML files of a local org repo checkout and committing the\n\
                  result. Nothing is written unless --confirm is given.",
    after_help = "SETTINGS:\n\n\
                  korg reads `korg.toml` from the --root directory if present,\n\
                  then every file given with --ini, then KORG_* environment\n\
                  variables (e.g. KORG_ORGS__VALID=kubernetes,kubernetes-sigs)."
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
    /// Adds a user to orgs and/or teams.
    Add(MemberArgs),

    /// Removes a user from orgs and/or teams (not implemented yet).
    Remove(MemberArgs),

    /// Prints a summary of an org's members and teams.
    Show(ShowArgs),

    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,
}

impl Command {
    /// Whether the command edits the checkout.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(self, Self::Add(_) | Self::Remove(_))
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
