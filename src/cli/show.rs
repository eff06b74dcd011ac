// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `show` command.

use clap::Args;

/// Arguments for the `show` command.
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Organization to summarize.
    #[arg(long = "org", value_name = "ORG")]
    pub org: String,

    /// Include teams defined in nested team files.
    #[arg(long = "merge-teams")]
    pub merge_teams: bool,
}
