// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments shared by `add` and `remove`.
//!
//! `--org` and `--team` repeat and also accept comma-separated lists; at
//! least one of them is required.

use clap::{ArgAction, ArgGroup, Args};

/// Target user plus the orgs and teams to act on.
#[derive(Debug, Clone, Args)]
#[command(group(
    ArgGroup::new("targets")
        .args(["orgs", "teams"])
        .required(true)
        .multiple(true)
))]
pub struct MemberArgs {
    /// GitHub login of the user.
    #[arg(value_name = "USERNAME")]
    pub username: String,

    /// Organization, e.g. 'kubernetes-sigs'.
    #[arg(long = "org", value_name = "ORG", value_delimiter = ',', action = ArgAction::Append)]
    pub orgs: Vec<String>,

    /// Team as 'org/team' or 'org/group/team'.
    #[arg(long = "team", value_name = "SPEC", value_delimiter = ',', action = ArgAction::Append)]
    pub teams: Vec<String>,
}
