// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Show command implementation.
//!
//! ```text
//! org: kubernetes
//! admins: 1
//! members: 2
//! teams: 2
//!   build: 1 members, 0 maintainers
//!   foo: 1 members, 1 maintainers
//! ```

use anyhow::Context;

use crate::cli::show::ShowArgs;
use crate::error::Result;
use crate::org::OrgRepo;
use crate::org::store::load_org;
use crate::org::types::OrgConfig;
use crate::org::validate::validate_orgs;

/// Main handler for show command.
///
/// # Errors
///
/// Returns an error if the org is not allowed or its files cannot be read.
pub fn run_show_command(args: &ShowArgs, repo: &OrgRepo) -> Result<()> {
    validate_orgs(repo.allowed(), std::slice::from_ref(&args.org)).into_result()?;
    let config = load_org(repo, &args.org, args.merge_teams)
        .with_context(|| format!("loading org {}", args.org))?;
    print!("{}", render_org_summary(&args.org, &config));
    Ok(())
}

/// Member and team counts of one org.
#[must_use]
pub fn render_org_summary(org: &str, config: &OrgConfig) -> String {
    let mut lines = vec![
        format!("org: {org}"),
        format!("admins: {}", config.admins.len()),
        format!("members: {}", config.members.len()),
        format!("teams: {}", config.teams.len()),
    ];
    lines.extend(config.teams.iter().map(|(name, team)| {
        format!(
            "  {name}: {} members, {} maintainers",
            team.members.len(),
            team.maintainers.len()
        )
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
