// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings sections.
//!
//! ```text
//! Settings: OrgsSettings, LayoutSettings
//! LayoutSettings → config/<org>/org.yaml
//!                  config/<org>/<group>/teams.yaml
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Organizations known to the org repo.
pub const DEFAULT_ORGS: [&str; 6] = [
    "kubernetes",
    "kubernetes-client",
    "kubernetes-csi",
    "kubernetes-incubator",
    "kubernetes-retired",
    "kubernetes-sigs",
];

/// `[orgs]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrgsSettings {
    /// Allow-list of organization names.
    pub valid: Vec<String>,
}

impl Default for OrgsSettings {
    fn default() -> Self {
        Self {
            valid: DEFAULT_ORGS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// `[layout]` section: file locations relative to the checkout root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSettings {
    /// Directory holding one subdirectory per org.
    pub config_dir: String,
    /// Org config file name inside `<config_dir>/<org>/`.
    pub org_file: String,
    /// Nested team file name inside `<config_dir>/<org>/<group>/`.
    pub teams_file: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            config_dir: "config".to_string(),
            org_file: "org.yaml".to_string(),
            teams_file: "teams.yaml".to_string(),
        }
    }
}

impl LayoutSettings {
    /// Relative path of an org's config, e.g. `config/kubernetes/org.yaml`.
    #[must_use]
    pub fn org_config_path(&self, org: &str) -> PathBuf {
        [self.config_dir.as_str(), org, self.org_file.as_str()]
            .iter()
            .collect()
    }

    /// Relative path of a nested team file, e.g. `config/kubernetes/sig-foo/teams.yaml`.
    #[must_use]
    pub fn team_config_path(&self, org: &str, group: &str) -> PathBuf {
        [self.config_dir.as_str(), org, group, self.teams_file.as_str()]
            .iter()
            .collect()
    }
}
