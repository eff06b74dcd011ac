// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings for korg itself (not the org YAML it edits).
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <root>/korg.toml (optional)
//! 3. --ini FILE (repeatable, required)
//! 4. KORG_* env vars
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! KORG_ORGS__VALID=kubernetes,etcd-io  → orgs.valid = ["kubernetes", "etcd-io"]
//! KORG_LAYOUT__CONFIG_DIR=orgs         → layout.config_dir = "orgs"
//! ```
//!
//! # Example
//!
//! ```toml
//! [orgs]
//! valid = ["kubernetes", "kubernetes-sigs"]
//!
//! [layout]
//! config_dir = "config"
//! org_file = "org.yaml"
//! teams_file = "teams.yaml"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::org::validate::OrgAllowList;

use loader::SettingsLoader;
use types::{LayoutSettings, OrgsSettings};

/// Complete application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Organizations korg may edit.
    pub orgs: OrgsSettings,
    /// Where membership files live inside the checkout.
    pub layout: LayoutSettings,
}

impl Settings {
    /// Load from `root_file` (optional), each of `inis` (required) and
    /// `<env_prefix>_*` variables, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file is not valid
    /// TOML, a value has the wrong shape or the result fails validation.
    pub fn load(root_file: &Path, inis: &[PathBuf], env_prefix: &str) -> Result<Self> {
        inis.iter()
            .fold(SettingsLoader::new().file(root_file, false), |loader, ini| {
                loader.file(ini, true)
            })
            .env(env_prefix)
            .build()
    }

    /// The org allow-list derived from `orgs.valid`.
    #[must_use]
    pub fn allow_list(&self) -> OrgAllowList {
        self.orgs.valid.iter().cloned().collect()
    }

    /// Reject settings that would make every operation fail in confusing ways.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty allow-list or an empty
    /// layout entry.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.orgs.valid.is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "orgs".to_string(),
                key: "valid".to_string(),
                message: "at least one organization must be allowed".to_string(),
            });
        }
        if let Some(org) = self.orgs.valid.iter().find(|o| o.is_empty() || o.contains('/')) {
            return Err(ConfigError::InvalidValue {
                section: "orgs".to_string(),
                key: "valid".to_string(),
                message: format!("'{org}' is not a valid organization name"),
            });
        }

        let layout = [
            ("config_dir", &self.layout.config_dir),
            ("org_file", &self.layout.org_file),
            ("teams_file", &self.layout.teams_file),
        ];
        for (key, value) in layout {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    section: "layout".to_string(),
                    key: key.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
