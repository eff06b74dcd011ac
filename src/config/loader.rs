// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered settings sources.
//!
//! ```text
//! new() --> file(korg.toml, optional) --> file(--ini, required)...
//!       --> env("KORG") --> build() --> Settings (validated)
//! ```
//!
//! Later sources override earlier ones key by key.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use std::path::Path;

use super::Settings;
use crate::error::{ConfigError, Result};

/// Sources still to be merged.
pub struct SettingsLoader {
    sources: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
}

impl SettingsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: config::Config::builder(),
            env_prefix: None,
        }
    }

    /// Add a TOML file. A missing file is an error only when `required`.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(required);
        self.sources = self.sources.add_source(source);
        self
    }

    /// Read `<PREFIX>_SECTION__KEY` variables last.
    ///
    /// `orgs.valid` is split on commas.
    #[must_use]
    pub fn env(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Merge every source and validate the result.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` for unreadable or mistyped sources and
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn build(self) -> Result<Settings> {
        let mut sources = self.sources;
        if let Some(prefix) = &self.env_prefix {
            sources = sources.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("orgs.valid")
                    .try_parsing(true),
            );
        }

        let settings: Settings = sources
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(ConfigError::Load)?;
        settings.validate()?;
        Ok(settings)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
