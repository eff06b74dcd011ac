// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Settings;
use super::loader::SettingsLoader;
use super::types::{DEFAULT_ORGS, LayoutSettings};
use crate::error::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_toml(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn load_toml(content: &str) -> Result<Settings> {
    let temp = tempfile::tempdir().unwrap();
    let path = write_toml(&temp, "korg.toml", content);
    SettingsLoader::new().file(path, true).build()
}

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.orgs.valid, DEFAULT_ORGS);
    assert!(settings.validate().is_ok());
    insta::assert_debug_snapshot!(settings, @r#"
    Settings {
        orgs: OrgsSettings {
            valid: [
                "kubernetes",
                "kubernetes-client",
                "kubernetes-csi",
                "kubernetes-incubator",
                "kubernetes-retired",
                "kubernetes-sigs",
            ],
        },
        layout: LayoutSettings {
            config_dir: "config",
            org_file: "org.yaml",
            teams_file: "teams.yaml",
        },
    }
    "#);
}

#[test]
fn test_empty_sources_yield_defaults() {
    let settings = SettingsLoader::new().build().unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_allow_list_override() {
    let settings = load_toml(
        r#"
[orgs]
valid = ["etcd-io", "kubernetes"]
"#,
    )
    .unwrap();
    assert_eq!(settings.orgs.valid, vec!["etcd-io", "kubernetes"]);
    assert_eq!(settings.layout, LayoutSettings::default());

    let allow = settings.allow_list();
    assert!(allow.contains("etcd-io"));
    assert!(!allow.contains("kubernetes-sigs"));
}

#[test]
fn test_layout_section() {
    let settings = load_toml(
        r#"
[layout]
config_dir = "orgs"
teams_file = "groups.yaml"
"#,
    )
    .unwrap();
    assert_eq!(settings.layout.config_dir, "orgs");
    assert_eq!(settings.layout.org_file, "org.yaml");
    assert_eq!(
        settings.layout.team_config_path("kubernetes", "sig-node"),
        PathBuf::from("orgs/kubernetes/sig-node/groups.yaml")
    );
}

#[test]
fn test_empty_allow_list_rejected() {
    let mut settings = Settings::default();
    settings.orgs.valid.clear();
    let err = settings.validate().unwrap_err().to_string();
    assert!(err.contains("[orgs]"), "got: {err}");
}

#[test]
fn test_org_with_slash_rejected() {
    assert!(load_toml("[orgs]\nvalid = [\"kubernetes/sigs\"]\n").is_err());
}

#[test]
fn test_empty_layout_rejected() {
    let err = load_toml("[layout]\norg_file = \"\"\n").unwrap_err().to_string();
    assert!(err.contains("org_file"), "got: {err}");
}

#[test]
fn test_unknown_key_rejected() {
    let result = load_toml("[orgs]\nallowed = [\"kubernetes\"]\n");
    assert!(result.is_err(), "unknown keys should be rejected");
}

#[test]
fn test_invalid_toml_rejected() {
    assert!(load_toml("this is not valid toml {{{").is_err());
}

#[test]
fn test_optional_file_missing_is_fine() {
    let temp = tempfile::tempdir().unwrap();
    let settings = SettingsLoader::new()
        .file(temp.path().join("korg.toml"), false)
        .build()
        .unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_required_file_missing_fails() {
    let temp = tempfile::tempdir().unwrap();
    let result = SettingsLoader::new()
        .file(temp.path().join("missing.toml"), true)
        .build();
    assert!(result.is_err());
}

#[test]
fn test_load_layers_root_file_then_inis() {
    let temp = tempfile::tempdir().unwrap();
    let root = write_toml(
        &temp,
        "korg.toml",
        "[orgs]\nvalid = [\"kubernetes\"]\n[layout]\nconfig_dir = \"orgs\"\n",
    );
    let first = write_toml(&temp, "first.toml", "[orgs]\nvalid = [\"etcd-io\"]\n");
    let second = write_toml(&temp, "second.toml", "[orgs]\nvalid = [\"kubernetes-sigs\"]\n");

    let settings = Settings::load(&root, &[first, second], "KORG_CONFIG_TESTS").unwrap();
    assert_eq!(settings.orgs.valid, vec!["kubernetes-sigs"]);
    assert_eq!(settings.layout.config_dir, "orgs");
}

#[test]
fn test_load_missing_ini_fails() {
    let temp = tempfile::tempdir().unwrap();
    let result = Settings::load(
        &temp.path().join("korg.toml"),
        &[temp.path().join("nope.toml")],
        "KORG_CONFIG_TESTS",
    );
    assert!(result.is_err());
    assert!(Settings::load(Path::new("/nonexistent/korg.toml"), &[], "KORG_CONFIG_TESTS").is_ok());
}
