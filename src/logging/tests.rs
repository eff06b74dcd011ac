// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel, create_log_file};

#[test]
fn test_log_level_from_u8() {
    assert_eq!(LogLevel::from_u8(0), Some(LogLevel::Off));
    assert_eq!(LogLevel::from_u8(6), Some(LogLevel::Dump));
    assert_eq!(LogLevel::from_u8(7), None);
    assert_eq!(LogLevel::default(), LogLevel::Info);
}

#[test]
fn test_log_level_directives() {
    let directives: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::directives)
        .collect();
    insta::assert_debug_snapshot!(directives, @r#"
    [
        "off",
        "error",
        "warn",
        "info,gix=warn",
        "debug,gix=warn",
        "trace,gix=warn",
        "trace",
    ]
    "#);
}

#[test]
fn test_log_config_default() {
    let config = LogConfig::default();
    assert_eq!(config.console, LogLevel::Info);
    assert!(config.file.is_none());
}

#[test]
fn test_create_log_file_makes_directories() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("logs/nested/korg.log");
    create_log_file(&path).unwrap();
    assert!(path.is_file());
}
