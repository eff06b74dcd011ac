// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use clap::error::ErrorKind;
use std::path::Path;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["korg", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
    assert!(!cli.global.confirm);
    assert_eq!(cli.global.root, Path::new("."));
}

#[test]
fn test_parse_add_comma_separated() {
    let cli = Cli::try_parse_from([
        "korg",
        "add",
        "alice",
        "--org",
        "kubernetes,kubernetes-sigs",
    ])
    .unwrap();
    let Some(Command::Add(args)) = cli.command else {
        panic!("expected add command");
    };
    insta::assert_debug_snapshot!(args, @r#"
    MemberArgs {
        username: "alice",
        orgs: [
            "kubernetes",
            "kubernetes-sigs",
        ],
        teams: [],
    }
    "#);
}

#[test]
fn test_parse_add_repeated_targets() {
    let cli = Cli::try_parse_from([
        "korg",
        "add",
        "alice",
        "--team",
        "kubernetes/foo",
        "--team",
        "kubernetes/infra/build,kubernetes-sigs/bar",
        "--org",
        "kubernetes",
    ])
    .unwrap();
    let Some(Command::Add(args)) = cli.command else {
        panic!("expected add command");
    };
    assert_eq!(args.orgs, ["kubernetes"]);
    assert_eq!(
        args.teams,
        ["kubernetes/foo", "kubernetes/infra/build", "kubernetes-sigs/bar"]
    );
}

#[test]
fn test_parse_add_requires_target() {
    let err = Cli::try_parse_from(["korg", "add", "alice"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_parse_add_requires_username() {
    let err = Cli::try_parse_from(["korg", "add", "--org", "kubernetes"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "korg",
        "-l",
        "5",
        "--root",
        "/tmp/org",
        "-i",
        "a.toml",
        "--ini",
        "b.toml",
        "add",
        "alice",
        "--org",
        "kubernetes",
        "--confirm",
    ])
    .unwrap();
    assert!(cli.global.confirm);
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.root, Path::new("/tmp/org"));
    assert_eq!(cli.global.inis.len(), 2);
    assert_eq!(
        cli.global.default_settings_file(),
        Path::new("/tmp/org/korg.toml")
    );
    assert!(cli.command.is_some_and(|c| c.is_mutating()));
}

#[test]
fn test_parse_log_level_out_of_range() {
    let result = Cli::try_parse_from(["korg", "-l", "7", "version"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_show() {
    let cli = Cli::try_parse_from(["korg", "show", "--org", "kubernetes", "--merge-teams"]).unwrap();
    let Some(Command::Show(args)) = cli.command else {
        panic!("expected show command");
    };
    assert_eq!(args.org, "kubernetes");
    assert!(args.merge_teams);
}

#[test]
fn test_parse_remove() {
    let cli = Cli::try_parse_from(["korg", "remove", "alice", "--team", "kubernetes/foo"]).unwrap();
    let command = cli.command.unwrap();
    assert!(command.is_mutating());
    assert!(matches!(command, Command::Remove(ref args) if args.username == "alice"));
}
