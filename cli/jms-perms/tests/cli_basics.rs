// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Basic binary tests that need no server.

mod common;

use common::jms_perms_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    jms_perms_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Create JumpServer asset permissions interactively",
        ))
        .stdout(predicate::str::contains("[CONFIG]"));
}

#[test]
fn test_version() {
    jms_perms_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jms-perms"));
}

#[test]
fn test_default_config_path_missing() {
    let dir = tempfile::tempdir().unwrap();
    jms_perms_cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("`config_example.yml` is not a file"));
}

#[test]
fn test_config_directory_rejected() {
    let dir = tempfile::tempdir().unwrap();
    jms_perms_cmd()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a file"));
}

#[test]
fn test_config_extension_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, "{}").unwrap();
    jms_perms_cmd()
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("format is not `.yml`"));
}

#[test]
fn test_config_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.yml");
    std::fs::write(&config, "server: [unclosed").unwrap();
    jms_perms_cmd()
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_unreachable_server_fails_before_prompting() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.yml");
    std::fs::write(
        &config,
        "server:\n  url: http://127.0.0.1\n  port: 1\n\
         authentication:\n  type: token\n  token:\n    value: t\n\
         permissions:\n  name_prefix: perm\n",
    )
    .unwrap();
    jms_perms_cmd()
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Server connectivity test failed"));
}
