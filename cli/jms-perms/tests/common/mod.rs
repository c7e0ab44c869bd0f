// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Test helpers for jms-perms integration tests
//!
//! - [`ScriptedPrompter`] answers prompts from a fixed script and records
//!   everything the workflow prints
//! - mock-server fixtures for the lookup and creation endpoints

// Allow unused code - not every test file uses every helper
// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(dead_code, deprecated, clippy::expect_used, clippy::unwrap_used)]

use std::collections::VecDeque;

use anyhow::{Result, anyhow, bail};
use assert_cmd::Command;
use jms_client::{Credentials, ServerClient};
use jms_perms::config::{LogSettings, Settings};
use jms_perms::prompt::Prompter;
use secrecy::SecretString;
use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-token";

/// Get a Command for running the jms-perms binary
pub fn jms_perms_cmd() -> Command {
    Command::cargo_bin("jms-perms").expect("Failed to find jms-perms binary")
}

// ============================================================================
// Scripted prompter
// ============================================================================

/// Answers prompts in order; running out of answers is an error so a
/// workflow that asks more than expected fails instead of hanging
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// Every prompt asked, in order
    pub prompts: Vec<String>,
    pub infos: Vec<String>,
    pub errors: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn saw_error(&self, needle: &str) -> bool {
        self.errors.iter().any(|e| e.contains(needle))
    }

    pub fn saw_info(&self, needle: &str) -> bool {
        self.infos.iter().any(|i| i.contains(needle))
    }

    pub fn last_prompt(&self) -> Option<&str> {
        self.prompts.last().map(String::as_str)
    }

    fn next(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer for prompt: {}", prompt))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        Ok(self.next(prompt)?.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
        match self.next(prompt)?.as_str() {
            "y" => Ok(true),
            "n" => Ok(false),
            other => bail!("expected y/n for `{}`, got `{}`", prompt, other),
        }
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        let answer = self.next(prompt)?;
        items
            .iter()
            .position(|item| *item == answer)
            .ok_or_else(|| anyhow!("`{}` is not one of {:?}", answer, items))
    }

    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

// ============================================================================
// Mock server fixtures
// ============================================================================

pub fn settings(server: &MockServer) -> Settings {
    Settings {
        server_url: server.uri().parse().expect("mock server uri"),
        api_version: "v1".to_string(),
        credentials: Credentials::Token(SecretString::from(TOKEN)),
        name_prefix: "perm".to_string(),
        log: LogSettings {
            file_path: None,
            level: "info".to_string(),
        },
    }
}

pub async fn client(server: &MockServer) -> ServerClient {
    ServerClient::connect(settings(server).client_config())
        .await
        .expect("failed to build client")
}

/// Answer `GET /api/v1/<endpoint>?<param>=<value>` with `records`
pub async fn mount_lookup(
    server: &MockServer,
    endpoint: &str,
    param: &str,
    value: &str,
    records: Value,
) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/{}", endpoint)))
        .and(query_param(param, value))
        .respond_with(ResponseTemplate::new(200).set_body_json(records))
        .mount(server)
        .await;
}

pub async fn mount_user(server: &MockServer, id: &str, username: &str) {
    mount_lookup(
        server,
        "users/users/",
        "username",
        username,
        serde_json::json!([{"id": id, "username": username}]),
    )
    .await;
}

pub async fn mount_system_user(server: &MockServer, id: &str, name: &str) {
    mount_lookup(
        server,
        "assets/system-users/",
        "name",
        name,
        serde_json::json!([{"id": id, "name": name}]),
    )
    .await;
}

pub async fn mount_asset(server: &MockServer, id: &str, hostname: &str) {
    mount_lookup(
        server,
        "assets/assets/",
        "hostname",
        hostname,
        serde_json::json!([{"id": id, "hostname": hostname}]),
    )
    .await;
}

pub async fn mount_missing(server: &MockServer, endpoint: &str, param: &str, value: &str) {
    mount_lookup(server, endpoint, param, value, serde_json::json!([])).await;
}

/// The standard directory: alice, root and web1
pub async fn mount_directory(server: &MockServer) {
    mount_user(server, "u-alice", "alice").await;
    mount_system_user(server, "s-root", "root").await;
    mount_asset(server, "a-web1", "web1").await;
}
