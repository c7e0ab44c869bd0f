// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration file layout

use std::path::PathBuf;

use secrecy::SecretString;
use serde::Deserialize;

/// Top-level YAML document
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub server: ServerSection,
    pub authentication: AuthenticationSection,
    pub permissions: PermissionsSection,
    #[serde(default)]
    pub log: Option<LogSection>,
}

#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Scheme and host, optionally with a path prefix
    pub url: String,
    pub port: u16,
    /// API version segment, e.g. "v1"
    #[serde(default)]
    pub api_version: Option<String>,
}

/// Authentication mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
    Password,
    Token,
    ApiKey,
}

#[derive(Debug, Deserialize)]
pub struct AuthenticationSection {
    #[serde(rename = "type")]
    pub kind: AuthType,
    #[serde(default)]
    pub password: Option<PasswordSection>,
    #[serde(default)]
    pub token: Option<TokenSection>,
    #[serde(default)]
    pub api_key: Option<ApiKeySection>,
}

#[derive(Debug, Deserialize)]
pub struct PasswordSection {
    pub username: String,
    pub password: SecretString,
}

#[derive(Debug, Deserialize)]
pub struct TokenSection {
    pub value: SecretString,
}

#[derive(Debug, Deserialize)]
pub struct ApiKeySection {
    pub access_key_id: String,
    pub access_key_secret: SecretString,
}

#[derive(Debug, Deserialize)]
pub struct PermissionsSection {
    pub name_prefix: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogSection {
    #[serde(default)]
    pub file_path: Option<PathBuf>,
    #[serde(default)]
    pub level: Option<String>,
}
