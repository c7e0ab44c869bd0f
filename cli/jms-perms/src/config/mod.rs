// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management
//!
//! The configuration is a YAML document read once at startup. The raw file
//! layout lives in [`file`]; [`Settings`] is the validated, immutable form
//! the rest of the program uses.

pub mod file;

use std::path::{Path, PathBuf};

use jms_client::{ClientConfig, Credentials};
use thiserror::Error;
use url::Url;

use file::{AuthType, ConfigFile};

/// Default configuration path when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config_example.yml";

/// API version used when `server.api_version` is absent
pub const DEFAULT_API_VERSION: &str = "v1";

/// Errors loading the configuration file; all of them are fatal
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("`{}` is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("`{}` format is not `.yml`", .0.display())]
    BadExtension(PathBuf),

    #[error("Failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Log destination and default level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Append log lines to this file; stderr when absent
    pub file_path: Option<PathBuf>,
    /// Default filter directive when RUST_LOG is unset
    pub level: String,
}

/// Validated settings, created once at startup and never mutated
#[derive(Debug, Clone)]
pub struct Settings {
    /// Server address without the API path
    pub server_url: Url,
    pub api_version: String,
    pub credentials: Credentials,
    /// Prefix for auto-generated asset permission names
    pub name_prefix: String,
    pub log: LogSettings,
}

impl Settings {
    /// Load and validate a configuration file
    ///
    /// # Errors
    /// Fails if the path is not a file, does not end in `.yml`, cannot
    /// be read or parsed, or is missing required values
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotAFile(path.to_path_buf()));
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("yml") {
            return Err(ConfigError::BadExtension(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_file(file)
    }

    /// Validate a parsed configuration document
    pub fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let mut server_url = Url::parse(file.server.url.trim())
            .map_err(|e| ConfigError::Invalid(format!("server.url: {}", e)))?;
        if server_url.cannot_be_a_base() || server_url.host_str().is_none() {
            return Err(ConfigError::Invalid(format!(
                "server.url: `{}` has no host",
                file.server.url
            )));
        }
        server_url
            .set_port(Some(file.server.port))
            .map_err(|()| ConfigError::Invalid("server.port cannot be applied".to_string()))?;

        let api_version = file
            .server
            .api_version
            .map(|v| v.trim().trim_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let auth = file.authentication;
        let credentials = match auth.kind {
            AuthType::Password => {
                let password = auth.password.ok_or_else(|| missing("authentication.password"))?;
                require("authentication.password.username", &password.username)?;
                Credentials::Password {
                    username: password.username,
                    password: password.password,
                }
            }
            AuthType::Token => {
                let token = auth.token.ok_or_else(|| missing("authentication.token"))?;
                Credentials::Token(token.value)
            }
            AuthType::ApiKey => {
                let key = auth.api_key.ok_or_else(|| missing("authentication.api_key"))?;
                require("authentication.api_key.access_key_id", &key.access_key_id)?;
                Credentials::ApiKey {
                    access_key_id: key.access_key_id,
                    access_key_secret: key.access_key_secret,
                }
            }
        };

        let log = file.log.unwrap_or_default();
        Ok(Self {
            server_url,
            api_version,
            credentials,
            name_prefix: file.permissions.name_prefix.trim().to_string(),
            log: LogSettings {
                file_path: log.file_path.filter(|p| !p.as_os_str().is_empty()),
                level: log.level.unwrap_or_else(|| "info".to_string()),
            },
        })
    }

    /// Versioned API base: `<server.url>:<port>/api/<version>/`
    pub fn base_url(&self) -> Url {
        let prefix = self.server_url.path().trim_end_matches('/');
        let mut base = self.server_url.clone();
        base.set_path(&format!("{}/api/{}/", prefix, self.api_version));
        base.set_query(None);
        base
    }

    /// Client connection settings derived from this configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url(),
            credentials: self.credentials.clone(),
        }
    }
}

fn missing(key: &str) -> ConfigError {
    ConfigError::Invalid(format!("`{}` is required for this authentication type", key))
}

fn require(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("`{}` must not be empty", key)));
    }
    Ok(())
}
