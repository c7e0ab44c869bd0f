// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Tracing setup
//!
//! With `log.file_path` set, events are appended to that file at the
//! configured level. Otherwise only warnings reach stderr so the prompts stay
//! readable. `RUST_LOG` overrides both.

use std::fs::OpenOptions;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Filter directives for our own crates at `level`; everything else at warn
fn directives(level: &str) -> String {
    format!("warn,jms_perms={level},jms_client={level}")
}

pub fn init(log: &LogSettings) -> Result<()> {
    let fallback = match log.file_path {
        Some(_) => directives(&log.level),
        None => "warn".to_string(),
    };
    let filter = EnvFilter::new(std::env::var("RUST_LOG").unwrap_or(fallback));

    let result = match &log.file_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };
    result.map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_scope_our_crates() {
        assert_eq!(
            directives("debug"),
            "warn,jms_perms=debug,jms_client=debug"
        );
    }
}
