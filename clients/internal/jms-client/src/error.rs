// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for jms-client

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`crate::ServerClient`]
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connect, TLS, body decode)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server returned {status}: {detail}")]
    Status { status: StatusCode, detail: String },

    /// Username/password exchange did not yield a token
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Request signing failed
    #[error("Signing error: {0}")]
    Signing(#[from] jms_auth::AuthError),

    /// A URL could not be built from the base address
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A header value contained characters HTTP does not allow
    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

impl ClientError {
    /// The server-provided error detail, if this came from an HTTP response
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// The HTTP status, if the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Extract a human-readable error detail from a response body
///
/// Prefers a JSON `detail` string, then the JSON body itself, then the raw
/// text, and finally the status' canonical reason.
pub fn error_detail(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string();
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => match map.get("detail") {
            Some(serde_json::Value::String(detail)) => detail.clone(),
            _ => serde_json::Value::Object(map).to_string(),
        },
        Ok(other) => other.to_string(),
        Err(_) => trimmed.to_string(),
    }
}
