// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! HTTP Signature generation for access-key authentication
//!
//! The server accepts the draft-cavage HTTP Signatures scheme with a shared
//! secret:
//!
//! ```text
//! Authorization: Signature keyId="<access key id>",algorithm="hmac-sha256",headers="(request-target) accept date host",signature="<base64>"
//! ```
//!
//! The signature is an HMAC-SHA256 over one `name: value` line per signed
//! header, joined with `\n`, in the order listed in `headers`.

use crate::error::AuthError;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Algorithm name placed in the Authorization header
pub const ALGORITHM: &str = "hmac-sha256";

/// Headers covered by every signature, in signing order
pub const SIGNED_HEADERS: [&str; 4] = ["(request-target)", "accept", "date", "host"];

/// The request attributes that go into a signature
#[derive(Debug, Clone, Copy)]
pub struct SigningInput<'a> {
    /// HTTP method (any case)
    pub method: &'a str,
    /// Path plus query string, e.g. `/api/v1/users/users/?username=alice`
    pub path_and_query: &'a str,
    /// Value of the Accept header
    pub accept: &'a str,
    /// Value of the Date header
    pub date: &'a str,
    /// Value of the Host header (`host` or `host:port`)
    pub host: &'a str,
}

/// HTTP Signature request signer
///
/// Holds the access key pair and produces Authorization header values.
#[derive(Clone)]
pub struct RequestSigner {
    key_id: String,
    secret: SecretString,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

impl RequestSigner {
    /// Create a signer for an access key pair
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidKey`] if either half of the pair is empty
    pub fn new(key_id: impl Into<String>, secret: SecretString) -> Result<Self, AuthError> {
        let key_id = key_id.into();
        if key_id.trim().is_empty() {
            return Err(AuthError::InvalidKey("access key id is empty".to_string()));
        }
        if secret.expose_secret().is_empty() {
            return Err(AuthError::InvalidKey(
                "access key secret is empty".to_string(),
            ));
        }
        Ok(Self { key_id, secret })
    }

    /// The access key id used as `keyId`
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Build the signing string for a request
    ///
    /// ```text
    /// (request-target): get /api/health/
    /// accept: application/json
    /// date: Mon, 17 Feb 2014 06:11:05 GMT
    /// host: jms.example.com
    /// ```
    pub fn signing_string(&self, input: &SigningInput<'_>) -> Result<String, AuthError> {
        if input.date.is_empty() {
            return Err(AuthError::MissingHeader("date".to_string()));
        }
        if input.host.is_empty() {
            return Err(AuthError::MissingHeader("host".to_string()));
        }
        Ok(format!(
            "(request-target): {} {}\naccept: {}\ndate: {}\nhost: {}",
            input.method.to_lowercase(),
            input.path_and_query,
            input.accept,
            input.date,
            input.host
        ))
    }

    /// HMAC-SHA256 the given data with the access key secret, base64-encoded
    pub fn sign(&self, data: &[u8]) -> Result<String, AuthError> {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|e| AuthError::InvalidKey(e.to_string()))?;
        mac.update(data);
        Ok(base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
    }

    /// Generate the full Authorization header value for a request
    pub fn authorization_header(&self, input: &SigningInput<'_>) -> Result<String, AuthError> {
        let signing_string = self.signing_string(input)?;
        let signature = self.sign(signing_string.as_bytes())?;
        Ok(format!(
            "Signature keyId=\"{}\",algorithm=\"{}\",headers=\"{}\",signature=\"{}\"",
            self.key_id,
            ALGORITHM,
            SIGNED_HEADERS.join(" "),
            signature
        ))
    }

    /// Generate a Date header value in RFC 7231 format
    ///
    /// Example: "Mon, 15 Dec 2025 10:30:00 GMT"
    pub fn date_header() -> String {
        Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
    }
}
