// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Authentication support for server requests
//!
//! Every outgoing request passes through [`Authenticator::apply`] just before
//! it is executed, which adds either a bearer token or an HTTP Signature.

use jms_auth::RequestSigner;
use reqwest::header::{AUTHORIZATION, DATE, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::ClientError;

/// Credentials as configured by the operator
#[derive(Clone, Debug)]
pub enum Credentials {
    /// Exchanged once for a bearer token when the client is built
    Password {
        username: String,
        password: SecretString,
    },
    /// Static bearer token
    Token(SecretString),
    /// Access key pair used for HTTP Signature (hmac-sha256)
    ApiKey {
        access_key_id: String,
        access_key_secret: SecretString,
    },
}

impl Credentials {
    /// Short name of the mode, safe to log
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Password { .. } => "password",
            Self::Token(_) => "token",
            Self::ApiKey { .. } => "api_key",
        }
    }
}

/// Per-request authentication, resolved from [`Credentials`]
#[derive(Clone, Debug)]
pub enum Authenticator {
    /// No Authorization header (only used for the password exchange)
    Anonymous,
    Bearer(SecretString),
    Signature(RequestSigner),
}

impl Authenticator {
    /// Add authentication headers to a request
    ///
    /// The request must already carry its final URL (including query) and
    /// its Date header, since both are covered by the signature.
    ///
    /// # Errors
    /// Returns an error if signing fails or a header value is not valid
    pub fn apply(&self, request: &mut reqwest::Request) -> Result<(), ClientError> {
        match self {
            Self::Anonymous => Ok(()),
            Self::Bearer(token) => {
                let mut value =
                    HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
                value.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, value);
                Ok(())
            }
            Self::Signature(signer) => {
                let url = request.url();
                let mut target = url.path().to_string();
                if let Some(query) = url.query() {
                    target.push('?');
                    target.push_str(query);
                }
                let host = host_header(url);

                let date = match request.headers().get(DATE) {
                    Some(value) => value
                        .to_str()
                        .map_err(|_| {
                            ClientError::Signing(jms_auth::AuthError::MissingHeader(
                                "date".to_string(),
                            ))
                        })?
                        .to_string(),
                    None => {
                        let date = RequestSigner::date_header();
                        request.headers_mut().insert(DATE, HeaderValue::from_str(&date)?);
                        date
                    }
                };

                let authorization = signer.authorization_header(&jms_auth::SigningInput {
                    method: request.method().as_str(),
                    path_and_query: &target,
                    accept: jms_auth::ACCEPT_JSON,
                    date: &date,
                    host: &host,
                })?;
                request
                    .headers_mut()
                    .insert(AUTHORIZATION, HeaderValue::from_str(&authorization)?);
                Ok(())
            }
        }
    }
}

/// Host header value as the HTTP client will send it
///
/// The port is included only when it is not the scheme's default, which is
/// what `url` reports through `port()`.
pub fn host_header(url: &url::Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}
