// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! JumpServer HTTP Signature Authentication Library
//!
//! This library signs JumpServer REST API requests with an access key pair
//! (`access_key_id` / `access_key_secret`) using the HTTP Signatures scheme
//! with the `hmac-sha256` algorithm.
//!
//! # Authentication Flow
//!
//! 1. Create a [`RequestSigner`] from the access key pair
//! 2. For each HTTP request:
//!    a. Generate a Date header value
//!    b. Construct the signing string from request target, accept, date and host
//!    c. HMAC the string with the access key secret
//!    d. Construct the Authorization header with keyId, algorithm, headers and signature
//!
//! # Example
//!
//! ```ignore
//! use jms_auth::{ACCEPT_JSON, RequestSigner, SigningInput};
//! use secrecy::SecretString;
//!
//! let signer = RequestSigner::new("b55d354a-...", SecretString::from("3f81551d-..."))?;
//! let date = RequestSigner::date_header();
//! let authorization = signer.authorization_header(&SigningInput {
//!     method: "GET",
//!     path_and_query: "/api/v1/users/users/?username=alice",
//!     accept: ACCEPT_JSON,
//!     date: &date,
//!     host: "jms.example.com",
//! })?;
//! // send with `Date: <date>`, `Accept: application/json`,
//! // `Authorization: <authorization>`
//! ```

pub mod error;
pub mod signature;

pub use error::AuthError;
pub use signature::{ALGORITHM, RequestSigner, SIGNED_HEADERS, SigningInput};

/// Accept header value that every signed request must carry
pub const ACCEPT_JSON: &str = "application/json";
