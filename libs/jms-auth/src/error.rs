// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for jms-auth

use thiserror::Error;

/// Errors that can occur while signing a request
#[derive(Error, Debug)]
pub enum AuthError {
    /// The access key id or secret is unusable
    #[error("Invalid access key: {0}")]
    InvalidKey(String),

    /// A header required by the signature was not supplied
    #[error("Missing signed header: {0}")]
    MissingHeader(String),
}
