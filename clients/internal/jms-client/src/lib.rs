// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! JumpServer REST API Client Library
//!
//! This client provides typed access to the parts of the JumpServer API
//! needed to provision asset permissions: organization, user, system user
//! and asset lookups, and asset permission creation.
//!
//! ## Usage
//!
//! ```ignore
//! use jms_client::{ClientConfig, Credentials, Lookup, ServerClient};
//! use secrecy::SecretString;
//!
//! let config = ClientConfig {
//!     base_url: "http://jms.example.com:80/api/v1/".parse()?,
//!     credentials: Credentials::ApiKey {
//!         access_key_id: "b55d354a-...".to_string(),
//!         access_key_secret: SecretString::from("3f81551d-..."),
//!     },
//! };
//!
//! let mut client = ServerClient::connect(config).await?;
//! client.check_health().await?;
//!
//! if let Lookup::Found(org) = client.find_organization("ops").await? {
//!     client.set_organization_scope(&org);
//! }
//! let user = client.find_user("alice").await?;
//! ```
//!
//! Lookups by name return [`Lookup`]: a filter that matches more than one
//! record is reported as [`Lookup::Ambiguous`] and never silently accepted.

pub mod auth;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod types;

pub use auth::{Authenticator, Credentials};
pub use client::{ClientConfig, ORG_HEADER, ServerClient};
pub use endpoint::{Base, Endpoint};
pub use error::ClientError;
pub use types::{
    Asset, CreatePermissionRequest, DEFAULT_ORG_NAME, Lookup, Organization, PermissionResult,
    Record, SystemUser, User,
};
