// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Records exchanged with the server
//!
//! Only the fields the provisioning workflow needs are modelled; everything
//! else the server returns is ignored on decode.

use serde::{Deserialize, Serialize};

/// Name of the built-in organization that needs no lookup
pub const DEFAULT_ORG_NAME: &str = "DEFAULT";

/// A tenant-like scoping unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Empty for the DEFAULT organization
    #[serde(default)]
    pub id: String,
    pub name: String,
}

impl Organization {
    /// The DEFAULT sentinel organization
    pub fn default_org() -> Self {
        Self {
            id: String::new(),
            name: DEFAULT_ORG_NAME.to_string(),
        }
    }

    /// Whether this is the DEFAULT sentinel
    pub fn is_default(&self) -> bool {
        self.id.is_empty()
    }

    /// Whether `name` designates the DEFAULT organization (any case)
    pub fn is_default_name(name: &str) -> bool {
        name.eq_ignore_ascii_case(DEFAULT_ORG_NAME)
    }
}

/// A server record identified by id with one human-readable key
pub trait Record {
    /// Server identifier
    fn id(&self) -> &str;
    /// Username, name or hostname, depending on the record
    fn display_key(&self) -> &str;
}

/// Operator-facing user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

/// Run-as identity used on assets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemUser {
    pub id: String,
    pub name: String,
}

/// Managed host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub hostname: String,
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
    fn display_key(&self) -> &str {
        &self.username
    }
}

impl Record for SystemUser {
    fn id(&self) -> &str {
        &self.id
    }
    fn display_key(&self) -> &str {
        &self.name
    }
}

impl Record for Asset {
    fn id(&self) -> &str {
        &self.id
    }
    fn display_key(&self) -> &str {
        &self.hostname
    }
}

/// Outcome of a lookup by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// Exactly one record matched
    Found(T),
    /// No record matched
    NotFound,
    /// The filter matched this many records; none is accepted
    Ambiguous(usize),
}

impl<T> Lookup<T> {
    /// Classify a filtered list: only a single result counts as a match
    pub fn from_matches(mut records: Vec<T>) -> Self {
        match records.len() {
            0 => Self::NotFound,
            1 => records.pop().map_or(Self::NotFound, Self::Found),
            n => Self::Ambiguous(n),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Found(t) => Lookup::Found(f(t)),
            Self::NotFound => Lookup::NotFound,
            Self::Ambiguous(n) => Lookup::Ambiguous(n),
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(t) => Some(t),
            _ => None,
        }
    }
}

/// Body of `POST perms/asset-permissions/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePermissionRequest {
    pub name: String,
    pub users: Vec<String>,
    pub system_users: Vec<String>,
    pub assets: Vec<String>,
}

/// An asset permission as returned by the server after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionResult {
    pub id: String,
    pub name: String,
    /// Echoed members and any other fields, kept for display
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name_any_case() {
        assert!(Organization::is_default_name("default"));
        assert!(Organization::is_default_name("DEFAULT"));
        assert!(Organization::is_default_name("Default"));
        assert!(!Organization::is_default_name("defaults"));
        assert!(Organization::default_org().is_default());
    }

    #[test]
    fn test_lookup_from_matches() {
        assert_eq!(Lookup::<u8>::from_matches(vec![]), Lookup::NotFound);
        assert_eq!(Lookup::from_matches(vec![7]), Lookup::Found(7));
        assert_eq!(Lookup::from_matches(vec![1, 2, 3]), Lookup::Ambiguous(3));
    }

    #[test]
    fn test_user_ignores_unknown_fields() {
        let user: User = serde_json::from_str(
            r#"{"id": "u1", "username": "alice", "email": "a@example.com", "is_active": true}"#,
        )
        .unwrap();
        assert_eq!(user.display_key(), "alice");
        assert_eq!(user.id(), "u1");
    }

    #[test]
    fn test_permission_result_keeps_members() {
        let perm: PermissionResult = serde_json::from_str(
            r#"{"id": "p1", "name": "perm_1", "users": ["u1"], "assets": ["a1"]}"#,
        )
        .unwrap();
        assert_eq!(perm.name, "perm_1");
        assert_eq!(perm.extra["users"], serde_json::json!(["u1"]));
    }
}
