// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! REST endpoints consumed by the client
//!
//! Paths are relative, so they never start with a slash. Most resolve against
//! the versioned API base (`.../api/v1/`); the health probe lives under the
//! unversioned API root (`.../api/`).

/// Which base URL an endpoint path is joined onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// `.../api/<version>/`
    Versioned,
    /// `.../api/`
    ApiRoot,
}

/// Logical API operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Connectivity probe
    Health,
    /// Username/password exchange for a bearer token
    Auth,
    /// Organization list
    Organizations,
    /// User list, filterable by `username`
    Users,
    /// System user list, filterable by `name`
    SystemUsers,
    /// Asset list, filterable by `hostname`
    Assets,
    /// Asset permission collection (POST to create)
    AssetPermissions,
}

impl Endpoint {
    /// Base the path is relative to
    pub fn base(self) -> Base {
        match self {
            Self::Health => Base::ApiRoot,
            _ => Base::Versioned,
        }
    }

    /// Path relative to [`Endpoint::base`]
    pub fn path(self) -> &'static str {
        match self {
            Self::Health => "health/",
            Self::Auth => "authentication/auth/",
            Self::Organizations => "orgs/orgs/",
            Self::Users => "users/users/",
            Self::SystemUsers => "assets/system-users/",
            Self::Assets => "assets/assets/",
            Self::AssetPermissions => "perms/asset-permissions/",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_relative() {
        for endpoint in [
            Endpoint::Health,
            Endpoint::Auth,
            Endpoint::Organizations,
            Endpoint::Users,
            Endpoint::SystemUsers,
            Endpoint::Assets,
            Endpoint::AssetPermissions,
        ] {
            assert!(!endpoint.path().starts_with('/'), "{:?}", endpoint);
            assert!(endpoint.path().ends_with('/'), "{:?}", endpoint);
        }
    }

    #[test]
    fn test_only_health_is_unversioned() {
        assert_eq!(Endpoint::Health.base(), Base::ApiRoot);
        assert_eq!(Endpoint::Auth.base(), Base::Versioned);
        assert_eq!(Endpoint::AssetPermissions.base(), Base::Versioned);
    }
}
