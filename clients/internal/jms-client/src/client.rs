// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Server client
//!
//! Wraps the HTTP client with authentication, organization scoping and typed
//! lookups. Requests are issued one at a time and never retried; callers
//! decide whether to ask again.

use jms_auth::RequestSigner;
use reqwest::Method;
use reqwest::header::{ACCEPT, DATE, HeaderName, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::auth::{Authenticator, Credentials};
use crate::endpoint::{Base, Endpoint};
use crate::error::{ClientError, error_detail};
use crate::types::{
    Asset, CreatePermissionRequest, Lookup, Organization, PermissionResult, SystemUser,
    TokenResponse, User,
};

/// Organization scoping header (`X-JMS-ORG`)
pub const ORG_HEADER: &str = "x-jms-org";

/// Connection settings for [`ServerClient`]
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Versioned API base, e.g. `http://jms.example.com:8080/api/v1/`; the
    /// unversioned API root is derived from it
    pub base_url: Url,
    pub credentials: Credentials,
}

/// Authenticated, organization-scoped client for the server's REST API
#[derive(Debug)]
pub struct ServerClient {
    http: reqwest::Client,
    base_url: Url,
    api_root: Url,
    auth: Authenticator,
    org: Organization,
}

impl ServerClient {
    /// Build a client and resolve credentials
    ///
    /// For password credentials this performs the token exchange, so it is
    /// the first network round trip of a session.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built, the access key is
    /// unusable, or the password exchange fails
    pub async fn connect(config: ClientConfig) -> Result<Self, ClientError> {
        install_crypto_provider();
        let http = reqwest::Client::builder()
            .user_agent(concat!("jms-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = normalize_base(config.base_url);
        let api_root = api_root(&base_url)?;
        let mut client = Self {
            http,
            base_url,
            api_root,
            auth: Authenticator::Anonymous,
            org: Organization::default_org(),
        };

        client.auth = match config.credentials {
            Credentials::Token(token) => Authenticator::Bearer(token),
            Credentials::ApiKey {
                access_key_id,
                access_key_secret,
            } => Authenticator::Signature(RequestSigner::new(access_key_id, access_key_secret)?),
            Credentials::Password { username, password } => {
                let token = client.exchange_password(&username, password.expose_secret()).await?;
                Authenticator::Bearer(token.into())
            }
        };

        Ok(client)
    }

    /// The API base all endpoints are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The organization subsequent requests are scoped to
    pub fn organization(&self) -> &Organization {
        &self.org
    }

    /// Scope all subsequent requests to `org`
    pub fn set_organization_scope(&mut self, org: &Organization) {
        debug!(org = %org.name, org_id = %org.id, "switching organization scope");
        self.org = org.clone();
    }

    /// Probe connectivity (`GET /api/health/`) against the DEFAULT organization
    ///
    /// # Errors
    /// Returns the transport error, or the status and server-supplied reason
    pub async fn check_health(&mut self) -> Result<(), ClientError> {
        self.set_organization_scope(&Organization::default_org());
        let response = self
            .send(Method::GET, Endpoint::Health, &[], None::<&()>)
            .await?;
        ensure_success(response).await?;
        info!("server connectivity check passed");
        Ok(())
    }

    /// Find an organization by exact name
    ///
    /// Any spelling of "default" resolves to the DEFAULT sentinel without a
    /// network call; otherwise the first organization with that exact name
    /// is returned.
    pub async fn find_organization(&self, name: &str) -> Result<Lookup<Organization>, ClientError> {
        if Organization::is_default_name(name) {
            return Ok(Lookup::Found(Organization::default_org()));
        }
        let orgs: Vec<Organization> = self.list(Endpoint::Organizations, &[]).await?;
        Ok(orgs
            .into_iter()
            .find(|org| org.name == name)
            .map_or(Lookup::NotFound, Lookup::Found))
    }

    /// Find a user by username; only a single match counts
    pub async fn find_user(&self, username: &str) -> Result<Lookup<User>, ClientError> {
        let users = self.list(Endpoint::Users, &[("username", username)]).await?;
        Ok(Lookup::from_matches(users))
    }

    /// Find a system user by name; only a single match counts
    pub async fn find_system_user(&self, name: &str) -> Result<Lookup<SystemUser>, ClientError> {
        let system_users = self.list(Endpoint::SystemUsers, &[("name", name)]).await?;
        Ok(Lookup::from_matches(system_users))
    }

    /// Find an asset by hostname; only a single match counts
    pub async fn find_asset(&self, hostname: &str) -> Result<Lookup<Asset>, ClientError> {
        let assets = self.list(Endpoint::Assets, &[("hostname", hostname)]).await?;
        Ok(Lookup::from_matches(assets))
    }

    /// Create an asset permission in the current organization
    ///
    /// # Errors
    /// Any non-2xx response becomes [`ClientError::Status`] carrying the
    /// server's error detail
    pub async fn create_permission(
        &self,
        request: &CreatePermissionRequest,
    ) -> Result<PermissionResult, ClientError> {
        let response = self
            .send(Method::POST, Endpoint::AssetPermissions, &[], Some(request))
            .await?;
        let response = ensure_success(response).await?;
        let permission: PermissionResult = response.json().await?;
        info!(id = %permission.id, name = %permission.name, "asset permission created");
        Ok(permission)
    }

    async fn exchange_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, ClientError> {
        #[derive(Serialize)]
        struct AuthBody<'a> {
            username: &'a str,
            password: &'a str,
        }

        debug!(username, "exchanging password for token");
        let response = self
            .send(
                Method::POST,
                Endpoint::Auth,
                &[],
                Some(&AuthBody { username, password }),
            )
            .await?;
        let response = ensure_success(response).await.map_err(|e| match e {
            ClientError::Status { detail, .. } => ClientError::Auth(detail),
            other => other,
        })?;
        let body: TokenResponse = response.json().await?;
        body.token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::Auth("response did not contain a token".to_string()))
    }

    async fn list<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ClientError> {
        let response = self.send(Method::GET, endpoint, query, None::<&()>).await?;
        let response = ensure_success(response).await?;
        let records: Vec<T> = response.json().await?;
        debug!(endpoint = endpoint.path(), count = records.len(), "list query returned");
        Ok(records)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: Endpoint,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<reqwest::Response, ClientError> {
        let base = match endpoint.base() {
            Base::Versioned => &self.base_url,
            Base::ApiRoot => &self.api_root,
        };
        let mut url = base.join(endpoint.path())?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, jms_auth::ACCEPT_JSON)
            .header(DATE, RequestSigner::date_header())
            .header(
                HeaderName::from_static(ORG_HEADER),
                HeaderValue::from_str(&self.org.id)?,
            );
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let mut request = builder.build()?;
        self.auth.apply(&mut request)?;

        debug!(
            method = %request.method(),
            url = %request.url(),
            org = %self.org.name,
            "sending request"
        );
        let response = self.http.execute(request).await?;
        debug!(status = %response.status(), "received response");
        Ok(response)
    }
}

/// Turn a non-2xx response into [`ClientError::Status`]
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status,
        detail: error_detail(status, &body),
    })
}

/// Ensure the base URL ends in a slash so relative joins append to it
fn normalize_base(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

/// Unversioned API root: `.../api/v1/` becomes `.../api/`
fn api_root(base: &Url) -> Result<Url, ClientError> {
    Ok(base.join("../")?)
}

/// Install the ring provider for reqwest's rustls backend, once per process
fn install_crypto_provider() {
    if rustls::crypto::CryptoProvider::get_default().is_none() {
        // Losing the race to another thread is fine; a provider is installed.
        let _ = rustls::crypto::ring::default_provider().install_default();
    }
}
