// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Account Server Client Library
//!
//! Typed access to the account server's `/api/v2` REST API. Each method on
//! [`Account`] performs one HTTP request (two for
//! [`Account::get_gateway_token`]) and returns the decoded result or an
//! [`Error`]. There is no retry, no cache and no deduplication: two identical
//! concurrent calls both reach the server.
//!
//! ## Usage
//!
//! ```ignore
//! use account_client::{Account, Credential, Location, rights};
//!
//! let account = Account::new(
//!     "https://account.thethingsnetwork.org",
//!     Credential::access_token(token),
//! )?;
//!
//! let gateway = account
//!     .register_gateway("eui-0102030405060708", "EU_863_870", Some(Location::new(52.37, 4.89)))
//!     .await?;
//!
//! account
//!     .grant_gateway_rights(&gateway.id, "alice", rights::ALL_GATEWAY_USER_RIGHTS)
//!     .await?;
//! ```
//!
//! ## Credentials
//!
//! Collection calls (list, register) use the session credential as-is.
//! Calls on one gateway scope it to that gateway. The token fallback of
//! [`Account::get_gateway_token`] authenticates with the gateway's own
//! access key instead of the session.

use std::time::Duration;

pub mod error;
mod gateways;
mod request;

pub use error::Error;

// Re-export the credential model and API types for convenience
pub use account_api::{
    Collaborator, ErrorResponse, Gateway, GatewayEdits, GrantRightsRequest, Location,
    RegisterGatewayRequest, Right, Token, rights,
};
pub use account_auth::{AuthError, Credential, Scope, ScopedCredential};

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("account-client/", env!("CARGO_PKG_VERSION"));

/// A session against one account server
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Account {
    server: String,
    credential: Credential,
    client: reqwest::Client,
}

impl Account {
    /// Create a session with default transport settings
    ///
    /// # Arguments
    /// * `server` - Account server base URL (e.g., "https://account.example.net")
    /// * `credential` - Session credential attached to every call
    pub fn new(server: &str, credential: Credential) -> Result<Self, Error> {
        Self::builder(server).credential(credential).build()
    }

    /// Create an anonymous session
    pub fn public(server: &str) -> Result<Self, Error> {
        Self::new(server, Credential::Public)
    }

    pub fn builder(server: &str) -> AccountBuilder {
        AccountBuilder::new(server)
    }

    /// Base URL of the account server, without trailing slash
    pub fn server(&self) -> &str {
        &self.server
    }

    /// The session credential
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Same server and transport, different session credential
    pub fn with_credential(&self, credential: Credential) -> Self {
        Self {
            server: self.server.clone(),
            credential,
            client: self.client.clone(),
        }
    }
}

/// Builder for [`Account`]
#[derive(Debug)]
pub struct AccountBuilder {
    server: String,
    credential: Credential,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    client: Option<reqwest::Client>,
}

impl AccountBuilder {
    fn new(server: &str) -> Self {
        Self {
            server: server.to_string(),
            credential: Credential::Public,
            timeout: None,
            user_agent: None,
            client: None,
        }
    }

    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = credential;
        self
    }

    /// Per-request timeout applied by the transport
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured HTTP client; `timeout` and `user_agent` are then
    /// ignored
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<Account, Error> {
        let server = self.server.trim_end_matches('/').to_string();
        url::Url::parse(&server)?;

        let client = match self.client {
            Some(client) => client,
            None => {
                // reqwest is built without a rustls provider; ignore the error
                // when one has already been installed.
                let _ = rustls::crypto::ring::default_provider().install_default();

                let mut builder = reqwest::Client::builder().user_agent(
                    self.user_agent
                        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
                );
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(Account {
            server,
            credential: self.credential,
            client,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let account = Account::public("https://account.example.net/").unwrap();
        assert_eq!(account.server(), "https://account.example.net");
    }

    #[test]
    fn test_invalid_server_rejected() {
        let err = Account::public("not a url").unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }

    #[test]
    fn test_with_credential_keeps_server() {
        let account = Account::public("https://account.example.net").unwrap();
        let keyed = account.with_credential(Credential::access_key("k"));
        assert_eq!(keyed.server(), account.server());
        assert_eq!(keyed.credential(), &Credential::access_key("k"));
        assert!(account.credential().is_public());
    }
}
