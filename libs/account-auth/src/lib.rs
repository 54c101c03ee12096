// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Account server authentication
//!
//! Every request to the account server carries one credential:
//!
//! - **Public**: no `Authorization` header, only public data is visible
//! - **Access token**: `Authorization: Bearer <token>`, the caller's session
//! - **Access key**: `Authorization: Key <key>`, a key held by one resource
//!
//! Calls on a single resource narrow the session credential to that
//! resource with a [`Scope`]. Scoping never mutates the session: each call
//! builds its own [`ScopedCredential`] value.
//!
//! # Example
//!
//! ```
//! use account_auth::{Credential, Scope};
//!
//! let session = Credential::access_token("eyJhbGciOi...");
//! let scoped = session.with_scope(Scope::gateway("eui-0102030405060708"));
//! assert_eq!(scoped.scope().map(ToString::to_string).as_deref(), Some("gateway:eui-0102030405060708"));
//!
//! // the session itself is untouched
//! assert!(session.unscoped().scope().is_none());
//! ```

use std::fmt;

use http::HeaderValue;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::AuthError;

/// A credential presented to the account server
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Credential {
    /// Anonymous access
    #[default]
    Public,
    /// OAuth bearer token of a user session
    AccessToken(String),
    /// Access key of an application, gateway or component
    AccessKey(String),
}

impl Credential {
    pub fn access_token(token: impl Into<String>) -> Self {
        Credential::AccessToken(token.into())
    }

    pub fn access_key(key: impl Into<String>) -> Self {
        Credential::AccessKey(key.into())
    }

    /// Short name used in logs and errors, never the secret itself
    pub fn kind(&self) -> &'static str {
        match self {
            Credential::Public => "public",
            Credential::AccessToken(_) => "access token",
            Credential::AccessKey(_) => "access key",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Credential::Public)
    }

    /// Restrict this credential to one resource for a single call
    pub fn with_scope(&self, scope: Scope) -> ScopedCredential {
        ScopedCredential {
            credential: self.clone(),
            scope: Some(scope),
        }
    }

    /// Use this credential as-is for a collection-level call
    pub fn unscoped(&self) -> ScopedCredential {
        ScopedCredential {
            credential: self.clone(),
            scope: None,
        }
    }

    /// Render the `Authorization` header value, if this credential has one
    pub fn authorization(&self) -> Result<Option<HeaderValue>, AuthError> {
        let raw = match self {
            Credential::Public => return Ok(None),
            Credential::AccessToken(token) => format!("Bearer {}", token),
            Credential::AccessKey(key) => format!("Key {}", key),
        };

        let mut value = HeaderValue::from_str(&raw).map_err(|source| AuthError::InvalidHeader {
            kind: self.kind(),
            source,
        })?;
        value.set_sensitive(true);
        Ok(Some(value))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Public => f.write_str("Public"),
            Credential::AccessToken(_) => f.write_str("AccessToken(<redacted>)"),
            Credential::AccessKey(_) => f.write_str("AccessKey(<redacted>)"),
        }
    }
}

/// The resource a credential is restricted to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Scope {
    Application(String),
    Gateway(String),
    Component(String),
}

impl Scope {
    pub fn application(id: impl Into<String>) -> Self {
        Scope::Application(id.into())
    }

    pub fn gateway(id: impl Into<String>) -> Self {
        Scope::Gateway(id.into())
    }

    pub fn component(id: impl Into<String>) -> Self {
        Scope::Component(id.into())
    }

    /// ID of the scoped resource
    pub fn id(&self) -> &str {
        match self {
            Scope::Application(id) | Scope::Gateway(id) | Scope::Component(id) => id,
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            Scope::Application(_) => "apps",
            Scope::Gateway(_) => "gateway",
            Scope::Component(_) => "component",
        }
    }

    /// Reject scopes that would cover no resource
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.id().is_empty() {
            return Err(AuthError::EmptyScope(self.prefix()));
        }
        Ok(())
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix(), self.id())
    }
}

/// A credential together with the scope it is used for
///
/// Built fresh for every call by [`Credential::with_scope`] or
/// [`Credential::unscoped`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedCredential {
    credential: Credential,
    scope: Option<Scope>,
}

impl ScopedCredential {
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn scope(&self) -> Option<&Scope> {
        self.scope.as_ref()
    }

    /// Render the `Authorization` header value for this call
    pub fn authorization(&self) -> Result<Option<HeaderValue>, AuthError> {
        if let Some(scope) = &self.scope {
            scope.validate()?;
        }
        self.credential.authorization()
    }
}

impl From<Credential> for ScopedCredential {
    fn from(credential: Credential) -> Self {
        ScopedCredential {
            credential,
            scope: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_public_has_no_header() {
        assert!(Credential::Public.authorization().unwrap().is_none());
        assert!(Credential::default().is_public());
    }

    #[test]
    fn test_bearer_header() {
        let value = Credential::access_token("abc.def")
            .authorization()
            .unwrap()
            .unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer abc.def");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_key_header() {
        let value = Credential::access_key("ttn-account-v2.xyz")
            .authorization()
            .unwrap()
            .unwrap();
        assert_eq!(value.to_str().unwrap(), "Key ttn-account-v2.xyz");
    }

    #[test]
    fn test_invalid_header_is_an_error() {
        let err = Credential::access_token("line\nbreak")
            .authorization()
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidHeader { kind: "access token", .. }));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let debug = format!("{:?}", Credential::access_key("super-secret"));
        assert!(!debug.contains("super-secret"));

        let scoped = Credential::access_token("tok-123").with_scope(Scope::gateway("gw"));
        assert!(!format!("{scoped:?}").contains("tok-123"));
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(Scope::gateway("gw-1").to_string(), "gateway:gw-1");
        assert_eq!(Scope::application("app").to_string(), "apps:app");
        assert_eq!(Scope::component("router").to_string(), "component:router");
    }

    #[test]
    fn test_scoping_does_not_mutate_session() {
        let session = Credential::access_token("tok");
        let a = session.with_scope(Scope::gateway("a"));
        let b = session.with_scope(Scope::gateway("b"));

        assert_eq!(a.credential(), &session);
        assert_eq!(a.scope(), Some(&Scope::gateway("a")));
        assert_eq!(b.scope(), Some(&Scope::gateway("b")));
        assert_eq!(session.unscoped().scope(), None);
    }

    #[test]
    fn test_empty_scope_rejected() {
        let scoped = Credential::access_token("tok").with_scope(Scope::gateway(""));
        assert!(matches!(
            scoped.authorization(),
            Err(AuthError::EmptyScope("gateway"))
        ));
    }

    #[test]
    fn test_scope_serde() {
        let json = serde_json::to_value(Scope::gateway("gw")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "gateway", "id": "gw"}));
    }
}
