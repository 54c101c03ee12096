// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Gateway endpoints

use account_api::{
    API_PREFIX, Gateway, GatewayEdits, GrantRightsRequest, Location, RegisterGatewayRequest,
    Right, Token,
};
use account_auth::{Credential, Scope, ScopedCredential};
use urlencoding::encode;

use crate::{Account, Error};

fn gateways_path() -> String {
    format!("{}/gateways", API_PREFIX)
}

fn gateway_path(gateway_id: &str) -> String {
    format!("{}/{}", gateways_path(), encode(gateway_id))
}

fn gateway_token_path(gateway_id: &str) -> String {
    format!("{}/token", gateway_path(gateway_id))
}

fn collaborator_path(gateway_id: &str, username: &str) -> String {
    format!(
        "{}/collaborators/{}",
        gateway_path(gateway_id),
        encode(username)
    )
}

impl Account {
    /// Session credential restricted to one gateway
    fn gateway_auth(&self, gateway_id: &str) -> ScopedCredential {
        self.credential.with_scope(Scope::gateway(gateway_id))
    }

    // ========================================================================
    // Collection
    // ========================================================================

    /// List all gateways visible to the session
    pub async fn list_gateways(&self) -> Result<Vec<Gateway>, Error> {
        self.get(&self.credential.unscoped(), &gateways_path()).await
    }

    /// Register a new gateway
    ///
    /// # Arguments
    /// * `gateway_id` - ID of the new gateway (required)
    /// * `frequency_plan` - Frequency plan name (required)
    /// * `location` - Optional location
    ///
    /// # Errors
    /// Returns [`Error::Validation`] without contacting the server when the
    /// ID or the frequency plan is empty.
    pub async fn register_gateway(
        &self,
        gateway_id: &str,
        frequency_plan: &str,
        location: Option<Location>,
    ) -> Result<Gateway, Error> {
        if gateway_id.is_empty() {
            return Err(Error::Validation(
                "Cannot create gateway: no ID given".to_string(),
            ));
        }
        if frequency_plan.is_empty() {
            return Err(Error::Validation(
                "Cannot create gateway: no FrequencyPlan given".to_string(),
            ));
        }

        let req = RegisterGatewayRequest {
            id: gateway_id.to_string(),
            frequency_plan: frequency_plan.to_string(),
            location,
        };
        self.post(&self.credential.unscoped(), &gateways_path(), &req)
            .await
    }

    // ========================================================================
    // Single gateway
    // ========================================================================

    /// Fetch one gateway
    pub async fn find_gateway(&self, gateway_id: &str) -> Result<Gateway, Error> {
        self.get(&self.gateway_auth(gateway_id), &gateway_path(gateway_id))
            .await
    }

    /// Get a token the gateway can use to connect
    ///
    /// Fetches the gateway first. An embedded token is returned as-is. When
    /// there is none but the gateway record exposes its access key, the token
    /// is requested from `/token` authenticated with that key rather than the
    /// session.
    ///
    /// # Errors
    /// Returns [`Error::InsufficientCredentials`] when the session can see
    /// neither a token nor a key.
    pub async fn get_gateway_token(&self, gateway_id: &str) -> Result<Token, Error> {
        let mut gateway: Gateway = self
            .get(&self.gateway_auth(gateway_id), &gateway_path(gateway_id))
            .await?;

        if let Some(token) = gateway.token.take() {
            tracing::debug!(gateway_id, "Using token embedded in gateway");
            return Ok(token);
        }

        if let Some(key) = gateway.access_key() {
            tracing::debug!(gateway_id, "Exchanging gateway access key for a token");
            let key_auth = Credential::access_key(key).unscoped();
            return self.get(&key_auth, &gateway_token_path(gateway_id)).await;
        }

        Err(Error::InsufficientCredentials)
    }

    /// Remove a gateway from the account server
    pub async fn delete_gateway(&self, gateway_id: &str) -> Result<(), Error> {
        self.del(&self.gateway_auth(gateway_id), &gateway_path(gateway_id))
            .await
    }

    // ========================================================================
    // Collaborators
    // ========================================================================

    /// Set the rights a collaborator holds on the gateway
    ///
    /// The body is exactly `{"rights": [...]}`.
    pub async fn grant_gateway_rights(
        &self,
        gateway_id: &str,
        username: &str,
        rights: &[Right],
    ) -> Result<(), Error> {
        let req = GrantRightsRequest {
            rights: rights.to_vec(),
        };
        self.put(
            &self.gateway_auth(gateway_id),
            &collaborator_path(gateway_id, username),
            &req,
        )
        .await
    }

    /// Remove a collaborator and all their rights from the gateway
    pub async fn retract_gateway_rights(
        &self,
        gateway_id: &str,
        username: &str,
    ) -> Result<(), Error> {
        self.del(
            &self.gateway_auth(gateway_id),
            &collaborator_path(gateway_id, username),
        )
        .await
    }

    // ========================================================================
    // Edits
    // ========================================================================

    /// Apply a sparse patch; only the fields set in `edits` are sent
    pub async fn edit_gateway(&self, gateway_id: &str, edits: &GatewayEdits) -> Result<(), Error> {
        self.patch(
            &self.gateway_auth(gateway_id),
            &gateway_path(gateway_id),
            edits,
        )
        .await
    }

    /// Hand the gateway over to another user
    pub async fn transfer_ownership(&self, gateway_id: &str, username: &str) -> Result<(), Error> {
        self.edit_gateway(gateway_id, &GatewayEdits::new().owner(username))
            .await
    }

    /// Replace the publicly visible rights of the gateway
    pub async fn set_public_rights(&self, gateway_id: &str, rights: &[Right]) -> Result<(), Error> {
        self.edit_gateway(
            gateway_id,
            &GatewayEdits::new().public_rights(rights.iter().cloned()),
        )
        .await
    }

    pub async fn change_frequency_plan(&self, gateway_id: &str, plan: &str) -> Result<(), Error> {
        self.edit_gateway(gateway_id, &GatewayEdits::new().frequency_plan(plan))
            .await
    }

    pub async fn change_location(
        &self,
        gateway_id: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<(), Error> {
        self.edit_gateway(
            gateway_id,
            &GatewayEdits::new().location(Location::new(latitude, longitude)),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(gateways_path(), "/api/v2/gateways");
        assert_eq!(gateway_path("gw-1"), "/api/v2/gateways/gw-1");
        assert_eq!(gateway_token_path("gw-1"), "/api/v2/gateways/gw-1/token");
        assert_eq!(
            collaborator_path("gw-1", "alice"),
            "/api/v2/gateways/gw-1/collaborators/alice"
        );
    }

    #[test]
    fn test_path_segments_are_encoded() {
        assert_eq!(gateway_path("a/b c"), "/api/v2/gateways/a%2Fb%20c");
        assert_eq!(
            collaborator_path("gw", "bob@example.net"),
            "/api/v2/gateways/gw/collaborators/bob%40example.net"
        );
    }
}
