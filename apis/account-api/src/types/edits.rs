// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request bodies for the gateway endpoints

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::gateway::Location;
use crate::rights::Right;

/// Body of `POST /api/v2/gateways`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RegisterGatewayRequest {
    /// ID of the new gateway (required)
    pub id: String,
    /// Frequency plan of the new gateway (required)
    pub frequency_plan: String,
    /// Location of the new gateway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Body of `PUT /api/v2/gateways/{id}/collaborators/{username}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GrantRightsRequest {
    pub rights: Vec<Right>,
}

/// Editable fields of a gateway, sent as `PATCH /api/v2/gateways/{id}`
///
/// The server applies only the fields present in the body, so an unset field
/// is left out of the JSON entirely. Setting `public_rights` to an empty list
/// is sent as `[]` and clears the public rights.
///
/// ```
/// use account_api::{GatewayEdits, Location};
///
/// let edits = GatewayEdits::new()
///     .frequency_plan("EU_863_870")
///     .location(Location::new(52.37, 4.89));
/// assert!(edits.owner.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GatewayEdits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_rights: Option<Vec<Right>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl GatewayEdits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand the gateway over to another user
    pub fn owner(mut self, username: impl Into<String>) -> Self {
        self.owner = Some(username.into());
        self
    }

    /// Replace the publicly visible rights
    pub fn public_rights(mut self, rights: impl IntoIterator<Item = Right>) -> Self {
        self.public_rights = Some(rights.into_iter().collect());
        self
    }

    pub fn frequency_plan(mut self, plan: impl Into<String>) -> Self {
        self.frequency_plan = Some(plan.into());
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// True when no field is set and the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
            && self.public_rights.is_none()
            && self.frequency_plan.is_none()
            && self.location.is_none()
    }
}
