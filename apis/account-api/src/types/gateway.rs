// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Gateway types

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::null_as_default;
use crate::rights::Right;

/// A gateway registered on the account server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Gateway {
    /// Gateway ID, unique and immutable after registration
    pub id: String,
    /// Whether the gateway has connected at least once
    #[serde(default)]
    pub activated: bool,
    /// Frequency plan name (e.g. "EU_863_870")
    #[serde(default)]
    pub frequency_plan: String,
    /// Where the frequency plan definition can be downloaded
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub frequency_plan_url: String,
    /// Rights granted to everyone
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub public_rights: Vec<Right>,
    /// Location of the gateway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Users holding rights on the gateway
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub collaborators: Vec<Collaborator>,
    /// Username of the owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Access key of the gateway, only returned to callers allowed to see it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Embedded token, only returned to callers allowed to see it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<Token>,
    /// Free-form attributes (brand, model, description, ...)
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub attributes: HashMap<String, String>,
}

impl Gateway {
    /// The access key, treating an empty string as no key
    pub fn access_key(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.is_empty())
    }
}

/// GPS location in degrees
///
/// A location is either fully set or absent; there is no partial location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f64,
    #[serde(rename = "lng", alias = "lon", alias = "longitude")]
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

/// A user and the rights they hold on a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Collaborator {
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rights: Vec<Right>,
}

impl Collaborator {
    /// Whether this collaborator holds `right`
    pub fn has_right(&self, right: &Right) -> bool {
        self.rights.contains(right)
    }
}

/// Bearer token issued by the account server
///
/// The access token is opaque to this client and is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Token {
    #[serde(default)]
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
}

impl Token {
    /// True when the token carries an expiry that lies before `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry.is_some_and(|expiry| expiry <= now)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("expiry", &self.expiry)
            .finish()
    }
}
