// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Gateway rights

use super::Right;

/// Read and write the gateway settings
pub const GATEWAY_SETTINGS: Right = Right::from_static("gateway:settings");

/// Edit the gateway collaborators
pub const GATEWAY_COLLABORATORS: Right = Right::from_static("gateway:collaborators");

/// Delete the gateway
pub const GATEWAY_DELETE: Right = Right::from_static("gateway:delete");

/// See the exact location of the gateway; without it only an approximate
/// location is returned
pub const GATEWAY_LOCATION: Right = Right::from_static("gateway:location");

/// See the gateway status and metrics
pub const GATEWAY_STATUS: Right = Right::from_static("gateway:status");

/// Marks the collaborator as an owner
pub const GATEWAY_OWNER: Right = Right::from_static("gateway:owner");

/// See the messages passing through the gateway
pub const GATEWAY_MESSAGES: Right = Right::from_static("gateway:messages");

/// Every gateway right
pub const ALL_GATEWAY_RIGHTS: &[Right] = ALL_GATEWAY_USER_RIGHTS;

/// Rights a user can hold on a gateway
pub const ALL_GATEWAY_USER_RIGHTS: &[Right] = &[
    GATEWAY_SETTINGS,
    GATEWAY_COLLABORATORS,
    GATEWAY_DELETE,
    GATEWAY_LOCATION,
    GATEWAY_STATUS,
    GATEWAY_OWNER,
    GATEWAY_MESSAGES,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_user_rights_order() {
        let strings: Vec<&str> = ALL_GATEWAY_USER_RIGHTS.iter().map(Right::as_str).collect();
        assert_eq!(
            strings,
            [
                "gateway:settings",
                "gateway:collaborators",
                "gateway:delete",
                "gateway:location",
                "gateway:status",
                "gateway:owner",
                "gateway:messages",
            ]
        );
    }
}
