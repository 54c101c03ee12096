// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Application rights
//!
//! Application right strings carry no prefix, unlike the gateway and
//! component catalogs.

use super::Right;

/// Read and write the settings, devices and access keys of the application
pub const APP_SETTINGS: Right = Right::from_static("settings");

/// Add, change and remove collaborators of the application
pub const APP_COLLABORATORS: Right = Right::from_static("collaborators");

/// Delete the application
pub const APP_DELETE: Right = Right::from_static("delete");

/// List, edit and remove the application's devices on a handler
pub const DEVICES: Right = Right::from_static("devices");

/// View uplink messages sent by the application's devices
pub const READ_UPLINK: Right = Right::from_static("messages:up:r");

/// Send uplink messages to the application
pub const WRITE_UPLINK: Right = Right::from_static("messages:up:w");

/// Send downlink messages to the application's devices
pub const WRITE_DOWNLINK: Right = Right::from_static("messages:down:w");

/// Every application right
pub const ALL_APP_RIGHTS: &[Right] = &[
    APP_SETTINGS,
    APP_COLLABORATORS,
    APP_DELETE,
    DEVICES,
    READ_UPLINK,
    WRITE_UPLINK,
    WRITE_DOWNLINK,
];

/// Rights a user can hold on an application
///
/// Messaging rights are not part of this set; they are handed out through
/// access keys.
pub const ALL_APP_USER_RIGHTS: &[Right] = &[APP_SETTINGS, APP_COLLABORATORS, APP_DELETE, DEVICES];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_user_rights_exclude_messaging() {
        assert_eq!(ALL_APP_USER_RIGHTS.len(), 4);
        for right in [READ_UPLINK, WRITE_UPLINK, WRITE_DOWNLINK] {
            assert!(!ALL_APP_USER_RIGHTS.contains(&right));
        }
    }

    #[test]
    fn test_app_right_strings() {
        let strings: Vec<&str> = ALL_APP_RIGHTS.iter().map(Right::as_str).collect();
        assert_eq!(
            strings,
            [
                "settings",
                "collaborators",
                "delete",
                "devices",
                "messages:up:r",
                "messages:up:w",
                "messages:down:w",
            ]
        );
    }
}
