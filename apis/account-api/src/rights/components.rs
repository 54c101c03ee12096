// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network component rights

use super::Right;

/// Read and write the settings and access key of a network component
pub const COMPONENT_SETTINGS: Right = Right::from_static("component:settings");

/// Delete the network component
pub const COMPONENT_DELETE: Right = Right::from_static("component:delete");

/// View and edit the component collaborators
pub const COMPONENT_COLLABORATORS: Right = Right::from_static("component:collaborators");

/// Every component right
pub const ALL_COMPONENT_RIGHTS: &[Right] = ALL_COMPONENT_USER_RIGHTS;

/// Rights a user can hold on a network component
pub const ALL_COMPONENT_USER_RIGHTS: &[Right] =
    &[COMPONENT_SETTINGS, COMPONENT_DELETE, COMPONENT_COLLABORATORS];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_user_rights() {
        assert_eq!(
            ALL_COMPONENT_USER_RIGHTS,
            &[COMPONENT_SETTINGS, COMPONENT_DELETE, COMPONENT_COLLABORATORS]
        );
        assert!(
            ALL_COMPONENT_USER_RIGHTS
                .iter()
                .all(|r| r.as_str().starts_with("component:"))
        );
    }
}
