// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Rights catalogs
//!
//! A [`Right`] is a permission string scoped to one kind of resource. The
//! three catalogs below are closed sets: their string values are sent
//! verbatim in grant and edit requests and must match the server exactly.
//!
//! | Module | Resource | "All user rights" |
//! |--------|----------|-------------------|
//! | [`apps`] | applications | settings, collaborators, delete, devices |
//! | [`gateways`] | gateways | all 7 gateway rights |
//! | [`components`] | network components | all 3 component rights |

use std::borrow::Cow;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod apps;
pub mod components;
pub mod gateways;

pub use apps::*;
pub use components::*;
pub use gateways::*;

/// A scoped permission string
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Right(Cow<'static, str>);

impl Right {
    /// Declare a catalog constant
    pub const fn from_static(value: &'static str) -> Self {
        Right(Cow::Borrowed(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Right {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Right {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resource kind a catalog applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Applications,
    Gateways,
    Components,
}

impl Catalog {
    pub const ALL: [Catalog; 3] = [Catalog::Applications, Catalog::Gateways, Catalog::Components];

    /// Every right defined for this resource kind
    pub fn rights(self) -> &'static [Right] {
        match self {
            Catalog::Applications => ALL_APP_RIGHTS,
            Catalog::Gateways => ALL_GATEWAY_RIGHTS,
            Catalog::Components => ALL_COMPONENT_RIGHTS,
        }
    }

    /// The default set granted to a collaborator
    pub fn user_rights(self) -> &'static [Right] {
        match self {
            Catalog::Applications => ALL_APP_USER_RIGHTS,
            Catalog::Gateways => ALL_GATEWAY_USER_RIGHTS,
            Catalog::Components => ALL_COMPONENT_USER_RIGHTS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Catalog::Applications => "apps",
            Catalog::Gateways => "gateways",
            Catalog::Components => "components",
        }
    }

    /// Look up a catalog constant by its wire string
    pub fn lookup(self, value: &str) -> Option<Right> {
        self.rights().iter().find(|r| r.as_str() == value).cloned()
    }
}

/// Look up `value` in every catalog
///
/// Application rights come first, so the unprefixed application names win
/// should a future catalog reuse one.
pub fn lookup(value: &str) -> Option<Right> {
    Catalog::ALL.iter().find_map(|c| c.lookup(value))
}

/// Whether `right` is one of the catalog constants
pub fn is_known(right: &Right) -> bool {
    lookup(right.as_str()).is_some()
}
