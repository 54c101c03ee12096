// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for account-auth

use thiserror::Error;

/// Errors that can occur while turning a credential into request headers
#[derive(Error, Debug)]
pub enum AuthError {
    /// The secret contains bytes that cannot appear in an HTTP header
    #[error("Invalid {kind} credential: {source}")]
    InvalidHeader {
        kind: &'static str,
        #[source]
        source: http::header::InvalidHeaderValue,
    },

    /// A scope was requested for an empty resource ID
    #[error("Empty {0} ID in scope")]
    EmptyScope(&'static str),
}
