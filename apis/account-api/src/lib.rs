// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Account server v2 API types
//!
//! This crate holds the payload shapes exchanged with the account server's
//! `/api/v2` endpoints and the closed catalogs of rights that can be granted
//! on applications, gateways and network components.
//!
//! The JSON field names are part of the wire contract (snake_case) and the
//! right strings are compared byte-for-byte by the server, so neither may be
//! changed.

pub mod rights;
pub mod types;

pub use rights::Right;
pub use types::*;

/// Version prefix shared by every endpoint
pub const API_PREFIX: &str = "/api/v2";
