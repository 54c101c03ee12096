// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Account server type definitions

pub mod common;
pub mod edits;
pub mod gateway;

pub use common::*;
pub use edits::*;
pub use gateway::*;
