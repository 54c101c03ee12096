// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management

pub mod paths;
pub mod profile;

pub use profile::{Config, Profile};

use anyhow::Result;

/// Build an "env" profile from environment variables
pub fn env_profile() -> Result<Profile> {
    let server = std::env::var("ACCOUNT_SERVER")
        .map_err(|_| anyhow::anyhow!("ACCOUNT_SERVER must be set"))?;

    let mut profile = Profile::new("env".to_string(), server);
    profile.token = std::env::var("ACCOUNT_TOKEN").ok();
    profile.key = std::env::var("ACCOUNT_KEY").ok();
    Ok(profile)
}

/// Resolve which profile to use
///
/// Priority:
/// 1. --profile argument (or ACCOUNT_PROFILE)
/// 2. "env" if ACCOUNT_SERVER is set
/// 3. Current profile from config.json
pub fn resolve_profile(cli_profile: Option<&str>) -> Result<Profile> {
    if let Some(name) = cli_profile {
        if name == "env" {
            return env_profile();
        }
        return Profile::load(name);
    }

    if std::env::var("ACCOUNT_SERVER").is_ok() {
        return env_profile();
    }

    let config = Config::load()?;
    let name = config.current_profile().ok_or_else(|| {
        anyhow::anyhow!(
            "No profile configured. Use 'account profile create' or set ACCOUNT_SERVER"
        )
    })?;
    Profile::load(name)
}
