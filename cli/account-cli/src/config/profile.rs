// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management types

use account_client::Credential;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// A connection profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile name
    pub name: String,

    /// Account server URL
    pub server: String,

    /// OAuth access token of the user session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Access key, used when no token is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// What `profile get` and `profile list` show; secrets stay on disk
#[derive(Debug, Serialize)]
pub struct ProfileSummary<'a> {
    pub name: &'a str,
    pub server: &'a str,
    pub credential: &'static str,
    pub current: bool,
}

impl Profile {
    pub fn new(name: String, server: String) -> Self {
        Self {
            name,
            server,
            token: None,
            key: None,
        }
    }

    /// Session credential; a token wins over a key
    pub fn credential(&self) -> Credential {
        match (&self.token, &self.key) {
            (Some(token), _) => Credential::access_token(token.clone()),
            (None, Some(key)) => Credential::access_key(key.clone()),
            (None, None) => Credential::Public,
        }
    }

    pub fn summary(&self, current: bool) -> ProfileSummary<'_> {
        ProfileSummary {
            name: &self.name,
            server: &self.server,
            credential: self.credential().kind(),
            current,
        }
    }

    /// Load a profile from a file
    pub fn load(name: &str) -> anyhow::Result<Self> {
        let path = super::paths::profile_path(name);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile '{}'", name))?;
        let profile: Profile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse profile '{}'", name))?;
        Ok(profile)
    }

    /// Save the profile to a file
    pub fn save(&self) -> anyhow::Result<()> {
        super::paths::ensure_config_dirs()?;
        let path = super::paths::profile_path(&self.name);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Delete the profile file
    pub fn delete(name: &str) -> anyhow::Result<()> {
        let path = super::paths::profile_path(name);
        std::fs::remove_file(&path)
            .with_context(|| format!("Failed to delete profile '{}'", name))?;
        Ok(())
    }

    /// List all available profiles
    pub fn list_all() -> anyhow::Result<Vec<String>> {
        let profiles_dir = super::paths::profiles_dir();
        if !profiles_dir.exists() {
            return Ok(vec![]);
        }

        let mut profiles = vec![];
        for entry in std::fs::read_dir(&profiles_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                profiles.push(stem.to_string_lossy().to_string());
            }
        }
        profiles.sort();
        Ok(profiles)
    }
}

/// Main configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Current active profile name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

impl Config {
    /// Load the main config file
    pub fn load() -> anyhow::Result<Self> {
        let path = super::paths::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save the main config file
    pub fn save(&self) -> anyhow::Result<()> {
        super::paths::ensure_config_dirs()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(super::paths::config_file(), content)?;
        Ok(())
    }

    pub fn current_profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_token_wins_over_key() {
        let mut profile = Profile::new("p".into(), "https://account.example.net".into());
        assert!(profile.credential().is_public());

        profile.key = Some("k".into());
        assert_eq!(profile.credential(), Credential::access_key("k"));

        profile.token = Some("t".into());
        assert_eq!(profile.credential(), Credential::access_token("t"));
    }

    #[test]
    fn test_summary_hides_secrets() {
        let mut profile = Profile::new("p".into(), "https://account.example.net".into());
        profile.token = Some("very-secret".into());
        let json = serde_json::to_string(&profile.summary(true)).unwrap();
        assert!(!json.contains("very-secret"));
        assert!(json.contains("\"credential\":\"access token\""));
    }

    #[test]
    fn test_profile_file_format() {
        let profile: Profile =
            serde_json::from_str(r#"{"name":"prod","server":"https://a.example","key":"k"}"#)
                .unwrap();
        assert_eq!(profile.token, None);
        assert_eq!(profile.key.as_deref(), Some("k"));
    }
}
