// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Shared helpers for CLI tests

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)]
// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]

use std::path::Path;

use assert_cmd::Command;

/// The `account` binary with a private config dir and no inherited settings
pub fn account_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("account").expect("Failed to find account binary");
    cmd.env("ACCOUNT_CONFIG_DIR", config_dir)
        .env_remove("ACCOUNT_SERVER")
        .env_remove("ACCOUNT_TOKEN")
        .env_remove("ACCOUNT_KEY")
        .env_remove("ACCOUNT_PROFILE")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a profile file the way `profile create` would
pub fn write_profile(config_dir: &Path, name: &str, server: &str, token: Option<&str>) {
    let dir = config_dir.join("profiles.d");
    std::fs::create_dir_all(&dir).expect("failed to create profiles dir");
    let mut profile = serde_json::json!({"name": name, "server": server});
    if let Some(token) = token {
        profile["token"] = serde_json::json!(token);
    }
    std::fs::write(
        dir.join(format!("{}.json", name)),
        serde_json::to_string_pretty(&profile).expect("failed to encode profile"),
    )
    .expect("failed to write profile");
}
