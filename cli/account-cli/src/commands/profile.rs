// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management commands

use anyhow::Result;
use clap::Subcommand;
use dialoguer::Confirm;

use crate::config::{Config, Profile, env_profile, resolve_profile};
use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum ProfileCommand {
    /// List all profiles
    #[command(alias = "ls")]
    List,

    /// Get profile details (defaults to the active profile)
    Get {
        /// Profile name
        name: Option<String>,
    },

    /// Create a new profile
    Create {
        /// Profile name
        name: String,
        /// Account server URL
        #[arg(long = "url")]
        server_url: String,
        /// Access token
        #[arg(long = "access-token")]
        access_token: Option<String>,
        /// Access key
        #[arg(long = "access-key")]
        access_key: Option<String>,
        /// Make this the current profile
        #[arg(long)]
        current: bool,
    },

    /// Delete a profile
    #[command(alias = "rm")]
    Delete {
        /// Profile name(s)
        names: Vec<String>,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Set the current profile
    Use {
        /// Profile name
        name: String,
    },
}

impl ProfileCommand {
    pub fn run(self, selected: Option<&str>, use_json: bool) -> Result<()> {
        match self {
            Self::List => list_profiles(selected, use_json),
            Self::Get { name } => get_profile(name.as_deref().or(selected), use_json),
            Self::Create {
                name,
                server_url,
                access_token,
                access_key,
                current,
            } => create_profile(name, server_url, access_token, access_key, current),
            Self::Delete { names, force } => delete_profiles(&names, force),
            Self::Use { name } => set_current_profile(&name),
        }
    }
}

fn list_profiles(selected: Option<&str>, use_json: bool) -> Result<()> {
    let current = resolve_profile(selected).ok().map(|p| p.name);

    let mut profiles: Vec<Profile> = Vec::new();
    if let Ok(env) = env_profile() {
        profiles.push(env);
    }
    for name in Profile::list_all()? {
        match Profile::load(&name) {
            Ok(profile) => profiles.push(profile),
            Err(e) => eprintln!(
                "Warning: skipping {}: {:#}",
                crate::config::paths::profile_path(&name).display(),
                e
            ),
        }
    }

    let summaries: Vec<_> = profiles
        .iter()
        .map(|p| p.summary(current.as_deref() == Some(p.name.as_str())))
        .collect();

    if use_json {
        json::print_json(&summaries)?;
    } else {
        let mut tbl = table::create_table(&["NAME", "CURR", "CREDENTIAL", "SERVER"]);
        for s in &summaries {
            tbl.add_row(vec![
                s.name,
                if s.current { "*" } else { "" },
                s.credential,
                s.server,
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

fn get_profile(name: Option<&str>, use_json: bool) -> Result<()> {
    let profile = resolve_profile(name)?;
    let summary = profile.summary(true);

    if use_json {
        json::print_json(&summary)?;
    } else {
        println!("Name:       {}", summary.name);
        println!("Server:     {}", summary.server);
        println!("Credential: {}", summary.credential);
    }
    Ok(())
}

fn create_profile(
    name: String,
    server: String,
    token: Option<String>,
    key: Option<String>,
    current: bool,
) -> Result<()> {
    if name == "env" {
        anyhow::bail!("'env' is reserved for the environment profile");
    }
    if Profile::list_all()?.contains(&name) {
        anyhow::bail!("Profile '{}' already exists", name);
    }

    let mut profile = Profile::new(name.clone(), server);
    profile.token = token;
    profile.key = key;
    profile.save()?;
    println!("Created profile '{}'", name);

    if current {
        set_current_profile(&name)?;
    }
    Ok(())
}

fn delete_profiles(names: &[String], force: bool) -> Result<()> {
    for name in names {
        if !force
            && !Confirm::new()
                .with_prompt(format!("Delete profile '{}'?", name))
                .default(false)
                .interact()?
        {
            continue;
        }
        Profile::delete(name)?;
        println!("Deleted profile '{}'", name);
    }
    Ok(())
}

fn set_current_profile(name: &str) -> Result<()> {
    // Make sure it exists and parses before pointing at it
    Profile::load(name)?;

    let mut config = Config::load()?;
    config.profile = Some(name.to_string());
    config.save()?;
    println!("Set '{}' as current profile", name);
    Ok(())
}
