// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Account CLI - command-line interface for the account server gateway API

use std::time::Duration;

use account_client::{Account, Credential};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

use commands::{GatewayCommand, ProfileCommand, RightsArgs};
use config::Profile;

#[derive(Parser)]
#[command(
    name = "account",
    version,
    about = "Account server gateway management CLI",
    long_about = "Manage gateways, their collaborators and tokens on an account server"
)]
struct Cli {
    /// Profile to use
    #[arg(short, long, global = true, env = "ACCOUNT_PROFILE")]
    profile: Option<String>,

    /// Account server URL override
    #[arg(short, long, global = true, env = "ACCOUNT_SERVER")]
    server: Option<String>,

    /// Access token override
    #[arg(long, global = true, env = "ACCOUNT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Access key override (ignored when a token is given)
    #[arg(long, global = true, env = "ACCOUNT_KEY", hide_env_values = true)]
    key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage gateways
    #[command(alias = "gw")]
    Gateway {
        #[command(subcommand)]
        command: GatewayCommand,
    },

    /// List gateways (shortcut for 'gateway list')
    Gateways,

    /// Show the rights catalogs
    Rights(RightsArgs),

    /// Manage connection profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

impl Cli {
    /// Build an account session from CLI options or profile
    fn build_client(&self) -> Result<Account> {
        let profile = match &self.server {
            Some(server) => Profile::new("cli".to_string(), server.clone()),
            None => config::resolve_profile(self.profile.as_deref())?,
        };

        let credential = match (&self.token, &self.key) {
            (Some(token), _) => Credential::access_token(token.clone()),
            (None, Some(key)) => Credential::access_key(key.clone()),
            (None, None) => profile.credential(),
        };

        tracing::debug!(
            profile = %profile.name,
            server = %profile.server,
            credential = credential.kind(),
            "Using account server"
        );

        Account::builder(&profile.server)
            .credential(credential)
            .timeout(Duration::from_secs(self.timeout))
            .user_agent(concat!("account-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| format!("Failed to create client for {}", profile.server))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("account=debug,account_client=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Rights(args) => args.run(cli.json),
        Commands::Profile { command } => command.clone().run(cli.profile.as_deref(), cli.json),
        Commands::Gateway { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Gateways => {
            let client = cli.build_client()?;
            commands::gateway::list_gateways(&client, cli.json).await
        }
    }
}
