// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Gateway management commands

use account_client::rights::{ALL_GATEWAY_USER_RIGHTS, Catalog};
use account_client::{Account, Gateway, GatewayEdits, Location, Right};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use dialoguer::Confirm;

use crate::output::{json, table};

#[derive(Args, Clone, Debug, Default)]
pub struct LocationArgs {
    /// Latitude in degrees
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Longitude in degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,
}

impl LocationArgs {
    fn location(&self) -> Option<Location> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Location::new(lat, lng)),
            _ => None,
        }
    }
}

#[derive(Subcommand, Clone)]
pub enum GatewayCommand {
    /// List gateways
    #[command(alias = "ls")]
    List,

    /// Get gateway details
    Get {
        /// Gateway ID
        id: String,
    },

    /// Register a new gateway
    #[command(alias = "create")]
    Register {
        /// Gateway ID
        id: String,
        /// Frequency plan (e.g. EU_863_870)
        #[arg(short, long)]
        frequency_plan: String,
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Delete gateway(s)
    #[command(alias = "rm")]
    Delete {
        /// Gateway ID(s)
        ids: Vec<String>,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Print a token the gateway can connect with
    Token {
        /// Gateway ID
        id: String,
    },

    /// Grant rights to a collaborator
    Grant {
        /// Gateway ID
        id: String,
        /// Username of the collaborator
        username: String,
        /// Right to grant (repeatable); defaults to all gateway user rights
        #[arg(short, long = "right")]
        rights: Vec<String>,
    },

    /// Remove a collaborator
    Retract {
        /// Gateway ID
        id: String,
        /// Username of the collaborator
        username: String,
    },

    /// Edit gateway fields; only the given fields change
    Edit {
        /// Gateway ID
        id: String,
        /// New owner username
        #[arg(long)]
        owner: Option<String>,
        /// Public right (repeatable), replaces the current list
        #[arg(long = "public-right")]
        public_rights: Vec<String>,
        /// Remove all public rights
        #[arg(long, conflicts_with = "public_rights")]
        clear_public_rights: bool,
        /// New frequency plan
        #[arg(short, long)]
        frequency_plan: Option<String>,
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Transfer ownership to another user
    Transfer {
        /// Gateway ID
        id: String,
        /// Username of the new owner
        username: String,
    },
}

impl GatewayCommand {
    pub async fn run(self, client: &Account, use_json: bool) -> Result<()> {
        match self {
            Self::List => list_gateways(client, use_json).await,
            Self::Get { id } => get_gateway(client, &id, use_json).await,
            Self::Register {
                id,
                frequency_plan,
                location,
            } => register_gateway(client, &id, &frequency_plan, location.location(), use_json).await,
            Self::Delete { ids, force } => delete_gateways(client, &ids, force).await,
            Self::Token { id } => gateway_token(client, &id, use_json).await,
            Self::Grant {
                id,
                username,
                rights,
            } => grant_rights(client, &id, &username, &rights).await,
            Self::Retract { id, username } => {
                client
                    .retract_gateway_rights(&id, &username)
                    .await
                    .with_context(|| format!("Failed to remove '{}' from gateway '{}'", username, id))?;
                println!("Removed '{}' from gateway '{}'", username, id);
                Ok(())
            }
            Self::Edit {
                id,
                owner,
                public_rights,
                clear_public_rights,
                frequency_plan,
                location,
            } => {
                let mut edits = GatewayEdits::new();
                if let Some(owner) = owner {
                    edits = edits.owner(owner);
                }
                if clear_public_rights {
                    edits = edits.public_rights(Vec::new());
                } else if !public_rights.is_empty() {
                    edits = edits.public_rights(parse_gateway_rights(&public_rights)?);
                }
                if let Some(plan) = frequency_plan {
                    edits = edits.frequency_plan(plan);
                }
                if let Some(location) = location.location() {
                    edits = edits.location(location);
                }
                edit_gateway(client, &id, &edits).await
            }
            Self::Transfer { id, username } => {
                client
                    .transfer_ownership(&id, &username)
                    .await
                    .with_context(|| format!("Failed to transfer gateway '{}'", id))?;
                println!("Transferred gateway '{}' to '{}'", id, username);
                Ok(())
            }
        }
    }
}

/// Resolve right names against the gateway catalog
fn parse_gateway_rights(values: &[String]) -> Result<Vec<Right>> {
    values
        .iter()
        .map(|value| {
            Catalog::Gateways.lookup(value).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown gateway right '{}' (see 'account rights gateways')",
                    value
                )
            })
        })
        .collect()
}

pub async fn list_gateways(client: &Account, use_json: bool) -> Result<()> {
    let gateways = client
        .list_gateways()
        .await
        .context("Failed to list gateways")?;

    if use_json {
        json::print_json(&gateways)?;
    } else {
        let mut tbl = table::create_table(&["ID", "FREQUENCY PLAN", "ACTIVATED", "OWNER", "LOCATION"]);
        for gw in &gateways {
            tbl.add_row(vec![
                gw.id.clone(),
                gw.frequency_plan.clone(),
                gw.activated.to_string(),
                gw.owner.clone().unwrap_or_else(|| "-".to_string()),
                gw.location
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

async fn get_gateway(client: &Account, id: &str, use_json: bool) -> Result<()> {
    let gateway = client
        .find_gateway(id)
        .await
        .with_context(|| format!("Failed to get gateway '{}'", id))?;

    if use_json {
        json::print_json(&gateway)?;
    } else {
        print_gateway(&gateway);
    }
    Ok(())
}

fn print_gateway(gateway: &Gateway) {
    println!("ID:             {}", gateway.id);
    println!("Frequency plan: {}", gateway.frequency_plan);
    println!("Activated:      {}", gateway.activated);
    if let Some(owner) = &gateway.owner {
        println!("Owner:          {}", owner);
    }
    if let Some(location) = &gateway.location {
        println!("Location:       {}", location);
    }
    println!("Public rights:  {}", table::rights_cell(&gateway.public_rights));
    if !gateway.collaborators.is_empty() {
        println!("Collaborators:");
        for collaborator in &gateway.collaborators {
            println!(
                "  {:<16} {}",
                collaborator.username,
                table::rights_cell(&collaborator.rights)
            );
        }
    }
}

async fn register_gateway(
    client: &Account,
    id: &str,
    frequency_plan: &str,
    location: Option<Location>,
    use_json: bool,
) -> Result<()> {
    let gateway = client
        .register_gateway(id, frequency_plan, location)
        .await
        .with_context(|| format!("Failed to register gateway '{}'", id))?;

    if use_json {
        json::print_json(&gateway)?;
    } else {
        println!("Registered gateway '{}'", gateway.id);
    }
    Ok(())
}

async fn delete_gateways(client: &Account, ids: &[String], force: bool) -> Result<()> {
    if ids.is_empty() {
        anyhow::bail!("No gateway ID given");
    }

    for id in ids {
        if !force
            && !Confirm::new()
                .with_prompt(format!("Delete gateway '{}'?", id))
                .default(false)
                .interact()?
        {
            continue;
        }
        client
            .delete_gateway(id)
            .await
            .with_context(|| format!("Failed to delete gateway '{}'", id))?;
        println!("Deleted gateway '{}'", id);
    }
    Ok(())
}

async fn gateway_token(client: &Account, id: &str, use_json: bool) -> Result<()> {
    let token = client
        .get_gateway_token(id)
        .await
        .with_context(|| format!("Failed to get token for gateway '{}'", id))?;

    if use_json {
        json::print_json(&token)?;
    } else {
        println!("{}", token.access_token);
        if let Some(expiry) = token.expiry {
            eprintln!("Expires: {}", expiry.to_rfc3339());
        }
    }
    Ok(())
}

async fn grant_rights(client: &Account, id: &str, username: &str, values: &[String]) -> Result<()> {
    let rights = if values.is_empty() {
        ALL_GATEWAY_USER_RIGHTS.to_vec()
    } else {
        parse_gateway_rights(values)?
    };

    client
        .grant_gateway_rights(id, username, &rights)
        .await
        .with_context(|| format!("Failed to grant rights on gateway '{}'", id))?;
    println!(
        "Granted {} to '{}' on gateway '{}'",
        table::rights_cell(&rights),
        username,
        id
    );
    Ok(())
}

async fn edit_gateway(client: &Account, id: &str, edits: &GatewayEdits) -> Result<()> {
    if edits.is_empty() {
        anyhow::bail!("Nothing to change; give at least one field to edit");
    }

    client
        .edit_gateway(id, edits)
        .await
        .with_context(|| format!("Failed to edit gateway '{}'", id))?;
    println!("Updated gateway '{}'", id);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use account_client::rights::{GATEWAY_OWNER, GATEWAY_STATUS};

    #[test]
    fn test_parse_gateway_rights() {
        let rights =
            parse_gateway_rights(&["gateway:status".to_string(), "gateway:owner".to_string()])
                .unwrap();
        assert_eq!(rights, vec![GATEWAY_STATUS, GATEWAY_OWNER]);
    }

    #[test]
    fn test_parse_rejects_other_catalogs() {
        let err = parse_gateway_rights(&["settings".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Unknown gateway right 'settings'"));
    }

    #[test]
    fn test_location_args_need_both() {
        let partial = LocationArgs {
            lat: Some(1.0),
            lng: None,
        };
        assert_eq!(partial.location(), None);

        let full = LocationArgs {
            lat: Some(1.0),
            lng: Some(2.0),
        };
        assert_eq!(full.location(), Some(Location::new(1.0, 2.0)));
    }
}
