// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Rights catalog listing

use account_client::Right;
use account_client::rights::Catalog;
use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::output::{json, table};

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum CatalogArg {
    Apps,
    Gateways,
    Components,
}

impl From<CatalogArg> for Catalog {
    fn from(arg: CatalogArg) -> Self {
        match arg {
            CatalogArg::Apps => Catalog::Applications,
            CatalogArg::Gateways => Catalog::Gateways,
            CatalogArg::Components => Catalog::Components,
        }
    }
}

#[derive(Args, Clone)]
pub struct RightsArgs {
    /// Catalog to show (defaults to all)
    #[arg(value_enum)]
    pub catalog: Option<CatalogArg>,
}

#[derive(Serialize)]
struct RightRow<'a> {
    catalog: &'static str,
    right: &'a Right,
    user: bool,
}

impl RightsArgs {
    pub fn run(&self, use_json: bool) -> Result<()> {
        let catalogs: Vec<Catalog> = match self.catalog {
            Some(arg) => vec![arg.into()],
            None => Catalog::ALL.to_vec(),
        };

        let rows: Vec<RightRow<'_>> = catalogs
            .iter()
            .flat_map(|catalog| {
                catalog.rights().iter().map(move |right| RightRow {
                    catalog: catalog.name(),
                    right,
                    user: catalog.user_rights().contains(right),
                })
            })
            .collect();

        if use_json {
            json::print_json(&rows)?;
        } else {
            let mut tbl = table::create_table(&["CATALOG", "RIGHT", "USER"]);
            for row in &rows {
                tbl.add_row(vec![
                    row.catalog,
                    row.right.as_str(),
                    if row.user { "yes" } else { "no" },
                ]);
            }
            table::print_table(tbl);
        }
        Ok(())
    }
}
