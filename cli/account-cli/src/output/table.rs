// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Table output formatting

use account_client::Right;
use comfy_table::{Table, presets::NOTHING};

/// Create a new table with headers
pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(headers);
    table
}

/// Format a table and print it
pub fn print_table(table: Table) {
    println!("{table}");
}

/// Comma-separated rights, or "-" for none
pub fn rights_cell(rights: &[Right]) -> String {
    if rights.is_empty() {
        return "-".to_string();
    }
    rights
        .iter()
        .map(Right::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_client::rights::{GATEWAY_LOCATION, GATEWAY_STATUS};

    #[test]
    fn test_rights_cell() {
        assert_eq!(rights_cell(&[]), "-");
        assert_eq!(
            rights_cell(&[GATEWAY_STATUS, GATEWAY_LOCATION]),
            "gateway:status,gateway:location"
        );
    }
}
