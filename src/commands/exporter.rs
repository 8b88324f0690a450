// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::reports::{self, TransactionFilter};
use crate::store::Store;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let rows = reports::search_transactions(store, "", &TransactionFilter::default())?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date", "time", "type", "amount", "category", "account", "description", "tags",
            ])?;
            for d in &rows {
                let t = &d.transaction;
                wtr.write_record([
                    t.date.to_string(),
                    t.time.clone().unwrap_or_default(),
                    t.kind.as_str().to_string(),
                    t.amount.to_string(),
                    d.category_name.clone().unwrap_or_default(),
                    d.account_name.clone().unwrap_or_default(),
                    t.description.clone(),
                    t.tags.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<serde_json::Value> = rows
                .iter()
                .map(|d| {
                    let t = &d.transaction;
                    json!({
                        "date": t.date.to_string(),
                        "time": t.time,
                        "type": t.kind.as_str(),
                        "amount": t.amount.to_string(),
                        "category": d.category_name,
                        "account": d.account_name,
                        "description": t.description,
                        "tags": t.tags,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transaction(s) to {}", rows.len(), out);
    Ok(())
}
