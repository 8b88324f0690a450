// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::Goal;
use crate::store::Store;
use crate::utils::{parse_date, parse_decimal, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let goal = Goal {
                id: 0,
                name: sub.get_one::<String>("name").unwrap().clone(),
                target_amount: parse_decimal(sub.get_one::<String>("target").unwrap())?,
                current_amount: Decimal::ZERO,
                deadline: sub.get_one::<String>("deadline").map(|s| parse_date(s)).transpose()?,
                icon: "flag".to_string(),
                color: "#4CAF50".to_string(),
                notes: String::new(),
                completed: false,
            };
            let id = store.add_goal(&goal)?;
            println!("Added goal '{}' (id {})", goal.name, id);
        }
        Some(("list", _)) => {
            let data = store
                .get_goals()?
                .iter()
                .map(|g| {
                    vec![
                        g.id.to_string(),
                        g.name.clone(),
                        format!("{:.2}", g.current_amount),
                        format!("{:.2}", g.target_amount),
                        format!("{:.0}%", g.percentage_complete()),
                        g.deadline.map(|d| d.to_string()).unwrap_or_default(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Id", "Name", "Saved", "Target", "Progress", "Deadline"], data)
            );
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store.delete_goal(id)?;
            println!("Removed goal {}", id);
        }
        _ => {}
    }
    Ok(())
}
