// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::{Budget, Period};
use crate::store::Store;
use crate::utils::{parse_date, parse_decimal, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let period: Period = sub.get_one::<String>("period").unwrap().parse()?;
            let budget = Budget {
                id: 0,
                category_id: Some(*sub.get_one::<i64>("category").unwrap()),
                amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
                period,
                start_date: sub.get_one::<String>("from").map(|s| parse_date(s)).transpose()?,
                end_date: sub.get_one::<String>("to").map(|s| parse_date(s)).transpose()?,
                alert_percentage: parse_decimal(sub.get_one::<String>("alert").unwrap())?,
                spent: Decimal::ZERO,
            };
            let id = store.add_budget(&budget)?;
            println!("Added {} budget of {} (id {})", period.as_str(), budget.amount, id);
        }
        Some(("list", _)) => {
            let data = store
                .get_budgets()?
                .iter()
                .map(|row| {
                    let b = &row.budget;
                    vec![
                        b.id.to_string(),
                        row.category_name.clone().unwrap_or_default(),
                        b.period.as_str().to_string(),
                        format!("{:.2}", b.amount),
                        format!("{:.2}", b.spent),
                        format!("{:.0}%", b.percentage_used()),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Id", "Category", "Period", "Budget", "Spent", "Used"], data)
            );
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store.delete_budget(id)?;
            println!("Removed budget {}", id);
        }
        Some(("recalc", sub)) => {
            let category_id = *sub.get_one::<i64>("category").unwrap();
            let from = parse_date(sub.get_one::<String>("from").unwrap())?;
            let to = parse_date(sub.get_one::<String>("to").unwrap())?;
            store.update_budget_spent(category_id, from, to)?;
            println!("Recalculated spent for category {} over {}..{}", category_id, from, to);
        }
        _ => {}
    }
    Ok(())
}
