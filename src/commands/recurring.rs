// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::models::{Frequency, RecurringTransaction, TransactionType};
use crate::recurrence;
use crate::store::Store;
use crate::utils::{parse_date, parse_decimal, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let kind: TransactionType = sub.get_one::<String>("type").unwrap().parse()?;
            let frequency: Frequency = sub.get_one::<String>("frequency").unwrap().parse()?;
            let start = match sub.get_one::<String>("start") {
                Some(s) => parse_date(s)?,
                None => Local::now().date_naive(),
            };
            let pattern = RecurringTransaction {
                id: 0,
                kind,
                amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
                category_id: sub.get_one::<i64>("category").copied(),
                subcategory_id: None,
                account_id: Some(*sub.get_one::<i64>("account").unwrap()),
                description: sub.get_one::<String>("description").unwrap().clone(),
                frequency,
                interval: *sub.get_one::<i64>("interval").unwrap(),
                start_date: Some(start),
                end_date: None,
                next_due_date: Some(start),
                auto_create: true,
                active: true,
            };
            let id = store.add_recurring_transaction(&pattern)?;
            println!(
                "Added {} pattern of {} every {} x {} (id {})",
                kind.as_str(),
                pattern.amount,
                frequency.as_str(),
                pattern.interval,
                id
            );
        }
        Some(("list", _)) => {
            let data = store
                .get_recurring_transactions()?
                .iter()
                .map(|p| {
                    vec![
                        p.id.to_string(),
                        p.description.clone(),
                        p.kind.as_str().to_string(),
                        format!("{:.2}", p.amount),
                        p.frequency.as_str().to_string(),
                        p.next_due_date.map(|d| d.to_string()).unwrap_or_default(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(
                    &["Id", "Description", "Type", "Amount", "Frequency", "Next Due"],
                    data
                )
            );
        }
        Some(("run", _)) => {
            let now = Local::now();
            let created = recurrence::materialize_due(
                store,
                now.date_naive(),
                Some(now.format("%H:%M").to_string()),
            )?;
            println!("Created {} transaction(s) from due patterns", created);
        }
        _ => {}
    }
    Ok(())
}
