// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;
use rust_decimal::Decimal;

use crate::models::{Debt, DebtType};
use crate::store::Store;
use crate::utils::{parse_date, parse_decimal, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let kind: DebtType = sub.get_one::<String>("type").unwrap().parse()?;
            let debt = Debt {
                id: 0,
                kind,
                person_name: sub.get_one::<String>("person").unwrap().clone(),
                amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
                amount_paid: Decimal::ZERO,
                date: Some(Local::now().date_naive()),
                due_date: sub.get_one::<String>("due").map(|s| parse_date(s)).transpose()?,
                interest_rate: Decimal::ZERO,
                notes: String::new(),
                settled: false,
            };
            let id = store.add_debt(&debt)?;
            println!(
                "Added {} debt of {} with {} (id {})",
                kind.as_str(),
                debt.amount,
                debt.person_name,
                id
            );
        }
        Some(("list", _)) => {
            let data = store
                .get_debts()?
                .iter()
                .map(|d| {
                    vec![
                        d.id.to_string(),
                        d.kind.as_str().to_string(),
                        d.person_name.clone(),
                        format!("{:.2}", d.remaining_amount()),
                        d.due_date.map(|x| x.to_string()).unwrap_or_default(),
                        if d.settled { "yes" } else { "no" }.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Id", "Type", "Person", "Remaining", "Due", "Settled"], data)
            );
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store.delete_debt(id)?;
            println!("Removed debt {}", id);
        }
        _ => {}
    }
    Ok(())
}
