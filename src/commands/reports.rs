// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::reports;
use crate::store::Store;
use crate::utils::{parse_date, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("categories", sub)) => {
            let from = parse_date(sub.get_one::<String>("from").unwrap())?;
            let to = parse_date(sub.get_one::<String>("to").unwrap())?;
            let data = reports::expense_by_category(store, from, to)?
                .iter()
                .map(|c| vec![c.name.clone(), format!("{:.2}", c.total)])
                .collect();
            println!("{}", pretty_table(&["Category", "Spent"], data));
        }
        Some(("cashflow", sub)) => {
            let from = parse_date(sub.get_one::<String>("from").unwrap())?;
            let to = parse_date(sub.get_one::<String>("to").unwrap())?;
            let totals = reports::income_vs_expense(store, from, to)?;
            let data = vec![vec![
                format!("{:.2}", totals.income),
                format!("{:.2}", totals.expense),
                format!("{:.2}", totals.income - totals.expense),
            ]];
            println!("{}", pretty_table(&["Income", "Expense", "Net"], data));
        }
        Some(("trend", sub)) => {
            let months = *sub.get_one::<u32>("months").unwrap();
            let today = Local::now().date_naive();
            let data = reports::monthly_trend(store, months, today)?
                .iter()
                .map(|r| {
                    vec![
                        r.month.clone(),
                        format!("{:.2}", r.income),
                        format!("{:.2}", r.expense),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Month", "Income", "Expense"], data));
        }
        _ => {}
    }
    Ok(())
}
