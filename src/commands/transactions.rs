// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::models::{Transaction, TransactionType};
use crate::reports::{self, TransactionFilter};
use crate::store::Store;
use crate::utils::{parse_date, parse_decimal, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store.delete_transaction(id)?;
            println!("Removed transaction {}", id);
        }
        Some(("search", sub)) => search(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TransactionType = sub.get_one::<String>("type").unwrap().parse()?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };
    let mut t = Transaction::new(kind, amount, date);
    t.account_id = sub.get_one::<i64>("account").copied();
    t.to_account_id = sub.get_one::<i64>("to-account").copied();
    t.category_id = sub.get_one::<i64>("category").copied();
    t.time = Some(match sub.get_one::<String>("time") {
        Some(s) => s.clone(),
        None => Local::now().format("%H:%M").to_string(),
    });
    t.description = sub.get_one::<String>("description").unwrap().clone();
    t.payment_method = sub.get_one::<String>("method").unwrap().clone();
    t.tags = sub.get_one::<String>("tags").unwrap().clone();
    let id = store.add_transaction(&t)?;
    println!("Recorded {} of {} on {} (id {})", kind.as_str(), amount, date, id);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let limit = sub.get_one::<usize>("limit").copied();
    let rows = store.get_transactions(limit, 0)?;
    print_rows(
        rows.iter()
            .map(|t| {
                (
                    t.id,
                    t.date,
                    t.kind,
                    t.amount,
                    t.description.clone(),
                    String::new(),
                    String::new(),
                )
            })
            .collect(),
    );
    Ok(())
}

fn search(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let query = sub.get_one::<String>("query").unwrap();
    let filter = TransactionFilter {
        kind: match sub.get_one::<String>("type") {
            Some(s) => Some(s.parse()?),
            None => None,
        },
        category_id: sub.get_one::<i64>("category").copied(),
        account_id: sub.get_one::<i64>("account").copied(),
        start_date: sub.get_one::<String>("from").map(|s| parse_date(s)).transpose()?,
        end_date: sub.get_one::<String>("to").map(|s| parse_date(s)).transpose()?,
    };
    let rows = reports::search_transactions(store, query, &filter)?;
    print_rows(
        rows.iter()
            .map(|d| {
                (
                    d.transaction.id,
                    d.transaction.date,
                    d.transaction.kind,
                    d.transaction.amount,
                    d.transaction.description.clone(),
                    d.category_name.clone().unwrap_or_default(),
                    d.account_name.clone().unwrap_or_default(),
                )
            })
            .collect(),
    );
    Ok(())
}

type Row = (
    i64,
    chrono::NaiveDate,
    TransactionType,
    rust_decimal::Decimal,
    String,
    String,
    String,
);

fn print_rows(rows: Vec<Row>) {
    let data = rows
        .into_iter()
        .map(|(id, date, kind, amount, desc, cat, acct)| {
            vec![
                id.to_string(),
                date.to_string(),
                kind.as_str().to_string(),
                format!("{:.2}", amount),
                desc,
                cat,
                acct,
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Date", "Type", "Amount", "Description", "Category", "Account"],
            data
        )
    );
}
