// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::{Account, AccountType};
use crate::store::Store;
use crate::utils::{fmt_money, parse_decimal, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let kind: AccountType = sub.get_one::<String>("type").unwrap().clone().into();
            let balance = parse_decimal(sub.get_one::<String>("balance").unwrap())?;
            let mut account = Account::new(name, kind, balance);
            account.currency = sub.get_one::<String>("currency").unwrap().to_uppercase();
            let id = store.add_account(&account)?;
            println!("Added account '{}' (id {})", name, id);
        }
        Some(("list", _)) => {
            let accounts = store.get_accounts()?;
            let data = accounts
                .iter()
                .map(|a| {
                    vec![
                        a.id.to_string(),
                        a.name.clone(),
                        a.kind.as_str().to_string(),
                        fmt_money(&a.current_balance, &a.currency),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Id", "Name", "Type", "Balance"], data));
            println!("Total: {}", store.get_total_balance()?.round_dp(2));
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store.delete_account(id)?;
            println!("Removed account {}", id);
        }
        _ => {}
    }
    Ok(())
}
