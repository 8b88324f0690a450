// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::{Category, CategoryType};
use crate::store::Store;
use crate::utils::pretty_table;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let kind: CategoryType = sub.get_one::<String>("type").unwrap().parse()?;
            let category = Category {
                id: 0,
                name: name.clone(),
                kind,
                icon: sub.get_one::<String>("icon").unwrap().clone(),
                color: sub.get_one::<String>("color").unwrap().clone(),
            };
            let id = store.add_category(&category)?;
            println!("Added {} category '{}' (id {})", kind.as_str(), name, id);
        }
        Some(("list", sub)) => {
            let kind = match sub.get_one::<String>("type") {
                Some(s) => Some(s.parse::<CategoryType>()?),
                None => None,
            };
            let data = store
                .get_categories(kind)?
                .iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        c.name.clone(),
                        c.kind.as_str().to_string(),
                        c.color.clone(),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Id", "Name", "Type", "Color"], data));
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store.delete_category(id)?;
            println!("Removed category {}", id);
        }
        _ => {}
    }
    Ok(())
}
