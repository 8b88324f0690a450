// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::Store;
use crate::utils::{hash_pin, validate_pin_strength};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("get", sub)) => {
            let key = sub.get_one::<String>("key").unwrap();
            match store.get_setting(key)? {
                Some(value) => println!("{}", value),
                None => println!("(unset)"),
            }
        }
        Some(("set", sub)) => {
            let key = sub.get_one::<String>("key").unwrap();
            let value = sub.get_one::<String>("value").unwrap();
            store.set_setting(key, value)?;
            println!("Set {} = {}", key, value);
        }
        Some(("set-pin", sub)) => {
            let pin = sub.get_one::<String>("pin").unwrap();
            if let Err(reason) = validate_pin_strength(pin) {
                anyhow::bail!("{}", reason);
            }
            store.set_setting("pin_code", &hash_pin(pin)?)?;
            println!("PIN updated");
        }
        _ => {}
    }
    Ok(())
}
