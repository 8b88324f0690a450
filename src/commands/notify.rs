// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::reminders::{ReminderEngine, Severity};
use crate::store::Store;
use crate::utils::pretty_table;

pub fn handle(store: &Store) -> Result<()> {
    let engine = ReminderEngine::new(store, Local::now().date_naive());
    let notifications = engine.all_notifications()?;
    if notifications.is_empty() {
        println!("No pending notifications");
        return Ok(());
    }
    let data = notifications
        .iter()
        .map(|n| {
            let severity = match n.severity {
                Severity::Low => "low",
                Severity::Medium => "medium",
                Severity::High => "high",
            };
            vec![severity.to_string(), n.title.clone(), n.message.clone()]
        })
        .collect();
    println!("{}", pretty_table(&["Severity", "Alert", "Detail"], data));
    Ok(())
}
