// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Scheduling of recurring transactions: which patterns are due, and
//! turning due patterns into concrete transactions.

use chrono::{Duration, NaiveDate};

use crate::error::Result;
use crate::models::{Frequency, RecurringTransaction, Transaction};
use crate::store::Store;

/// Patterns that should fire on or before `as_of`: active, marked for
/// auto-creation, and with a due cursor that has arrived.
pub fn due_patterns(store: &Store, as_of: NaiveDate) -> Result<Vec<RecurringTransaction>> {
    let patterns = store.get_recurring_transactions()?;
    Ok(patterns
        .into_iter()
        .filter(|p| p.active && p.auto_create && p.next_due_date.is_some_and(|d| d <= as_of))
        .collect())
}

/// Create one transaction per due pattern, dated `as_of`, through the
/// store's normal insert path (so balance effects apply), then advance
/// each pattern's cursor. Returns the number of transactions created.
///
/// The exclusive `&mut Store` borrow keeps two materialization passes
/// from interleaving; calling this twice only double-creates if the
/// advanced cursor is still on or before `as_of`.
pub fn materialize_due(store: &mut Store, as_of: NaiveDate, time: Option<String>) -> Result<usize> {
    let due = due_patterns(store, as_of)?;
    let mut created = 0;
    for pattern in due {
        let mut t = Transaction::new(pattern.kind, pattern.amount, as_of);
        t.category_id = pattern.category_id;
        t.subcategory_id = pattern.subcategory_id;
        t.account_id = pattern.account_id;
        t.description = pattern.description.clone();
        t.time = time.clone();
        t.recurring_id = Some(pattern.id);
        store.add_transaction(&t)?;

        if let Some(cursor) = pattern.next_due_date {
            let next = next_due_date(cursor, pattern.frequency, pattern.interval);
            store.set_next_due_date(pattern.id, next)?;
        }
        created += 1;
    }
    Ok(created)
}

/// Next cursor date for a pattern. Monthly uses a flat 30-day step and
/// Yearly a flat 365-day step rather than calendar arithmetic.
pub fn next_due_date(current: NaiveDate, frequency: Frequency, interval: i64) -> NaiveDate {
    let days = match frequency {
        Frequency::Daily => interval,
        Frequency::Weekly => 7 * interval,
        Frequency::Monthly => 30 * interval,
        Frequency::Yearly => 365 * interval,
        Frequency::Custom => interval,
    };
    current + Duration::days(days)
}
