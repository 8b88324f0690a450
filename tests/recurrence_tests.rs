// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use moneybook::models::{Account, AccountType, Frequency, RecurringTransaction, TransactionType};
use moneybook::recurrence::{due_patterns, materialize_due, next_due_date};
use moneybook::store::Store;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn pattern(account_id: i64) -> RecurringTransaction {
    RecurringTransaction {
        id: 0,
        kind: TransactionType::Expense,
        amount: dec("9.99"),
        category_id: None,
        subcategory_id: None,
        account_id: Some(account_id),
        description: "streaming".into(),
        frequency: Frequency::Monthly,
        interval: 1,
        start_date: Some(date("2024-01-01")),
        end_date: None,
        next_due_date: Some(date("2024-01-01")),
        auto_create: true,
        active: true,
    }
}

fn add_account(store: &Store) -> i64 {
    store
        .add_account(&Account::new("Checking", AccountType::Bank, dec("100.00")))
        .unwrap()
}

#[test]
fn monthly_due_pattern_materializes_once_per_cursor() {
    let mut store = Store::open_in_memory().unwrap();
    let account = add_account(&store);
    let mut p = pattern(account);
    p.id = store.add_recurring_transaction(&p).unwrap();

    let due = due_patterns(&store, date("2024-01-01")).unwrap();
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, p.id);

    let created = materialize_due(&mut store, date("2024-01-01"), None).unwrap();
    assert_eq!(created, 1);

    let txs = store.get_transactions(None, 0).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].recurring_id, Some(p.id));
    assert_eq!(txs[0].amount, dec("9.99"));
    assert_eq!(txs[0].date, date("2024-01-01"));

    // Flat 30-day step, not calendar months.
    let patterns = store.get_recurring_transactions().unwrap();
    assert_eq!(patterns[0].next_due_date, Some(date("2024-01-31")));

    // The advanced cursor is in the future, so a second pass is a no-op.
    let created = materialize_due(&mut store, date("2024-01-01"), None).unwrap();
    assert_eq!(created, 0);
    assert_eq!(store.get_transactions(None, 0).unwrap().len(), 1);
}

#[test]
fn materialized_expense_debits_the_account() {
    let mut store = Store::open_in_memory().unwrap();
    let account = add_account(&store);
    store.add_recurring_transaction(&pattern(account)).unwrap();

    materialize_due(&mut store, date("2024-01-05"), Some("09:00".into())).unwrap();

    let balance = store.get_account(account).unwrap().unwrap().current_balance;
    assert_eq!(balance, dec("90.01"));
    let txs = store.get_transactions(None, 0).unwrap();
    assert_eq!(txs[0].time.as_deref(), Some("09:00"));
    // Dated as of the run, not the cursor.
    assert_eq!(txs[0].date, date("2024-01-05"));
}

#[test]
fn future_and_manual_and_inactive_patterns_are_not_due() {
    let store = Store::open_in_memory().unwrap();

    let mut future = pattern(1);
    future.next_due_date = Some(date("2024-06-01"));
    store.add_recurring_transaction(&future).unwrap();

    let mut manual = pattern(1);
    manual.auto_create = false;
    store.add_recurring_transaction(&manual).unwrap();

    let mut inactive = pattern(1);
    inactive.active = false;
    store.add_recurring_transaction(&inactive).unwrap();

    let due = due_patterns(&store, date("2024-01-01")).unwrap();
    assert!(due.is_empty());
}

#[test]
fn next_due_date_uses_flat_day_steps() {
    let d = date("2024-01-01");
    assert_eq!(next_due_date(d, Frequency::Daily, 1), date("2024-01-02"));
    assert_eq!(next_due_date(d, Frequency::Daily, 3), date("2024-01-04"));
    assert_eq!(next_due_date(d, Frequency::Weekly, 1), date("2024-01-08"));
    assert_eq!(next_due_date(d, Frequency::Weekly, 2), date("2024-01-15"));
    assert_eq!(next_due_date(d, Frequency::Monthly, 1), date("2024-01-31"));
    assert_eq!(next_due_date(d, Frequency::Monthly, 2), date("2024-03-01"));
    assert_eq!(next_due_date(d, Frequency::Yearly, 1), date("2024-12-31"));
    assert_eq!(next_due_date(d, Frequency::Custom, 10), date("2024-01-11"));
}
