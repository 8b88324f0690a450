// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use moneybook::error::StoreError;
use moneybook::models::{
    Account, AccountType, Budget, Category, CategoryType, Period, Transaction, TransactionType,
};
use moneybook::store::Store;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn add_account(store: &Store, name: &str, balance: &str) -> i64 {
    store
        .add_account(&Account::new(name, AccountType::Bank, dec(balance)))
        .unwrap()
}

#[test]
fn expense_edit_delete_balance_cycle() {
    let mut store = Store::open_in_memory().unwrap();
    let a = add_account(&store, "A", "1000.00");

    let mut t = Transaction::new(TransactionType::Expense, dec("50.00"), date("2024-03-01"));
    t.account_id = Some(a);
    let id = store.add_transaction(&t).unwrap();
    assert_eq!(
        store.get_account(a).unwrap().unwrap().current_balance,
        dec("950.00")
    );

    let mut edited = store.get_transaction(id).unwrap().unwrap();
    edited.amount = dec("75.00");
    store.update_transaction(&edited).unwrap();
    assert_eq!(
        store.get_account(a).unwrap().unwrap().current_balance,
        dec("925.00")
    );

    store.delete_transaction(id).unwrap();
    assert_eq!(
        store.get_account(a).unwrap().unwrap().current_balance,
        dec("1000.00")
    );
    assert!(store.get_transaction(id).unwrap().is_none());
}

#[test]
fn income_credits_account() {
    let mut store = Store::open_in_memory().unwrap();
    let a = add_account(&store, "A", "100.00");

    let mut t = Transaction::new(TransactionType::Income, dec("2000.00"), date("2024-03-05"));
    t.account_id = Some(a);
    store.add_transaction(&t).unwrap();
    assert_eq!(
        store.get_account(a).unwrap().unwrap().current_balance,
        dec("2100.00")
    );
}

#[test]
fn transfer_moves_between_accounts() {
    let mut store = Store::open_in_memory().unwrap();
    let a = add_account(&store, "A", "1000.00");
    let b = add_account(&store, "B", "200.00");

    let mut t = Transaction::new(TransactionType::Transfer, dec("300.00"), date("2024-03-01"));
    t.account_id = Some(a);
    t.to_account_id = Some(b);
    store.add_transaction(&t).unwrap();

    assert_eq!(
        store.get_account(a).unwrap().unwrap().current_balance,
        dec("700.00")
    );
    assert_eq!(
        store.get_account(b).unwrap().unwrap().current_balance,
        dec("500.00")
    );
}

#[test]
fn transfer_edit_and_delete_leave_balances_untouched() {
    let mut store = Store::open_in_memory().unwrap();
    let a = add_account(&store, "A", "1000.00");
    let b = add_account(&store, "B", "200.00");

    let mut t = Transaction::new(TransactionType::Transfer, dec("300.00"), date("2024-03-01"));
    t.account_id = Some(a);
    t.to_account_id = Some(b);
    let id = store.add_transaction(&t).unwrap();

    let mut edited = store.get_transaction(id).unwrap().unwrap();
    edited.amount = dec("999.00");
    store.update_transaction(&edited).unwrap();
    // The transfer's prior balance impact stays in place on edit.
    assert_eq!(
        store.get_account(a).unwrap().unwrap().current_balance,
        dec("700.00")
    );
    assert_eq!(
        store.get_account(b).unwrap().unwrap().current_balance,
        dec("500.00")
    );

    store.delete_transaction(id).unwrap();
    // And on delete.
    assert_eq!(
        store.get_account(a).unwrap().unwrap().current_balance,
        dec("700.00")
    );
    assert_eq!(
        store.get_account(b).unwrap().unwrap().current_balance,
        dec("500.00")
    );
}

#[test]
fn balance_matches_initial_plus_surviving_effects() {
    let mut store = Store::open_in_memory().unwrap();
    let a = add_account(&store, "A", "500.00");

    let mut ids = Vec::new();
    for (kind, amount) in [
        (TransactionType::Expense, "10.25"),
        (TransactionType::Income, "99.75"),
        (TransactionType::Expense, "40.00"),
    ] {
        let mut t = Transaction::new(kind, dec(amount), date("2024-02-01"));
        t.account_id = Some(a);
        ids.push(store.add_transaction(&t).unwrap());
    }
    // 500 - 10.25 + 99.75 - 40
    assert_eq!(
        store.get_account(a).unwrap().unwrap().current_balance,
        dec("549.50")
    );

    store.delete_transaction(ids[1]).unwrap();
    assert_eq!(
        store.get_account(a).unwrap().unwrap().current_balance,
        dec("449.75")
    );
}

#[test]
fn add_transaction_validates_inputs() {
    let mut store = Store::open_in_memory().unwrap();
    let a = add_account(&store, "A", "100");

    let mut negative = Transaction::new(TransactionType::Expense, dec("-5"), date("2024-01-01"));
    negative.account_id = Some(a);
    assert!(matches!(
        store.add_transaction(&negative),
        Err(StoreError::Validation(_))
    ));

    let no_account = Transaction::new(TransactionType::Expense, dec("5"), date("2024-01-01"));
    assert!(matches!(
        store.add_transaction(&no_account),
        Err(StoreError::Validation(_))
    ));

    let mut half_transfer =
        Transaction::new(TransactionType::Transfer, dec("5"), date("2024-01-01"));
    half_transfer.account_id = Some(a);
    assert!(matches!(
        store.add_transaction(&half_transfer),
        Err(StoreError::Validation(_))
    ));

    // Nothing slipped into the table or the balance.
    assert_eq!(store.get_transactions(None, 0).unwrap().len(), 0);
    assert_eq!(
        store.get_account(a).unwrap().unwrap().current_balance,
        dec("100")
    );
}

#[test]
fn update_missing_transaction_is_not_found() {
    let mut store = Store::open_in_memory().unwrap();
    let a = add_account(&store, "A", "100");
    let mut t = Transaction::new(TransactionType::Expense, dec("5"), date("2024-01-01"));
    t.id = 9999;
    t.account_id = Some(a);
    assert!(matches!(
        store.update_transaction(&t),
        Err(StoreError::NotFound { .. })
    ));
}

#[test]
fn delete_missing_transaction_is_noop() {
    let mut store = Store::open_in_memory().unwrap();
    store.delete_transaction(9999).unwrap();
}

#[test]
fn total_balance_sums_accounts_and_defaults_to_zero() {
    let mut store = Store::open_in_memory().unwrap();
    // Remove the seeded Cash account to get an empty set.
    for a in store.get_accounts().unwrap() {
        store.delete_account(a.id).unwrap();
    }
    assert_eq!(store.get_total_balance().unwrap(), Decimal::ZERO);

    add_account(&store, "A", "10.50");
    add_account(&store, "B", "4.50");
    assert_eq!(store.get_total_balance().unwrap(), dec("15.00"));

    let b = store.get_accounts().unwrap()[1].id;
    store.update_account_balance(b, dec("-2.25")).unwrap();
    assert_eq!(store.get_total_balance().unwrap(), dec("12.75"));
}

#[test]
fn seeding_is_idempotent_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moneybook.sqlite");

    let counts = |store: &Store| {
        let cats: i64 = store
            .conn()
            .query_row("SELECT COUNT(*) FROM categories", [], |r| r.get(0))
            .unwrap();
        let accts: i64 = store
            .conn()
            .query_row("SELECT COUNT(*) FROM accounts", [], |r| r.get(0))
            .unwrap();
        let settings: i64 = store
            .conn()
            .query_row("SELECT COUNT(*) FROM settings", [], |r| r.get(0))
            .unwrap();
        (cats, accts, settings)
    };

    let store = Store::open(&path).unwrap();
    assert_eq!(counts(&store), (15, 1, 7));
    drop(store);

    let store = Store::open(&path).unwrap();
    assert_eq!(counts(&store), (15, 1, 7));
}

#[test]
fn seeded_defaults_have_expected_shape() {
    let store = Store::open_in_memory().unwrap();
    let expense = store
        .get_categories(Some(CategoryType::Expense))
        .unwrap();
    let income = store.get_categories(Some(CategoryType::Income)).unwrap();
    assert_eq!(expense.len(), 10);
    assert_eq!(income.len(), 5);
    assert!(expense.iter().any(|c| c.name == "Food & Dining"));
    assert!(income.iter().any(|c| c.name == "Salary"));

    let accounts = store.get_accounts().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].name, "Cash");
    assert_eq!(accounts[0].current_balance, Decimal::ZERO);

    assert_eq!(store.get_setting("currency").unwrap().unwrap(), "USD");
    assert_eq!(
        store.get_setting("financial_month_start").unwrap().unwrap(),
        "1"
    );
}

#[test]
fn settings_upsert() {
    let store = Store::open_in_memory().unwrap();
    assert!(store.get_setting("no_such_key").unwrap().is_none());
    store.set_setting("theme", "Dark").unwrap();
    assert_eq!(store.get_setting("theme").unwrap().unwrap(), "Dark");
    store.set_setting("theme", "Light").unwrap();
    assert_eq!(store.get_setting("theme").unwrap().unwrap(), "Light");
}

#[test]
fn budget_spent_recomputed_for_range_only() {
    let mut store = Store::open_in_memory().unwrap();
    let a = add_account(&store, "A", "1000");
    let cat = store
        .add_category(&Category {
            id: 0,
            name: "Groceries".to_string(),
            kind: CategoryType::Expense,
            icon: "cart".to_string(),
            color: "#E91E63".to_string(),
        })
        .unwrap();

    let budget = Budget {
        id: 0,
        category_id: Some(cat),
        amount: dec("200.00"),
        period: Period::Monthly,
        start_date: Some(date("2024-03-01")),
        end_date: Some(date("2024-03-31")),
        alert_percentage: dec("80"),
        spent: Decimal::ZERO,
    };
    store.add_budget(&budget).unwrap();

    for (amount, day) in [("30.00", "2024-03-05"), ("45.50", "2024-03-20")] {
        let mut t = Transaction::new(TransactionType::Expense, dec(amount), date(day));
        t.account_id = Some(a);
        t.category_id = Some(cat);
        store.add_transaction(&t).unwrap();
    }
    // Outside the period; must not count.
    let mut outside = Transaction::new(TransactionType::Expense, dec("99.99"), date("2024-04-02"));
    outside.account_id = Some(a);
    outside.category_id = Some(cat);
    store.add_transaction(&outside).unwrap();

    store
        .update_budget_spent(cat, date("2024-03-01"), date("2024-03-31"))
        .unwrap();

    let budgets = store.get_budgets().unwrap();
    let row = budgets
        .iter()
        .find(|b| b.budget.category_id == Some(cat))
        .unwrap();
    assert_eq!(row.budget.spent, dec("75.50"));
    assert_eq!(row.category_name.as_deref(), Some("Groceries"));
}

#[test]
fn budget_spent_overwrites_every_budget_sharing_the_category() {
    let mut store = Store::open_in_memory().unwrap();
    let a = add_account(&store, "A", "1000");
    let cat = store
        .add_category(&Category {
            id: 0,
            name: "Dining".to_string(),
            kind: CategoryType::Expense,
            icon: "restaurant".to_string(),
            color: "#FF5722".to_string(),
        })
        .unwrap();

    for (from, to) in [("2024-03-01", "2024-03-31"), ("2024-04-01", "2024-04-30")] {
        store
            .add_budget(&Budget {
                id: 0,
                category_id: Some(cat),
                amount: dec("100"),
                period: Period::Monthly,
                start_date: Some(date(from)),
                end_date: Some(date(to)),
                alert_percentage: dec("80"),
                spent: Decimal::ZERO,
            })
            .unwrap();
    }

    let mut t = Transaction::new(TransactionType::Expense, dec("60.00"), date("2024-03-10"));
    t.account_id = Some(a);
    t.category_id = Some(cat);
    store.add_transaction(&t).unwrap();

    store
        .update_budget_spent(cat, date("2024-03-01"), date("2024-03-31"))
        .unwrap();

    // Both rows get the March figure; the April budget is not spared.
    let spents: Vec<Decimal> = store
        .get_budgets()
        .unwrap()
        .iter()
        .filter(|b| b.budget.category_id == Some(cat))
        .map(|b| b.budget.spent)
        .collect();
    assert_eq!(spents, vec![dec("60.00"), dec("60.00")]);
}

#[test]
fn transactions_list_newest_first_with_limit() {
    let mut store = Store::open_in_memory().unwrap();
    let a = add_account(&store, "A", "1000");
    for day in ["2024-01-01", "2024-01-02", "2024-01-03"] {
        let mut t = Transaction::new(TransactionType::Expense, dec("1"), date(day));
        t.account_id = Some(a);
        store.add_transaction(&t).unwrap();
    }
    let rows = store.get_transactions(Some(2), 0).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, date("2024-01-03"));
    assert_eq!(rows[1].date, date("2024-01-02"));

    let offset = store.get_transactions(Some(2), 2).unwrap();
    assert_eq!(offset.len(), 1);
    assert_eq!(offset[0].date, date("2024-01-01"));

    // An offset without a limit still skips rows.
    let unbounded = store.get_transactions(None, 1).unwrap();
    assert_eq!(unbounded.len(), 2);
    assert_eq!(unbounded[0].date, date("2024-01-02"));
}

#[test]
fn subcategories_attach_to_category() {
    let store = Store::open_in_memory().unwrap();
    let cat = store
        .add_category(&Category {
            id: 0,
            name: "Transport".to_string(),
            kind: CategoryType::Expense,
            icon: "car".to_string(),
            color: "#9C27B0".to_string(),
        })
        .unwrap();
    let sub = store
        .add_subcategory(&moneybook::models::Subcategory {
            id: 0,
            name: "Fuel".to_string(),
            category_id: Some(cat),
        })
        .unwrap();
    let subs = store.get_subcategories(cat).unwrap();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].name, "Fuel");
    store.delete_subcategory(sub).unwrap();
    assert!(store.get_subcategories(cat).unwrap().is_empty());
}
