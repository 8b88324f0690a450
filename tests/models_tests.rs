// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use moneybook::models::{
    Account, AccountType, Budget, Category, CategoryType, Debt, DebtType, Frequency, Goal, Period,
    RecurringTransaction, Subcategory, Transaction, TransactionType,
};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn enum_string_forms_round_trip() {
    for kind in [
        TransactionType::Expense,
        TransactionType::Income,
        TransactionType::Transfer,
    ] {
        assert_eq!(kind.as_str().parse::<TransactionType>().unwrap(), kind);
    }
    for f in [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Yearly,
        Frequency::Custom,
    ] {
        assert_eq!(f.as_str().parse::<Frequency>().unwrap(), f);
    }
    for p in [Period::Weekly, Period::Monthly, Period::Yearly, Period::Custom] {
        assert_eq!(p.as_str().parse::<Period>().unwrap(), p);
    }
    for d in [DebtType::Borrowed, DebtType::Lent] {
        assert_eq!(d.as_str().parse::<DebtType>().unwrap(), d);
    }
    assert!("Rebate".parse::<TransactionType>().is_err());
}

#[test]
fn account_type_keeps_unknown_kinds_verbatim() {
    assert_eq!(AccountType::from("UPI".to_string()), AccountType::Upi);
    let custom = AccountType::from("Brokerage".to_string());
    assert_eq!(custom, AccountType::Other("Brokerage".to_string()));
    assert_eq!(custom.as_str(), "Brokerage");
}

#[test]
fn account_type_serializes_as_a_plain_string() {
    let account = Account::new("Wallet", AccountType::Upi, dec("10.00"));
    let json = serde_json::to_string(&account).unwrap();
    assert!(json.contains("\"kind\":\"UPI\""));
    let back: Account = serde_json::from_str(&json).unwrap();
    assert_eq!(back, account);
}

#[test]
fn transaction_json_round_trip_keeps_every_field() {
    let mut t = Transaction::new(
        TransactionType::Transfer,
        dec("300.00"),
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    );
    t.id = 7;
    t.account_id = Some(1);
    t.to_account_id = Some(2);
    t.time = Some("14:30".to_string());
    t.description = "move savings".to_string();
    t.tags = "internal,monthly".to_string();
    t.recurring_id = Some(3);

    let json = serde_json::to_string(&t).unwrap();
    let back: Transaction = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}

#[test]
fn category_and_subcategory_json_round_trip() {
    let cat = Category {
        id: 3,
        name: "Food & Dining".to_string(),
        kind: CategoryType::Expense,
        icon: "restaurant".to_string(),
        color: "#FF5722".to_string(),
    };
    let back: Category = serde_json::from_str(&serde_json::to_string(&cat).unwrap()).unwrap();
    assert_eq!(back, cat);

    let sub = Subcategory {
        id: 9,
        name: "Takeout".to_string(),
        category_id: Some(3),
    };
    let back: Subcategory = serde_json::from_str(&serde_json::to_string(&sub).unwrap()).unwrap();
    assert_eq!(back, sub);
}

#[test]
fn budget_json_round_trip() {
    let b = Budget {
        id: 4,
        category_id: Some(3),
        amount: dec("250.00"),
        period: Period::Monthly,
        start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
        end_date: NaiveDate::from_ymd_opt(2024, 3, 31),
        alert_percentage: dec("80"),
        spent: dec("75.50"),
    };
    let back: Budget = serde_json::from_str(&serde_json::to_string(&b).unwrap()).unwrap();
    assert_eq!(back, b);
}

#[test]
fn goal_json_round_trip() {
    let g = Goal {
        id: 2,
        name: "Emergency fund".to_string(),
        target_amount: dec("5000.00"),
        current_amount: dec("1250.00"),
        deadline: NaiveDate::from_ymd_opt(2024, 12, 31),
        icon: "flag".to_string(),
        color: "#4CAF50".to_string(),
        notes: "three months of rent".to_string(),
        completed: false,
    };
    let back: Goal = serde_json::from_str(&serde_json::to_string(&g).unwrap()).unwrap();
    assert_eq!(back, g);
}

#[test]
fn debt_json_round_trip() {
    let d = Debt {
        id: 6,
        kind: DebtType::Lent,
        person_name: "Asha".to_string(),
        amount: dec("400.00"),
        amount_paid: dec("100.00"),
        date: NaiveDate::from_ymd_opt(2024, 1, 15),
        due_date: NaiveDate::from_ymd_opt(2024, 6, 15),
        interest_rate: dec("2.5"),
        notes: "split trip costs".to_string(),
        settled: false,
    };
    let back: Debt = serde_json::from_str(&serde_json::to_string(&d).unwrap()).unwrap();
    assert_eq!(back, d);
}

#[test]
fn recurring_pattern_json_round_trip() {
    let p = RecurringTransaction {
        id: 5,
        kind: TransactionType::Expense,
        amount: dec("9.99"),
        category_id: Some(3),
        subcategory_id: None,
        account_id: Some(1),
        description: "streaming".to_string(),
        frequency: Frequency::Monthly,
        interval: 1,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        end_date: None,
        next_due_date: NaiveDate::from_ymd_opt(2024, 1, 31),
        auto_create: true,
        active: true,
    };
    let back: RecurringTransaction =
        serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
    assert_eq!(back, p);
}

#[test]
fn new_account_starts_at_its_initial_balance() {
    let account = Account::new("Checking", AccountType::Bank, dec("250.00"));
    assert_eq!(account.current_balance, dec("250.00"));
    assert_eq!(account.currency, "USD");
    assert!(!account.is_credit_card);
}

#[test]
fn new_transaction_defaults_are_empty() {
    let t = Transaction::new(
        TransactionType::Expense,
        dec("5.00"),
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    );
    assert_eq!(t.id, 0);
    assert!(t.account_id.is_none());
    assert!(t.recurring_id.is_none());
    assert!(t.description.is_empty());
}

#[test]
fn budget_percentages_and_alert_threshold() {
    let mut b = Budget {
        id: 0,
        category_id: None,
        amount: dec("200.00"),
        period: Period::Monthly,
        start_date: None,
        end_date: None,
        alert_percentage: dec("80"),
        spent: dec("150.00"),
    };
    assert_eq!(b.percentage_used(), dec("75"));
    assert!(!b.is_over_budget());
    assert!(!b.should_alert());

    b.spent = dec("160.00");
    assert!(b.should_alert());

    b.spent = dec("250.00");
    assert!(b.is_over_budget());

    b.amount = Decimal::ZERO;
    assert_eq!(b.percentage_used(), Decimal::ZERO);
}

#[test]
fn goal_progress_never_reports_negative_remaining() {
    let mut g = Goal {
        id: 0,
        name: "Emergency fund".to_string(),
        target_amount: dec("1000.00"),
        current_amount: dec("250.00"),
        deadline: None,
        icon: String::new(),
        color: String::new(),
        notes: String::new(),
        completed: false,
    };
    assert_eq!(g.percentage_complete(), dec("25"));
    assert_eq!(g.remaining_amount(), dec("750.00"));

    g.current_amount = dec("1100.00");
    assert_eq!(g.remaining_amount(), Decimal::ZERO);

    g.target_amount = Decimal::ZERO;
    assert_eq!(g.percentage_complete(), Decimal::ZERO);
}

#[test]
fn debt_progress_tracks_amount_paid() {
    let d = Debt {
        id: 0,
        kind: DebtType::Lent,
        person_name: "Asha".to_string(),
        amount: dec("400.00"),
        amount_paid: dec("100.00"),
        date: None,
        due_date: None,
        interest_rate: Decimal::ZERO,
        notes: String::new(),
        settled: false,
    };
    assert_eq!(d.remaining_amount(), dec("300.00"));
    assert_eq!(d.percentage_paid(), dec("25"));
}
