// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Expense,
    Income,
    Transfer,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "Expense",
            TransactionType::Income => "Income",
            TransactionType::Transfer => "Transfer",
        }
    }
}

impl FromStr for TransactionType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Expense" => Ok(TransactionType::Expense),
            "Income" => Ok(TransactionType::Income),
            "Transfer" => Ok(TransactionType::Transfer),
            other => Err(StoreError::corrupt(format!(
                "unknown transaction type '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryType {
    Expense,
    Income,
}

impl CategoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Expense => "Expense",
            CategoryType::Income => "Income",
        }
    }
}

impl FromStr for CategoryType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Expense" => Ok(CategoryType::Expense),
            "Income" => Ok(CategoryType::Income),
            other => Err(StoreError::corrupt(format!(
                "unknown category type '{}'",
                other
            ))),
        }
    }
}

/// Account kinds are open-ended; anything outside the common set is kept
/// verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum AccountType {
    Cash,
    Bank,
    Card,
    Upi,
    Wallet,
    Other(String),
}

impl AccountType {
    pub fn as_str(&self) -> &str {
        match self {
            AccountType::Cash => "Cash",
            AccountType::Bank => "Bank",
            AccountType::Card => "Card",
            AccountType::Upi => "UPI",
            AccountType::Wallet => "Wallet",
            AccountType::Other(s) => s,
        }
    }
}

impl From<String> for AccountType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Cash" => AccountType::Cash,
            "Bank" => AccountType::Bank,
            "Card" => AccountType::Card,
            "UPI" => AccountType::Upi,
            "Wallet" => AccountType::Wallet,
            _ => AccountType::Other(s),
        }
    }
}

impl From<AccountType> for String {
    fn from(t: AccountType) -> String {
        t.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtType {
    /// Money owed to someone else (liability).
    Borrowed,
    /// Money someone else owes us (receivable).
    Lent,
}

impl DebtType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtType::Borrowed => "Borrowed",
            DebtType::Lent => "Lent",
        }
    }
}

impl FromStr for DebtType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Borrowed" => Ok(DebtType::Borrowed),
            "Lent" => Ok(DebtType::Lent),
            other => Err(StoreError::corrupt(format!("unknown debt type '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Custom,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
            Frequency::Custom => "Custom",
        }
    }
}

impl FromStr for Frequency {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Daily" => Ok(Frequency::Daily),
            "Weekly" => Ok(Frequency::Weekly),
            "Monthly" => Ok(Frequency::Monthly),
            "Yearly" => Ok(Frequency::Yearly),
            "Custom" => Ok(Frequency::Custom),
            other => Err(StoreError::corrupt(format!("unknown frequency '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Weekly,
    Monthly,
    Yearly,
    Custom,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
            Period::Yearly => "Yearly",
            Period::Custom => "Custom",
        }
    }
}

impl FromStr for Period {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Weekly" => Ok(Period::Weekly),
            "Monthly" => Ok(Period::Monthly),
            "Yearly" => Ok(Period::Yearly),
            "Custom" => Ok(Period::Custom),
            other => Err(StoreError::corrupt(format!("unknown period '{}'", other))),
        }
    }
}

/// A financial account (Cash, Bank, Card, UPI, Wallet, ...).
///
/// `current_balance` is maintained incrementally by the store's
/// transaction write path: it equals `initial_balance` plus the signed
/// effects of all still-existing transactions on the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub kind: AccountType,
    pub initial_balance: Decimal,
    pub current_balance: Decimal,
    pub currency: String,
    pub icon: String,
    pub color: String,
    pub is_credit_card: bool,
    pub credit_limit: Decimal,
    pub due_date: Option<NaiveDate>,
    pub interest_rate: Decimal,
    pub notes: String,
}

impl Account {
    pub fn new(name: &str, kind: AccountType, initial_balance: Decimal) -> Self {
        Account {
            id: 0,
            name: name.to_string(),
            kind,
            initial_balance,
            current_balance: initial_balance,
            currency: "USD".to_string(),
            icon: "wallet".to_string(),
            color: "#2196F3".to_string(),
            is_credit_card: false,
            credit_limit: Decimal::ZERO,
            due_date: None,
            interest_rate: Decimal::ZERO,
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub kind: CategoryType,
    pub icon: String,
    pub color: String,
}

/// Weak child of a category; no cascade is enforced on either side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: i64,
    pub name: String,
    pub category_id: Option<i64>,
}

/// A single Expense, Income, or Transfer. Transfers carry both
/// `account_id` (source) and `to_account_id` (destination).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub kind: TransactionType,
    pub amount: Decimal,
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub account_id: Option<i64>,
    pub to_account_id: Option<i64>,
    pub date: NaiveDate,
    /// HH:MM, if recorded.
    pub time: Option<String>,
    pub description: String,
    pub payment_method: String,
    /// Comma-separated free-text tags.
    pub tags: String,
    pub receipt_path: Option<String>,
    /// Back-reference to the recurring pattern that generated this row.
    pub recurring_id: Option<i64>,
}

impl Transaction {
    pub fn new(kind: TransactionType, amount: Decimal, date: NaiveDate) -> Self {
        Transaction {
            id: 0,
            kind,
            amount,
            category_id: None,
            subcategory_id: None,
            account_id: None,
            to_account_id: None,
            date,
            time: None,
            description: String::new(),
            payment_method: String::new(),
            tags: String::new(),
            receipt_path: None,
            recurring_id: None,
        }
    }
}

/// Spending ceiling for one category over one period. `spent` is
/// recomputed on demand by the store, never maintained incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category_id: Option<i64>,
    pub amount: Decimal,
    pub period: Period,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub alert_percentage: Decimal,
    pub spent: Decimal,
}

impl Budget {
    pub fn percentage_used(&self) -> Decimal {
        if self.amount.is_zero() {
            return Decimal::ZERO;
        }
        self.spent / self.amount * Decimal::ONE_HUNDRED
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.amount
    }

    pub fn should_alert(&self) -> bool {
        self.percentage_used() >= self.alert_percentage
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: Option<NaiveDate>,
    pub icon: String,
    pub color: String,
    pub notes: String,
    pub completed: bool,
}

impl Goal {
    pub fn percentage_complete(&self) -> Decimal {
        if self.target_amount.is_zero() {
            return Decimal::ZERO;
        }
        self.current_amount / self.target_amount * Decimal::ONE_HUNDRED
    }

    pub fn remaining_amount(&self) -> Decimal {
        (self.target_amount - self.current_amount).max(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: i64,
    pub kind: DebtType,
    pub person_name: String,
    pub amount: Decimal,
    pub amount_paid: Decimal,
    pub date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub interest_rate: Decimal,
    pub notes: String,
    pub settled: bool,
}

impl Debt {
    pub fn remaining_amount(&self) -> Decimal {
        (self.amount - self.amount_paid).max(Decimal::ZERO)
    }

    pub fn percentage_paid(&self) -> Decimal {
        if self.amount.is_zero() {
            return Decimal::ZERO;
        }
        self.amount_paid / self.amount * Decimal::ONE_HUNDRED
    }
}

/// Template from which concrete transactions are generated on a schedule.
/// `next_due_date` is the mutable cursor advanced on every materialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringTransaction {
    pub id: i64,
    pub kind: TransactionType,
    pub amount: Decimal,
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub account_id: Option<i64>,
    pub description: String,
    pub frequency: Frequency,
    /// Multiplier on the frequency step, mainly for Custom.
    pub interval: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub next_due_date: Option<NaiveDate>,
    pub auto_create: bool,
    pub active: bool,
}
