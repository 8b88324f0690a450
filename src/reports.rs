// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Read-only aggregate queries over the store. Empty result sets yield
//! zero/empty values, never errors. Sums are accumulated as `Decimal`
//! in Rust so they stay exact.

use chrono::{Months, NaiveDate};
use rusqlite::params;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::error::Result;
use crate::models::{Transaction, TransactionType};
use crate::store::{self, Store};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub color: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct IncomeExpense {
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyTotals {
    /// YYYY-MM.
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
}

/// A transaction with its category and account names joined in.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionDetail {
    pub transaction: Transaction,
    pub category_name: Option<String>,
    pub account_name: Option<String>,
}

/// Optional exact-match filters for `search_transactions`; all present
/// filters are combined with AND.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionType>,
    pub category_id: Option<i64>,
    pub account_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Expense totals grouped by category over an inclusive date range,
/// largest first. Transactions without a category are excluded.
pub fn expense_by_category(
    store: &Store,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<CategoryTotal>> {
    let mut stmt = store.conn().prepare(
        "SELECT c.id, c.name, c.color, t.amount
         FROM transactions t
         JOIN categories c ON t.category_id = c.id
         WHERE t.transaction_type='Expense' AND t.date BETWEEN ?1 AND ?2",
    )?;
    let mut rows = stmt.query(params![start_date, end_date])?;
    let mut agg: HashMap<i64, CategoryTotal> = HashMap::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let name: String = r.get(1)?;
        let color: Option<String> = r.get(2)?;
        let amount: String = r.get(3)?;
        let amount = store::parse_amount(&amount)?;
        agg.entry(id)
            .or_insert_with(|| CategoryTotal {
                name,
                color: color.unwrap_or_default(),
                total: Decimal::ZERO,
            })
            .total += amount;
    }
    let mut out: Vec<CategoryTotal> = agg.into_values().collect();
    out.sort_by(|a, b| b.total.cmp(&a.total));
    Ok(out)
}

/// Total income and expense over an inclusive date range; both zero
/// when the range is empty.
pub fn income_vs_expense(
    store: &Store,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<IncomeExpense> {
    let mut stmt = store.conn().prepare(
        "SELECT transaction_type, amount FROM transactions WHERE date BETWEEN ?1 AND ?2",
    )?;
    let mut rows = stmt.query(params![start_date, end_date])?;
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    while let Some(r) = rows.next()? {
        let kind: String = r.get(0)?;
        let amount: String = r.get(1)?;
        let amount = store::parse_amount(&amount)?;
        match kind.as_str() {
            "Income" => income += amount,
            "Expense" => expense += amount,
            _ => {}
        }
    }
    Ok(IncomeExpense { income, expense })
}

/// Income/expense per calendar month for the last `months` months
/// ending at `today`, ascending by month.
pub fn monthly_trend(store: &Store, months: u32, today: NaiveDate) -> Result<Vec<MonthlyTotals>> {
    let cutoff = today
        .checked_sub_months(Months::new(months))
        .unwrap_or(today);
    let mut stmt = store.conn().prepare(
        "SELECT substr(date,1,7), transaction_type, amount FROM transactions WHERE date >= ?1",
    )?;
    let mut rows = stmt.query(params![cutoff])?;
    let mut agg: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    while let Some(r) = rows.next()? {
        let month: String = r.get(0)?;
        let kind: String = r.get(1)?;
        let amount: String = r.get(2)?;
        let amount = store::parse_amount(&amount)?;
        let entry = agg.entry(month).or_insert((Decimal::ZERO, Decimal::ZERO));
        match kind.as_str() {
            "Income" => entry.0 += amount,
            "Expense" => entry.1 += amount,
            _ => {}
        }
    }
    Ok(agg
        .into_iter()
        .map(|(month, (income, expense))| MonthlyTotals {
            month,
            income,
            expense,
        })
        .collect())
}

/// Substring search on description or tags, AND-combined with the
/// filter's exact matches; newest first. An empty query matches
/// everything.
pub fn search_transactions(
    store: &Store,
    query: &str,
    filter: &TransactionFilter,
) -> Result<Vec<TransactionDetail>> {
    let mut sql = String::from(
        "SELECT t.id, t.transaction_type, t.amount, t.category_id, t.subcategory_id, \
                t.account_id, t.to_account_id, t.date, t.time, t.description, \
                t.payment_method, t.tags, t.receipt_path, t.recurring_id, c.name, a.name
         FROM transactions t
         LEFT JOIN categories c ON t.category_id = c.id
         LEFT JOIN accounts a ON t.account_id = a.id
         WHERE 1=1",
    );
    let mut args: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    if !query.is_empty() {
        sql.push_str(" AND (t.description LIKE ? OR t.tags LIKE ?)");
        let pat = format!("%{}%", query);
        args.push(Box::new(pat.clone()));
        args.push(Box::new(pat));
    }
    if let Some(kind) = filter.kind {
        sql.push_str(" AND t.transaction_type = ?");
        args.push(Box::new(kind.as_str().to_string()));
    }
    if let Some(id) = filter.category_id {
        sql.push_str(" AND t.category_id = ?");
        args.push(Box::new(id));
    }
    if let Some(id) = filter.account_id {
        sql.push_str(" AND t.account_id = ?");
        args.push(Box::new(id));
    }
    if let Some(d) = filter.start_date {
        sql.push_str(" AND t.date >= ?");
        args.push(Box::new(d));
    }
    if let Some(d) = filter.end_date {
        sql.push_str(" AND t.date <= ?");
        args.push(Box::new(d));
    }
    sql.push_str(" ORDER BY t.date DESC, t.id DESC");

    let mut stmt = store.conn().prepare(&sql)?;
    let refs: Vec<&dyn rusqlite::ToSql> = args.iter().map(|a| a.as_ref()).collect();
    let mut rows = stmt.query(rusqlite::params_from_iter(refs))?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(TransactionDetail {
            transaction: store::transaction_from_row(r)?,
            category_name: r.get(14)?,
            account_name: r.get(15)?,
        });
    }
    Ok(out)
}
