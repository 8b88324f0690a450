// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Relational store for all entities and the single authority for
//! account balance mutation. Every compound write (row change plus
//! balance adjustment) runs inside one SQL transaction.

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

use crate::db;
use crate::error::{Result, StoreError};
use crate::models::{
    Account, Budget, Category, CategoryType, Debt, Goal, RecurringTransaction, Subcategory,
    Transaction, TransactionType,
};

const TX_COLS: &str = "id, transaction_type, amount, category_id, subcategory_id, account_id, \
     to_account_id, date, time, description, payment_method, tags, receipt_path, recurring_id";

const ACCOUNT_COLS: &str = "id, name, account_type, initial_balance, current_balance, currency, \
     icon, color, is_credit_card, credit_limit, due_date, interest_rate, notes";

const RECURRING_COLS: &str = "id, transaction_type, amount, category_id, subcategory_id, \
     account_id, description, frequency, custom_interval, start_date, end_date, next_due_date, \
     auto_create, active";

/// A budget joined with its category's display fields, as the alert and
/// listing surfaces consume it.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BudgetWithCategory {
    pub budget: Budget,
    pub category_name: Option<String>,
    pub category_color: Option<String>,
}

pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    /// Open (or create) the store at `path`, creating the schema and
    /// seeding default data when the relevant tables are empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        db::init_schema(&conn)?;
        db::seed_defaults(&conn)?;
        Ok(Store {
            conn,
            path: Some(path.as_ref().to_path_buf()),
        })
    }

    /// In-memory store, mainly for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        db::init_schema(&conn)?;
        db::seed_defaults(&conn)?;
        Ok(Store { conn, path: None })
    }

    /// Location of the backing file, if file-backed. Exposed so backup
    /// tooling can copy the store wholesale.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // ---- transactions ----

    /// Insert a transaction and apply its signed balance effect to the
    /// implicated account(s), atomically.
    pub fn add_transaction(&mut self, t: &Transaction) -> Result<i64> {
        validate_transaction(t)?;
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO transactions(transaction_type, amount, category_id, subcategory_id, \
             account_id, to_account_id, date, time, description, payment_method, tags, \
             receipt_path, recurring_id)
             VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13)",
            params![
                t.kind.as_str(),
                t.amount.to_string(),
                t.category_id,
                t.subcategory_id,
                t.account_id,
                t.to_account_id,
                t.date,
                t.time,
                t.description,
                t.payment_method,
                t.tags,
                t.receipt_path,
                t.recurring_id,
            ],
        )?;
        let id = tx.last_insert_rowid();
        apply_effect(&tx, t)?;
        tx.commit()?;
        Ok(id)
    }

    pub fn get_transaction(&self, id: i64) -> Result<Option<Transaction>> {
        let sql = format!("SELECT {} FROM transactions WHERE id=?1", TX_COLS);
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(r) => Ok(Some(transaction_from_row(r)?)),
            None => Ok(None),
        }
    }

    /// All transactions, newest first.
    pub fn get_transactions(&self, limit: Option<usize>, offset: usize) -> Result<Vec<Transaction>> {
        let mut sql = format!(
            "SELECT {} FROM transactions ORDER BY date DESC, id DESC",
            TX_COLS
        );
        if limit.is_some() || offset > 0 {
            sql.push_str(" LIMIT ?1 OFFSET ?2");
        }
        let mut stmt = self.conn.prepare(&sql)?;
        // LIMIT -1 means unbounded, so a bare offset still applies.
        let mut rows = match (limit, offset) {
            (None, 0) => stmt.query([])?,
            (n, o) => stmt.query(params![n.map_or(-1, |n| n as i64), o as i64])?,
        };
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(transaction_from_row(r)?);
        }
        Ok(out)
    }

    /// Replace the row by id, reversing the prior balance effect and
    /// applying the new one. Only Expense and Income effects are
    /// reversed/reapplied; editing a Transfer leaves its prior balance
    /// impact in place.
    pub fn update_transaction(&mut self, t: &Transaction) -> Result<()> {
        validate_transaction(t)?;
        let old = self
            .get_transaction(t.id)?
            .ok_or_else(|| StoreError::not_found("transaction", t.id))?;
        let tx = self.conn.transaction()?;
        reverse_effect(&tx, &old)?;
        tx.execute(
            "UPDATE transactions
             SET transaction_type=?1, amount=?2, category_id=?3, subcategory_id=?4,
                 account_id=?5, to_account_id=?6, date=?7, time=?8, description=?9,
                 payment_method=?10, tags=?11, receipt_path=?12
             WHERE id=?13",
            params![
                t.kind.as_str(),
                t.amount.to_string(),
                t.category_id,
                t.subcategory_id,
                t.account_id,
                t.to_account_id,
                t.date,
                t.time,
                t.description,
                t.payment_method,
                t.tags,
                t.receipt_path,
                t.id,
            ],
        )?;
        forward_effect_non_transfer(&tx, t)?;
        tx.commit()?;
        Ok(())
    }

    /// Remove the row by id, reversing its Expense/Income balance
    /// effect. A missing id is a no-op.
    pub fn delete_transaction(&mut self, id: i64) -> Result<()> {
        let Some(old) = self.get_transaction(id)? else {
            return Ok(());
        };
        let tx = self.conn.transaction()?;
        reverse_effect(&tx, &old)?;
        tx.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        tx.commit()?;
        Ok(())
    }

    // ---- accounts ----

    pub fn add_account(&self, a: &Account) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO accounts(name, account_type, initial_balance, current_balance, currency, \
             icon, color, is_credit_card, credit_limit, due_date, interest_rate, notes)
             VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12)",
            params![
                a.name,
                a.kind.as_str(),
                a.initial_balance.to_string(),
                a.current_balance.to_string(),
                a.currency,
                a.icon,
                a.color,
                a.is_credit_card,
                a.credit_limit.to_string(),
                a.due_date,
                a.interest_rate.to_string(),
                a.notes,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_accounts(&self) -> Result<Vec<Account>> {
        let sql = format!("SELECT {} FROM accounts ORDER BY id", ACCOUNT_COLS);
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(account_from_row(r)?);
        }
        Ok(out)
    }

    pub fn get_account(&self, id: i64) -> Result<Option<Account>> {
        let sql = format!("SELECT {} FROM accounts WHERE id=?1", ACCOUNT_COLS);
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(r) => Ok(Some(account_from_row(r)?)),
            None => Ok(None),
        }
    }

    pub fn update_account(&self, a: &Account) -> Result<()> {
        self.conn.execute(
            "UPDATE accounts
             SET name=?1, account_type=?2, initial_balance=?3, current_balance=?4, currency=?5,
                 icon=?6, color=?7, is_credit_card=?8, credit_limit=?9, due_date=?10,
                 interest_rate=?11, notes=?12
             WHERE id=?13",
            params![
                a.name,
                a.kind.as_str(),
                a.initial_balance.to_string(),
                a.current_balance.to_string(),
                a.currency,
                a.icon,
                a.color,
                a.is_credit_card,
                a.credit_limit.to_string(),
                a.due_date,
                a.interest_rate.to_string(),
                a.notes,
                a.id,
            ],
        )?;
        Ok(())
    }

    pub fn delete_account(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM accounts WHERE id=?1", params![id])?;
        Ok(())
    }

    /// Add `delta` to an account's current balance. Used internally by
    /// the transaction write path; exposed because the recurrence flow
    /// and presentation layer reuse it.
    pub fn update_account_balance(&mut self, account_id: i64, delta: Decimal) -> Result<()> {
        let tx = self.conn.transaction()?;
        adjust_balance(&tx, account_id, delta)?;
        tx.commit()?;
        Ok(())
    }

    /// Sum of current balances across all accounts; zero for an empty
    /// account set.
    pub fn get_total_balance(&self) -> Result<Decimal> {
        let mut stmt = self.conn.prepare("SELECT current_balance FROM accounts")?;
        let mut rows = stmt.query([])?;
        let mut total = Decimal::ZERO;
        while let Some(r) = rows.next()? {
            let s: String = r.get(0)?;
            total += parse_amount(&s)?;
        }
        Ok(total)
    }

    // ---- categories ----

    pub fn add_category(&self, c: &Category) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO categories(name, category_type, icon, color) VALUES (?1,?2,?3,?4)",
            params![c.name, c.kind.as_str(), c.icon, c.color],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_categories(&self, kind: Option<CategoryType>) -> Result<Vec<Category>> {
        let mut out = Vec::new();
        match kind {
            Some(k) => {
                let mut stmt = self.conn.prepare(
                    "SELECT id, name, category_type, icon, color FROM categories \
                     WHERE category_type=?1 ORDER BY name",
                )?;
                let mut rows = stmt.query(params![k.as_str()])?;
                while let Some(r) = rows.next()? {
                    out.push(category_from_row(r)?);
                }
            }
            None => {
                let mut stmt = self.conn.prepare(
                    "SELECT id, name, category_type, icon, color FROM categories \
                     ORDER BY category_type, name",
                )?;
                let mut rows = stmt.query([])?;
                while let Some(r) = rows.next()? {
                    out.push(category_from_row(r)?);
                }
            }
        }
        Ok(out)
    }

    pub fn update_category(&self, c: &Category) -> Result<()> {
        self.conn.execute(
            "UPDATE categories SET name=?1, category_type=?2, icon=?3, color=?4 WHERE id=?5",
            params![c.name, c.kind.as_str(), c.icon, c.color, c.id],
        )?;
        Ok(())
    }

    pub fn delete_category(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM categories WHERE id=?1", params![id])?;
        Ok(())
    }

    // ---- subcategories ----

    pub fn add_subcategory(&self, s: &Subcategory) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO subcategories(name, category_id) VALUES (?1,?2)",
            params![s.name, s.category_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_subcategories(&self, category_id: i64) -> Result<Vec<Subcategory>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, category_id FROM subcategories WHERE category_id=?1 ORDER BY name",
        )?;
        let mut rows = stmt.query(params![category_id])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(Subcategory {
                id: r.get(0)?,
                name: r.get(1)?,
                category_id: r.get(2)?,
            });
        }
        Ok(out)
    }

    pub fn delete_subcategory(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM subcategories WHERE id=?1", params![id])?;
        Ok(())
    }

    // ---- budgets ----

    pub fn add_budget(&self, b: &Budget) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO budgets(category_id, amount, period, start_date, end_date, \
             alert_percentage, spent)
             VALUES (?1,?2,?3,?4,?5,?6,?7)",
            params![
                b.category_id,
                b.amount.to_string(),
                b.period.as_str(),
                b.start_date,
                b.end_date,
                b.alert_percentage.to_string(),
                b.spent.to_string(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_budgets(&self) -> Result<Vec<BudgetWithCategory>> {
        let mut stmt = self.conn.prepare(
            "SELECT b.id, b.category_id, b.amount, b.period, b.start_date, b.end_date, \
                    b.alert_percentage, b.spent, c.name, c.color
             FROM budgets b
             LEFT JOIN categories c ON b.category_id = c.id
             ORDER BY b.id",
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(BudgetWithCategory {
                budget: budget_from_row(r)?,
                category_name: r.get(8)?,
                category_color: r.get(9)?,
            });
        }
        Ok(out)
    }

    pub fn update_budget(&self, b: &Budget) -> Result<()> {
        self.conn.execute(
            "UPDATE budgets
             SET category_id=?1, amount=?2, period=?3, start_date=?4, end_date=?5,
                 alert_percentage=?6, spent=?7
             WHERE id=?8",
            params![
                b.category_id,
                b.amount.to_string(),
                b.period.as_str(),
                b.start_date,
                b.end_date,
                b.alert_percentage.to_string(),
                b.spent.to_string(),
                b.id,
            ],
        )?;
        Ok(())
    }

    pub fn delete_budget(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM budgets WHERE id=?1", params![id])?;
        Ok(())
    }

    /// Recompute `spent` for a category as the sum of its Expense
    /// transactions inside the inclusive date range, then write that
    /// figure to every budget row sharing the category.
    pub fn update_budget_spent(
        &mut self,
        category_id: i64,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Result<()> {
        let tx = self.conn.transaction()?;
        let spent = {
            let mut stmt = tx.prepare(
                "SELECT amount FROM transactions
                 WHERE category_id=?1 AND transaction_type='Expense' AND date BETWEEN ?2 AND ?3",
            )?;
            let mut rows = stmt.query(params![category_id, period_start, period_end])?;
            let mut sum = Decimal::ZERO;
            while let Some(r) = rows.next()? {
                let s: String = r.get(0)?;
                sum += parse_amount(&s)?;
            }
            sum
        };
        tx.execute(
            "UPDATE budgets SET spent=?1 WHERE category_id=?2",
            params![spent.to_string(), category_id],
        )?;
        tx.commit()?;
        Ok(())
    }

    // ---- goals ----

    pub fn add_goal(&self, g: &Goal) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO goals(name, target_amount, current_amount, deadline, icon, color, \
             notes, completed)
             VALUES (?1,?2,?3,?4,?5,?6,?7,?8)",
            params![
                g.name,
                g.target_amount.to_string(),
                g.current_amount.to_string(),
                g.deadline,
                g.icon,
                g.color,
                g.notes,
                g.completed,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_goals(&self) -> Result<Vec<Goal>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, target_amount, current_amount, deadline, icon, color, notes, \
             completed
             FROM goals ORDER BY completed, deadline",
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(goal_from_row(r)?);
        }
        Ok(out)
    }

    pub fn update_goal(&self, g: &Goal) -> Result<()> {
        self.conn.execute(
            "UPDATE goals
             SET name=?1, target_amount=?2, current_amount=?3, deadline=?4, icon=?5, color=?6,
                 notes=?7, completed=?8
             WHERE id=?9",
            params![
                g.name,
                g.target_amount.to_string(),
                g.current_amount.to_string(),
                g.deadline,
                g.icon,
                g.color,
                g.notes,
                g.completed,
                g.id,
            ],
        )?;
        Ok(())
    }

    pub fn delete_goal(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM goals WHERE id=?1", params![id])?;
        Ok(())
    }

    // ---- debts ----

    pub fn add_debt(&self, d: &Debt) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO debts(debt_type, person_name, amount, amount_paid, date, due_date, \
             interest_rate, notes, settled)
             VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9)",
            params![
                d.kind.as_str(),
                d.person_name,
                d.amount.to_string(),
                d.amount_paid.to_string(),
                d.date,
                d.due_date,
                d.interest_rate.to_string(),
                d.notes,
                d.settled,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_debts(&self) -> Result<Vec<Debt>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, debt_type, person_name, amount, amount_paid, date, due_date, \
             interest_rate, notes, settled
             FROM debts ORDER BY settled, due_date",
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(debt_from_row(r)?);
        }
        Ok(out)
    }

    pub fn update_debt(&self, d: &Debt) -> Result<()> {
        self.conn.execute(
            "UPDATE debts
             SET debt_type=?1, person_name=?2, amount=?3, amount_paid=?4, date=?5, due_date=?6,
                 interest_rate=?7, notes=?8, settled=?9
             WHERE id=?10",
            params![
                d.kind.as_str(),
                d.person_name,
                d.amount.to_string(),
                d.amount_paid.to_string(),
                d.date,
                d.due_date,
                d.interest_rate.to_string(),
                d.notes,
                d.settled,
                d.id,
            ],
        )?;
        Ok(())
    }

    pub fn delete_debt(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM debts WHERE id=?1", params![id])?;
        Ok(())
    }

    // ---- recurring transactions ----

    pub fn add_recurring_transaction(&self, r: &RecurringTransaction) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO recurring_transactions(transaction_type, amount, category_id, \
             subcategory_id, account_id, description, frequency, custom_interval, start_date, \
             end_date, next_due_date, auto_create, active)
             VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13)",
            params![
                r.kind.as_str(),
                r.amount.to_string(),
                r.category_id,
                r.subcategory_id,
                r.account_id,
                r.description,
                r.frequency.as_str(),
                r.interval,
                r.start_date,
                r.end_date,
                r.next_due_date,
                r.auto_create,
                r.active,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Active patterns, soonest due first.
    pub fn get_recurring_transactions(&self) -> Result<Vec<RecurringTransaction>> {
        let sql = format!(
            "SELECT {} FROM recurring_transactions WHERE active=1 ORDER BY next_due_date",
            RECURRING_COLS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(recurring_from_row(r)?);
        }
        Ok(out)
    }

    pub fn update_recurring_transaction(&self, r: &RecurringTransaction) -> Result<()> {
        self.conn.execute(
            "UPDATE recurring_transactions
             SET transaction_type=?1, amount=?2, category_id=?3, subcategory_id=?4,
                 account_id=?5, description=?6, frequency=?7, custom_interval=?8,
                 start_date=?9, end_date=?10, next_due_date=?11, auto_create=?12, active=?13
             WHERE id=?14",
            params![
                r.kind.as_str(),
                r.amount.to_string(),
                r.category_id,
                r.subcategory_id,
                r.account_id,
                r.description,
                r.frequency.as_str(),
                r.interval,
                r.start_date,
                r.end_date,
                r.next_due_date,
                r.auto_create,
                r.active,
                r.id,
            ],
        )?;
        Ok(())
    }

    pub fn delete_recurring_transaction(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM recurring_transactions WHERE id=?1", params![id])?;
        Ok(())
    }

    /// Advance a pattern's schedule cursor.
    pub fn set_next_due_date(&self, id: i64, next: NaiveDate) -> Result<()> {
        self.conn.execute(
            "UPDATE recurring_transactions SET next_due_date=?1 WHERE id=?2",
            params![next, id],
        )?;
        Ok(())
    }

    // ---- settings ----

    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let v: Option<String> = self
            .conn
            .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO settings(key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

fn validate_transaction(t: &Transaction) -> Result<()> {
    if t.amount < Decimal::ZERO {
        return Err(StoreError::validation("amount must be non-negative"));
    }
    match t.kind {
        TransactionType::Expense | TransactionType::Income => {
            if t.account_id.is_none() {
                return Err(StoreError::validation(format!(
                    "{} requires an account",
                    t.kind.as_str()
                )));
            }
        }
        TransactionType::Transfer => {
            if t.account_id.is_none() || t.to_account_id.is_none() {
                return Err(StoreError::validation(
                    "Transfer requires both source and destination accounts",
                ));
            }
        }
    }
    Ok(())
}

/// Read-modify-write of one account's balance. A missing account id is
/// a no-op, like an UPDATE matching zero rows.
fn adjust_balance(conn: &Connection, account_id: i64, delta: Decimal) -> Result<()> {
    let bal: Option<String> = conn
        .query_row(
            "SELECT current_balance FROM accounts WHERE id=?1",
            params![account_id],
            |r| r.get(0),
        )
        .optional()?;
    let Some(bal) = bal else {
        return Ok(());
    };
    let new_bal = parse_amount(&bal)? + delta;
    conn.execute(
        "UPDATE accounts SET current_balance=?1 WHERE id=?2",
        params![new_bal.to_string(), account_id],
    )?;
    Ok(())
}

/// Signed effect of a fresh insert: Expense debits, Income credits,
/// Transfer moves amount from source to destination.
fn apply_effect(conn: &Connection, t: &Transaction) -> Result<()> {
    match t.kind {
        TransactionType::Expense => {
            if let Some(acc) = t.account_id {
                adjust_balance(conn, acc, -t.amount)?;
            }
        }
        TransactionType::Income => {
            if let Some(acc) = t.account_id {
                adjust_balance(conn, acc, t.amount)?;
            }
        }
        TransactionType::Transfer => {
            if let Some(acc) = t.account_id {
                adjust_balance(conn, acc, -t.amount)?;
            }
            if let Some(acc) = t.to_account_id {
                adjust_balance(conn, acc, t.amount)?;
            }
        }
    }
    Ok(())
}

/// Inverse of the prior effect, for update/delete. Transfers are left
/// untouched.
fn reverse_effect(conn: &Connection, t: &Transaction) -> Result<()> {
    match t.kind {
        TransactionType::Expense => {
            if let Some(acc) = t.account_id {
                adjust_balance(conn, acc, t.amount)?;
            }
        }
        TransactionType::Income => {
            if let Some(acc) = t.account_id {
                adjust_balance(conn, acc, -t.amount)?;
            }
        }
        TransactionType::Transfer => {}
    }
    Ok(())
}

/// New effect after an update. Transfers are left untouched, mirroring
/// `reverse_effect`.
fn forward_effect_non_transfer(conn: &Connection, t: &Transaction) -> Result<()> {
    match t.kind {
        TransactionType::Expense => {
            if let Some(acc) = t.account_id {
                adjust_balance(conn, acc, -t.amount)?;
            }
        }
        TransactionType::Income => {
            if let Some(acc) = t.account_id {
                adjust_balance(conn, acc, t.amount)?;
            }
        }
        TransactionType::Transfer => {}
    }
    Ok(())
}

pub(crate) fn parse_amount(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .map_err(|_| StoreError::corrupt(format!("invalid amount '{}'", s)))
}

pub(crate) fn transaction_from_row(r: &rusqlite::Row<'_>) -> Result<Transaction> {
    let kind: String = r.get(1)?;
    let amount: String = r.get(2)?;
    Ok(Transaction {
        id: r.get(0)?,
        kind: kind.parse()?,
        amount: parse_amount(&amount)?,
        category_id: r.get(3)?,
        subcategory_id: r.get(4)?,
        account_id: r.get(5)?,
        to_account_id: r.get(6)?,
        date: r.get(7)?,
        time: r.get(8)?,
        description: r.get::<_, Option<String>>(9)?.unwrap_or_default(),
        payment_method: r.get::<_, Option<String>>(10)?.unwrap_or_default(),
        tags: r.get::<_, Option<String>>(11)?.unwrap_or_default(),
        receipt_path: r.get(12)?,
        recurring_id: r.get(13)?,
    })
}

fn account_from_row(r: &rusqlite::Row<'_>) -> Result<Account> {
    let kind: String = r.get(2)?;
    let initial: String = r.get(3)?;
    let current: String = r.get(4)?;
    let credit_limit: String = r.get(9)?;
    let interest: String = r.get(11)?;
    Ok(Account {
        id: r.get(0)?,
        name: r.get(1)?,
        kind: kind.into(),
        initial_balance: parse_amount(&initial)?,
        current_balance: parse_amount(&current)?,
        currency: r.get(5)?,
        icon: r.get::<_, Option<String>>(6)?.unwrap_or_default(),
        color: r.get::<_, Option<String>>(7)?.unwrap_or_default(),
        is_credit_card: r.get(8)?,
        credit_limit: parse_amount(&credit_limit)?,
        due_date: r.get(10)?,
        interest_rate: parse_amount(&interest)?,
        notes: r.get::<_, Option<String>>(12)?.unwrap_or_default(),
    })
}

fn category_from_row(r: &rusqlite::Row<'_>) -> Result<Category> {
    let kind: String = r.get(2)?;
    Ok(Category {
        id: r.get(0)?,
        name: r.get(1)?,
        kind: kind.parse()?,
        icon: r.get::<_, Option<String>>(3)?.unwrap_or_default(),
        color: r.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}

fn budget_from_row(r: &rusqlite::Row<'_>) -> Result<Budget> {
    let amount: String = r.get(2)?;
    let period: String = r.get(3)?;
    let alert: String = r.get(6)?;
    let spent: String = r.get(7)?;
    Ok(Budget {
        id: r.get(0)?,
        category_id: r.get(1)?,
        amount: parse_amount(&amount)?,
        period: period.parse()?,
        start_date: r.get(4)?,
        end_date: r.get(5)?,
        alert_percentage: parse_amount(&alert)?,
        spent: parse_amount(&spent)?,
    })
}

fn goal_from_row(r: &rusqlite::Row<'_>) -> Result<Goal> {
    let target: String = r.get(2)?;
    let current: String = r.get(3)?;
    Ok(Goal {
        id: r.get(0)?,
        name: r.get(1)?,
        target_amount: parse_amount(&target)?,
        current_amount: parse_amount(&current)?,
        deadline: r.get(4)?,
        icon: r.get::<_, Option<String>>(5)?.unwrap_or_default(),
        color: r.get::<_, Option<String>>(6)?.unwrap_or_default(),
        notes: r.get::<_, Option<String>>(7)?.unwrap_or_default(),
        completed: r.get(8)?,
    })
}

fn debt_from_row(r: &rusqlite::Row<'_>) -> Result<Debt> {
    let kind: String = r.get(1)?;
    let amount: String = r.get(3)?;
    let paid: String = r.get(4)?;
    let interest: String = r.get(7)?;
    Ok(Debt {
        id: r.get(0)?,
        kind: kind.parse()?,
        person_name: r.get(2)?,
        amount: parse_amount(&amount)?,
        amount_paid: parse_amount(&paid)?,
        date: r.get(5)?,
        due_date: r.get(6)?,
        interest_rate: parse_amount(&interest)?,
        notes: r.get::<_, Option<String>>(8)?.unwrap_or_default(),
        settled: r.get(9)?,
    })
}

fn recurring_from_row(r: &rusqlite::Row<'_>) -> Result<RecurringTransaction> {
    let kind: String = r.get(1)?;
    let amount: String = r.get(2)?;
    let frequency: String = r.get(7)?;
    Ok(RecurringTransaction {
        id: r.get(0)?,
        kind: kind.parse()?,
        amount: parse_amount(&amount)?,
        category_id: r.get(3)?,
        subcategory_id: r.get(4)?,
        account_id: r.get(5)?,
        description: r.get::<_, Option<String>>(6)?.unwrap_or_default(),
        frequency: frequency.parse()?,
        interval: r.get(8)?,
        start_date: r.get(9)?,
        end_date: r.get(10)?,
        next_due_date: r.get(11)?,
        auto_create: r.get(12)?,
        active: r.get(13)?,
    })
}
