// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

use crate::error;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("org.moneybook", "Moneybook", "moneybook"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("moneybook.sqlite"))
}

pub fn open_or_init() -> Result<crate::store::Store> {
    let path = db_path()?;
    let store = crate::store::Store::open(&path)
        .with_context(|| format!("Open store at {}", path.display()))?;
    Ok(store)
}

pub(crate) fn init_schema(conn: &Connection) -> error::Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS categories(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        category_type TEXT NOT NULL,
        icon TEXT,
        color TEXT
    );

    CREATE TABLE IF NOT EXISTS subcategories(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        category_id INTEGER,
        FOREIGN KEY(category_id) REFERENCES categories(id)
    );

    CREATE TABLE IF NOT EXISTS accounts(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        account_type TEXT NOT NULL,
        initial_balance TEXT NOT NULL DEFAULT '0',
        current_balance TEXT NOT NULL DEFAULT '0',
        currency TEXT NOT NULL DEFAULT 'USD',
        icon TEXT,
        color TEXT,
        is_credit_card INTEGER NOT NULL DEFAULT 0,
        credit_limit TEXT NOT NULL DEFAULT '0',
        due_date TEXT,
        interest_rate TEXT NOT NULL DEFAULT '0',
        notes TEXT
    );

    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        transaction_type TEXT NOT NULL,
        amount TEXT NOT NULL,
        category_id INTEGER,
        subcategory_id INTEGER,
        account_id INTEGER,
        to_account_id INTEGER,
        date TEXT NOT NULL,
        time TEXT,
        description TEXT,
        payment_method TEXT,
        tags TEXT,
        receipt_path TEXT,
        recurring_id INTEGER,
        FOREIGN KEY(category_id) REFERENCES categories(id),
        FOREIGN KEY(subcategory_id) REFERENCES subcategories(id),
        FOREIGN KEY(account_id) REFERENCES accounts(id),
        FOREIGN KEY(to_account_id) REFERENCES accounts(id),
        FOREIGN KEY(recurring_id) REFERENCES recurring_transactions(id)
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);

    CREATE TABLE IF NOT EXISTS budgets(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        category_id INTEGER,
        amount TEXT NOT NULL,
        period TEXT NOT NULL,
        start_date TEXT,
        end_date TEXT,
        alert_percentage TEXT NOT NULL DEFAULT '80',
        spent TEXT NOT NULL DEFAULT '0',
        FOREIGN KEY(category_id) REFERENCES categories(id)
    );

    CREATE TABLE IF NOT EXISTS goals(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        target_amount TEXT NOT NULL,
        current_amount TEXT NOT NULL DEFAULT '0',
        deadline TEXT,
        icon TEXT,
        color TEXT,
        notes TEXT,
        completed INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS debts(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        debt_type TEXT NOT NULL,
        person_name TEXT NOT NULL,
        amount TEXT NOT NULL,
        amount_paid TEXT NOT NULL DEFAULT '0',
        date TEXT,
        due_date TEXT,
        interest_rate TEXT NOT NULL DEFAULT '0',
        notes TEXT,
        settled INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS recurring_transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        transaction_type TEXT NOT NULL,
        amount TEXT NOT NULL,
        category_id INTEGER,
        subcategory_id INTEGER,
        account_id INTEGER,
        description TEXT,
        frequency TEXT NOT NULL,
        custom_interval INTEGER NOT NULL DEFAULT 1,
        start_date TEXT,
        end_date TEXT,
        next_due_date TEXT,
        auto_create INTEGER NOT NULL DEFAULT 1,
        active INTEGER NOT NULL DEFAULT 1,
        FOREIGN KEY(category_id) REFERENCES categories(id),
        FOREIGN KEY(subcategory_id) REFERENCES subcategories(id),
        FOREIGN KEY(account_id) REFERENCES accounts(id)
    );

    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT
    );
    "#,
    )?;
    Ok(())
}

const DEFAULT_EXPENSE_CATEGORIES: &[(&str, &str, &str)] = &[
    ("Food & Dining", "restaurant", "#FF5722"),
    ("Shopping", "cart", "#E91E63"),
    ("Transportation", "car", "#9C27B0"),
    ("Entertainment", "movie", "#673AB7"),
    ("Bills & Utilities", "file-document", "#3F51B5"),
    ("Healthcare", "hospital", "#2196F3"),
    ("Education", "school", "#03A9F4"),
    ("Travel", "airplane", "#00BCD4"),
    ("Personal", "account", "#009688"),
    ("Others", "dots-horizontal", "#795548"),
];

const DEFAULT_INCOME_CATEGORIES: &[(&str, &str, &str)] = &[
    ("Salary", "cash", "#4CAF50"),
    ("Business", "briefcase", "#8BC34A"),
    ("Investments", "trending-up", "#CDDC39"),
    ("Gifts", "gift", "#FFC107"),
    ("Other Income", "plus", "#FF9800"),
];

const DEFAULT_SETTINGS: &[(&str, &str)] = &[
    ("currency", "USD"),
    ("date_format", "%Y-%m-%d"),
    ("theme", "Light"),
    ("pin_code", ""),
    ("auto_backup", "0"),
    ("backup_frequency", "weekly"),
    ("financial_month_start", "1"),
];

/// Seed default categories, the default Cash account, and settings.
/// Guarded by row counts, so re-running against a populated store is a
/// no-op.
pub(crate) fn seed_defaults(conn: &Connection) -> error::Result<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM categories", [], |r| r.get(0))?;
    if count == 0 {
        for (name, icon, color) in DEFAULT_EXPENSE_CATEGORIES {
            conn.execute(
                "INSERT INTO categories(name, category_type, icon, color) VALUES (?1,'Expense',?2,?3)",
                rusqlite::params![name, icon, color],
            )?;
        }
        for (name, icon, color) in DEFAULT_INCOME_CATEGORIES {
            conn.execute(
                "INSERT INTO categories(name, category_type, icon, color) VALUES (?1,'Income',?2,?3)",
                rusqlite::params![name, icon, color],
            )?;
        }
    }

    let count: i64 = conn.query_row("SELECT COUNT(*) FROM accounts", [], |r| r.get(0))?;
    if count == 0 {
        conn.execute(
            "INSERT INTO accounts(name, account_type, initial_balance, current_balance, icon, color, notes)
             VALUES ('Cash','Cash','0','0','wallet','#4CAF50','')",
            [],
        )?;
    }

    for (key, value) in DEFAULT_SETTINGS {
        conn.execute(
            "INSERT OR IGNORE INTO settings(key, value) VALUES (?1, ?2)",
            rusqlite::params![key, value],
        )?;
    }
    Ok(())
}
