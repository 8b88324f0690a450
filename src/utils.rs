// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::HashMap;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{} {}", ccy, d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

// Display-only exchange rates relative to USD. Balance computation
// never goes through these.
static RATES: Lazy<HashMap<&'static str, Decimal>> = Lazy::new(|| {
    HashMap::from([
        ("USD", Decimal::ONE),
        ("EUR", Decimal::new(85, 2)),
        ("GBP", Decimal::new(73, 2)),
        ("JPY", Decimal::new(110, 0)),
        ("INR", Decimal::new(74, 0)),
        ("AUD", Decimal::new(135, 2)),
        ("CAD", Decimal::new(125, 2)),
        ("CHF", Decimal::new(92, 2)),
        ("CNY", Decimal::new(645, 2)),
        ("BRL", Decimal::new(525, 2)),
        ("ZAR", Decimal::new(1450, 2)),
        ("MXN", Decimal::new(20, 0)),
    ])
});

static SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("USD", "$"),
        ("EUR", "€"),
        ("GBP", "£"),
        ("JPY", "¥"),
        ("INR", "₹"),
        ("AUD", "A$"),
        ("CAD", "C$"),
        ("CHF", "Fr"),
        ("CNY", "¥"),
        ("BRL", "R$"),
        ("ZAR", "R"),
        ("MXN", "$"),
    ])
});

/// Convert an amount between currencies via the USD hub. Unknown codes
/// pass the amount through unchanged.
pub fn convert_currency(amount: Decimal, from_ccy: &str, to_ccy: &str) -> Decimal {
    if from_ccy == to_ccy {
        return amount;
    }
    let (Some(from_rate), Some(to_rate)) = (RATES.get(from_ccy), RATES.get(to_ccy)) else {
        return amount;
    };
    (amount / from_rate * to_rate).round_dp(2)
}

/// Amount with the currency's symbol, falling back to the code itself.
pub fn format_amount(amount: Decimal, ccy: &str) -> String {
    let symbol = SYMBOLS.get(ccy).copied().unwrap_or(ccy);
    format!("{}{:.2}", symbol, amount)
}

pub fn supported_currencies() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = RATES.keys().copied().collect();
    codes.sort_unstable();
    codes
}

/// Argon2id hash of a PIN, suitable for the `pin_code` setting.
pub fn hash_pin(pin: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(pin.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash PIN: {}", e))?;
    Ok(hash.to_string())
}

pub fn verify_pin(pin: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(pin.as_bytes(), &parsed)
        .is_ok()
}

/// Reject weak PINs before they are ever hashed.
pub fn validate_pin_strength(pin: &str) -> std::result::Result<(), &'static str> {
    if pin.is_empty() {
        return Err("PIN cannot be empty");
    }
    if pin.len() < 4 {
        return Err("PIN must be at least 4 digits");
    }
    if !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err("PIN must contain only numbers");
    }
    let bytes = pin.as_bytes();
    if bytes.iter().all(|&b| b == bytes[0]) {
        return Err("PIN cannot be all same digits");
    }
    if bytes.windows(2).all(|w| w[1] == w[0] + 1) {
        return Err("PIN cannot be sequential");
    }
    Ok(())
}
