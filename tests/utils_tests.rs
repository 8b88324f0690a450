// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use moneybook::utils::{
    convert_currency, format_amount, hash_pin, parse_date, parse_decimal, supported_currencies,
    validate_pin_strength, verify_pin,
};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn parse_date_accepts_iso_and_rejects_other_shapes() {
    assert!(parse_date("2024-02-29").is_ok());
    assert!(parse_date("29/02/2024").is_err());
    assert!(parse_date("2024-13-01").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn parse_decimal_keeps_exact_cents() {
    assert_eq!(parse_decimal("10.10").unwrap(), dec("10.10"));
    assert_eq!(parse_decimal("0").unwrap(), Decimal::ZERO);
    assert!(parse_decimal("ten").is_err());
}

#[test]
fn same_currency_conversion_is_identity() {
    assert_eq!(convert_currency(dec("123.45"), "USD", "USD"), dec("123.45"));
    assert_eq!(convert_currency(dec("99.99"), "EUR", "EUR"), dec("99.99"));
}

#[test]
fn conversion_routes_through_usd() {
    // 100 USD at 0.85 EUR per USD.
    assert_eq!(convert_currency(dec("100"), "USD", "EUR"), dec("85.00"));
    // And back.
    assert_eq!(convert_currency(dec("85"), "EUR", "USD"), dec("100.00"));
}

#[test]
fn unknown_currency_codes_pass_through_unchanged() {
    assert_eq!(convert_currency(dec("50.00"), "XYZ", "USD"), dec("50.00"));
    assert_eq!(convert_currency(dec("50.00"), "USD", "XYZ"), dec("50.00"));
}

#[test]
fn format_amount_uses_symbol_or_code() {
    assert_eq!(format_amount(dec("12.5"), "USD"), "$12.50");
    assert_eq!(format_amount(dec("12.5"), "INR"), "₹12.50");
    assert_eq!(format_amount(dec("12.5"), "XYZ"), "XYZ12.50");
}

#[test]
fn supported_currencies_are_sorted_codes() {
    let codes = supported_currencies();
    assert!(codes.contains(&"USD"));
    assert!(codes.contains(&"JPY"));
    let mut sorted = codes.clone();
    sorted.sort_unstable();
    assert_eq!(codes, sorted);
}

#[test]
fn pin_strength_rules() {
    assert!(validate_pin_strength("").is_err());
    assert!(validate_pin_strength("123").is_err());
    assert!(validate_pin_strength("12a4").is_err());
    assert!(validate_pin_strength("1111").is_err());
    assert!(validate_pin_strength("1234").is_err());
    assert!(validate_pin_strength("4721").is_ok());
    assert!(validate_pin_strength("907531").is_ok());
}

#[test]
fn pin_hash_round_trip() {
    let hash = hash_pin("4721").unwrap();
    assert!(verify_pin("4721", &hash));
    assert!(!verify_pin("4722", &hash));
    assert!(!verify_pin("4721", "not-a-phc-string"));
}
