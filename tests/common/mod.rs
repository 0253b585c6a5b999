//! Shared test utilities and fixtures.

#![allow(dead_code)]

use serde_json::Value;

pub const SELL_JSON: &str = include_str!("../fixtures/sell_trade.json");
pub const BUY_JSON: &str = include_str!("../fixtures/buy_trade.json");
pub const FIAT_DEPOSIT_JSON: &str = include_str!("../fixtures/fiat_deposit.json");

/// Parses `payload`, sets `trade_info.<field>` to `value`, and re-encodes it.
pub fn with_trade_info_field(payload: &str, field: &str, value: Value) -> String {
    with_section_field(payload, "trade_info", field, value)
}

/// Parses `payload`, sets `brokerage.<field>` to `value`, and re-encodes it.
pub fn with_brokerage_field(payload: &str, field: &str, value: Value) -> String {
    with_section_field(payload, "brokerage", field, value)
}

/// Parses `payload`, removes `trade_info.<field>`, and re-encodes it.
pub fn without_trade_info_field(payload: &str, field: &str) -> String {
    let mut doc: Value = serde_json::from_str(payload).expect("fixture is valid JSON");
    doc["trade_info"]
        .as_object_mut()
        .expect("trade_info is an object")
        .remove(field);
    doc.to_string()
}

fn with_section_field(payload: &str, section: &str, field: &str, value: Value) -> String {
    let mut doc: Value = serde_json::from_str(payload).expect("fixture is valid JSON");
    doc[section][field] = value;
    doc.to_string()
}
