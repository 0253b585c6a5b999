//! Structural decoding of raw trade data payloads.
//!
//! Only the shape is checked here: the payload must be a JSON object whose
//! `trade_info` and `brokerage` sections are present, non-empty objects.
//! Field semantics are left to [`crate::validation`].

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::TradeDataError;
use crate::models::{Brokerage, TradeData, TradeInfo};

#[derive(Deserialize)]
struct RawTradeData {
    #[serde(default)]
    trade_info: Option<Map<String, Value>>,
    #[serde(default)]
    brokerage: Option<Map<String, Value>>,
}

/// Decodes a payload into a [`TradeData`] skeleton.
///
/// # Errors
///
/// Returns [`TradeDataError::InvalidTradeData`] if the payload is not a JSON
/// object, or either section is absent, `null`, empty, or holds values of
/// the wrong type.
pub fn decode_trade_data(payload: &str) -> Result<TradeData, TradeDataError> {
    let raw: RawTradeData = serde_json::from_str(payload).map_err(|e| {
        debug!(error = %e, "Trade data is not a valid document");
        TradeDataError::InvalidTradeData
    })?;

    let trade_info: TradeInfo = decode_section("trade_info", raw.trade_info)?;
    let brokerage: Brokerage = decode_section("brokerage", raw.brokerage)?;

    Ok(TradeData {
        trade_info,
        brokerage,
    })
}

fn decode_section<T>(name: &str, section: Option<Map<String, Value>>) -> Result<T, TradeDataError>
where
    T: for<'de> Deserialize<'de>,
{
    let fields = match section {
        Some(fields) if !fields.is_empty() => fields,
        _ => {
            debug!(section = name, "Trade data section is missing or empty");
            return Err(TradeDataError::InvalidTradeData);
        }
    };

    serde_json::from_value(Value::Object(fields)).map_err(|e| {
        debug!(section = name, error = %e, "Trade data section failed to decode");
        TradeDataError::InvalidTradeData
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Quantity, TradeType};

    const BROKERAGE: &str = r#""brokerage":{"name":"Interactive Brokers LLC","type":"Brokerage Firm","country":"US"}"#;

    #[test]
    fn decodes_both_sections() {
        let payload = format!(
            r#"{{"trade_info":{{"asset_id":1,"trade_type":2,"quantity":{{"amount":"10","denom":"ugbpv"}}}},{BROKERAGE}}}"#
        );
        let data = decode_trade_data(&payload).unwrap();
        assert_eq!(data.trade_info.asset_id, 1);
        assert_eq!(data.trade_info.trade_type, TradeType::Sell);
        assert_eq!(data.trade_info.quantity, Some(Quantity::new(10, "ugbpv")));
        assert_eq!(data.brokerage.country, "US");
    }

    #[test]
    fn missing_trade_info() {
        let payload = format!("{{{BROKERAGE}}}");
        assert_eq!(
            decode_trade_data(&payload),
            Err(TradeDataError::InvalidTradeData)
        );
    }

    #[test]
    fn empty_or_null_sections() {
        let payload = format!(r#"{{"trade_info":{{}},{BROKERAGE}}}"#);
        assert_eq!(
            decode_trade_data(&payload),
            Err(TradeDataError::InvalidTradeData)
        );

        let payload = r#"{"trade_info":{"asset_id":1},"brokerage":null}"#;
        assert_eq!(
            decode_trade_data(payload),
            Err(TradeDataError::InvalidTradeData)
        );
    }

    #[test]
    fn empty_brokerage_with_valid_trade_info() {
        let payload = r#"{"trade_info":{"asset_id":1,"trade_type":2,"ticker":"AAPL"},"brokerage":{}}"#;
        assert_eq!(
            decode_trade_data(payload),
            Err(TradeDataError::InvalidTradeData)
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let payload = format!(
            r#"{{"version":1,"trade_info":{{"asset_id":1,"memo":"late fill"}},{BROKERAGE}}}"#
        );
        let data = decode_trade_data(&payload).unwrap();
        assert_eq!(data.trade_info.asset_id, 1);
        assert_eq!(data.brokerage.name, "Interactive Brokers LLC");
    }

    #[test]
    fn null_field_decodes_to_zero_value() {
        let payload = format!(r#"{{"trade_info":{{"asset_id":1,"exchange":null}},{BROKERAGE}}}"#);
        let data = decode_trade_data(&payload).unwrap();
        assert_eq!(data.trade_info.exchange, "");
    }

    #[test]
    fn not_an_object() {
        for payload in ["", "null", "[]", r#""trade_info":{"asset_id":1}"#, "{"] {
            assert_eq!(
                decode_trade_data(payload),
                Err(TradeDataError::InvalidTradeData),
                "payload {payload:?}"
            );
        }
    }

    #[test]
    fn wrong_field_type_is_structural() {
        let payload = format!(r#"{{"trade_info":{{"asset_id":-1}},{BROKERAGE}}}"#);
        assert_eq!(
            decode_trade_data(&payload),
            Err(TradeDataError::InvalidTradeData)
        );
    }

    #[test]
    fn blank_values_are_left_for_validation() {
        let payload = r#"{"trade_info":{"asset_id":0},"brokerage":{"name":" "}}"#;
        let data = decode_trade_data(payload).unwrap();
        assert_eq!(data.trade_info.asset_id, 0);
        assert_eq!(data.brokerage.name, " ");
    }
}
