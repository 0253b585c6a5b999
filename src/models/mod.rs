//! Trade data records.
//!
//! A trade data payload is a JSON object with two mandatory sections,
//! `trade_info` and `brokerage`. Every field inside a section defaults to
//! its zero value so that missing fields surface as field-level validation
//! errors instead of decode failures.

pub mod quantity;
pub mod trade_type;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

pub use quantity::Quantity;
pub use trade_type::TradeType;

/// A decoded trade data payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeData {
    pub trade_info: TradeInfo,
    pub brokerage: Brokerage,
}

impl TradeData {
    /// Re-encodes the record as a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The trade itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub asset_holder_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub asset_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub trade_type: TradeType,
    #[serde(deserialize_with = "null_as_default")]
    pub trade_value: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub base_currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub settlement_currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exchange_rate: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub exchange: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fund_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub issuer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub number_of_shares: u64,
    /// Price used to derive the token amount per unit.
    #[serde(deserialize_with = "null_as_default")]
    pub coin_minting_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(deserialize_with = "null_as_default")]
    pub segment: String,
    #[serde(deserialize_with = "null_as_default")]
    pub share_price: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub ticker: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trade_fee: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub share_net_price: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub trade_net_value: Decimal,
}

/// The brokerage that executed the trade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brokerage {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub tpe: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
}

/// Reads JSON `null` as the field's zero value, like an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
