//! Trade data validation pipeline.
//!
//! A payload is decoded, then checked against the rules shared by every
//! trade type, then against the rules of its type group. The first failing
//! check is returned; nothing is aggregated or retried.

mod common;
mod trade_type_rules;

use tracing::{debug, warn};

use crate::decode::decode_trade_data;
use crate::denom::DenomRegistry;
use crate::error::TradeDataError;
use crate::models::TradeData;

pub use common::validate_common_trade_data;
pub use trade_type_rules::{validate_buy_or_sell, validate_no_quantity, validate_trade_type_rules};

/// Validates trade data payloads against a denom registry.
///
/// Holds no mutable state, so a single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TradeValidator {
    registry: DenomRegistry,
}

impl TradeValidator {
    /// Creates a validator that derives expected denoms from `registry`.
    pub fn new(registry: DenomRegistry) -> Self {
        Self { registry }
    }

    /// Returns the denom registry in use.
    pub fn registry(&self) -> &DenomRegistry {
        &self.registry
    }

    /// Decodes and validates a raw payload.
    ///
    /// # Errors
    ///
    /// Returns the first [`TradeDataError`] encountered.
    pub fn validate(&self, payload: &str) -> Result<TradeData, TradeDataError> {
        let result = decode_trade_data(payload).and_then(|trade_data| {
            self.validate_record(&trade_data)?;
            Ok(trade_data)
        });

        match &result {
            Ok(trade_data) => debug!(
                asset_id = trade_data.trade_info.asset_id,
                trade_type = %trade_data.trade_info.trade_type,
                "Trade data accepted"
            ),
            Err(e) => warn!(error = %e, "Trade data rejected"),
        }

        result
    }

    /// Validates an already decoded record.
    ///
    /// # Errors
    ///
    /// Returns the first [`TradeDataError`] encountered.
    pub fn validate_record(&self, trade_data: &TradeData) -> Result<(), TradeDataError> {
        validate_common_trade_data(trade_data)?;
        validate_trade_type_rules(&trade_data.trade_info, &self.registry)
    }
}

/// Decodes and validates a payload using the default denom registry.
///
/// # Errors
///
/// Returns the first [`TradeDataError`] encountered.
pub fn validate_trade_data(payload: &str) -> Result<TradeData, TradeDataError> {
    TradeValidator::default().validate(payload)
}
