//! Rules that depend on the trade type grouping.

use crate::denom::DenomRegistry;
use crate::error::{FieldRule, TradeDataError, TradeField};
use crate::models::TradeInfo;

use super::common::positive;

/// Routes a trade to the buy/sell or the fiat rule set.
///
/// # Errors
///
/// Returns [`TradeDataError::InvalidTradeType`] when the type is unset or
/// unknown, otherwise whatever the selected rule set reports.
pub fn validate_trade_type_rules(
    info: &TradeInfo,
    registry: &DenomRegistry,
) -> Result<(), TradeDataError> {
    match info.trade_type.requires_quantity() {
        Some(true) => validate_buy_or_sell(info, registry),
        Some(false) => validate_no_quantity(info),
        None => Err(TradeDataError::InvalidTradeType),
    }
}

/// Validates a buy or sell trade.
///
/// Share prices, share count and trade values must be positive, and the
/// quantity must be a non-zero amount in the denom derived from the base
/// currency.
///
/// # Errors
///
/// Returns the first failing check.
pub fn validate_buy_or_sell(
    info: &TradeInfo,
    registry: &DenomRegistry,
) -> Result<(), TradeDataError> {
    positive(TradeField::SharePrice, info.share_price)?;
    positive(TradeField::ShareNetPrice, info.share_net_price)?;
    if info.number_of_shares == 0 {
        return Err(TradeDataError::field(
            TradeField::NumberOfShares,
            FieldRule::Positive,
        ));
    }
    positive(TradeField::TradeValue, info.trade_value)?;
    positive(TradeField::TradeNetValue, info.trade_net_value)?;

    let quantity = match &info.quantity {
        Some(quantity) if quantity.is_well_formed() => quantity,
        _ => return Err(TradeDataError::InvalidQuantity),
    };
    if quantity.is_zero() {
        return Err(TradeDataError::ZeroQuantity);
    }

    let expected = registry.expected_denom(&info.base_currency);
    if quantity.denom != expected {
        return Err(TradeDataError::DenomMismatch {
            expected,
            got: quantity.denom.clone(),
        });
    }

    Ok(())
}

/// Validates a fiat deposit or withdrawal.
///
/// A quantity may be present but must not carry a value.
///
/// # Errors
///
/// Returns [`TradeDataError::QuantityMustNotBeSet`] if it does.
pub fn validate_no_quantity(info: &TradeInfo) -> Result<(), TradeDataError> {
    match &info.quantity {
        Some(quantity) if quantity.carries_value() => Err(TradeDataError::QuantityMustNotBeSet),
        _ => Ok(()),
    }
}
