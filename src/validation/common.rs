//! Checks shared by every trade type.

use rust_decimal::Decimal;

use crate::error::{FieldRule, TradeDataError, TradeField};
use crate::models::TradeData;

/// Validates the fields every trade must carry, regardless of its type.
///
/// Checks run in a fixed order and the first failure is returned.
///
/// # Errors
///
/// Returns [`TradeDataError::InvalidTradeType`] for an unset or unknown
/// trade type and [`TradeDataError::FieldInvariant`] for any other field.
pub fn validate_common_trade_data(trade_data: &TradeData) -> Result<(), TradeDataError> {
    let info = &trade_data.trade_info;
    let brokerage = &trade_data.brokerage;

    if info.asset_holder_id == 0 {
        return Err(TradeDataError::field(
            TradeField::AssetHolderId,
            FieldRule::Positive,
        ));
    }
    if info.asset_id == 0 {
        return Err(TradeDataError::field(TradeField::AssetId, FieldRule::Positive));
    }
    if !info.trade_type.is_known() {
        return Err(TradeDataError::InvalidTradeType);
    }

    not_blank(TradeField::BaseCurrency, &info.base_currency)?;
    not_blank(TradeField::SettlementCurrency, &info.settlement_currency)?;
    not_blank(TradeField::Exchange, &info.exchange)?;
    not_blank(TradeField::FundName, &info.fund_name)?;
    not_blank(TradeField::Issuer, &info.issuer)?;
    positive(TradeField::CoinMintingPrice, info.coin_minting_price)?;
    not_blank(TradeField::Segment, &info.segment)?;
    not_blank(TradeField::Ticker, &info.ticker)?;

    if info.trade_fee < Decimal::ZERO {
        return Err(TradeDataError::field(
            TradeField::TradeFee,
            FieldRule::NonNegative,
        ));
    }
    if info.exchange_rate <= Decimal::ZERO {
        return Err(TradeDataError::field(
            TradeField::ExchangeRate,
            FieldRule::PositiveGot(info.exchange_rate.normalize()),
        ));
    }

    not_blank(TradeField::BrokerageCountry, &brokerage.country)?;
    not_blank(TradeField::BrokerageType, &brokerage.tpe)?;
    not_blank(TradeField::BrokerageName, &brokerage.name)?;

    Ok(())
}

pub(crate) fn not_blank(field: TradeField, value: &str) -> Result<(), TradeDataError> {
    if value.trim().is_empty() {
        return Err(TradeDataError::field(field, FieldRule::NotBlank));
    }
    Ok(())
}

pub(crate) fn positive(field: TradeField, value: Decimal) -> Result<(), TradeDataError> {
    if value <= Decimal::ZERO {
        return Err(TradeDataError::field(field, FieldRule::Positive));
    }
    Ok(())
}
