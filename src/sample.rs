//! Known-good trade data records.
//!
//! Used by the CLI `sample` command and as a baseline in tests: callers
//! tweak one field of a sample to exercise a single rule.

use rust_decimal::Decimal;

use crate::denom::DEFAULT_DENOM;
use crate::models::{Brokerage, Quantity, TradeData, TradeInfo, TradeType};

/// Token amount carried by buy and sell samples.
pub const SAMPLE_QUANTITY_AMOUNT: u128 = 162_075_000_000_000;

/// Returns a valid record of the given type.
///
/// Buy and sell samples carry a quantity in the default denom; fiat
/// samples carry none.
pub fn sample_trade_data(trade_type: TradeType) -> TradeData {
    let quantity = match trade_type.requires_quantity() {
        Some(true) => Some(Quantity::new(SAMPLE_QUANTITY_AMOUNT, DEFAULT_DENOM)),
        _ => None,
    };

    TradeData {
        trade_info: TradeInfo {
            asset_holder_id: 1,
            asset_id: 1,
            trade_type,
            trade_value: Decimal::new(19449, 1),
            base_currency: "GBP".to_string(),
            settlement_currency: "GBP".to_string(),
            exchange_rate: Decimal::ONE,
            exchange: "US".to_string(),
            fund_name: "Low Carbon Target ETF".to_string(),
            issuer: "Blackrock".to_string(),
            number_of_shares: 10,
            coin_minting_price: Decimal::new(12, 12),
            quantity,
            segment: "Equity: Global Low Carbon".to_string(),
            share_price: Decimal::new(19449, 2),
            ticker: "CRBN".to_string(),
            trade_fee: Decimal::ZERO,
            share_net_price: Decimal::new(19449, 2),
            trade_net_value: Decimal::new(19449, 1),
        },
        brokerage: Brokerage {
            name: "Interactive Brokers LLC".to_string(),
            tpe: "Brokerage Firm".to_string(),
            country: "US".to_string(),
        },
    }
}

/// Returns [`sample_trade_data`] encoded as a JSON payload.
pub fn sample_trade_data_json(trade_type: TradeType) -> String {
    // Serializing plain strings, integers and decimals cannot fail.
    serde_json::to_string(&sample_trade_data(trade_type)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn quantity_only_on_buy_and_sell() {
        assert!(sample_trade_data(TradeType::Buy).trade_info.quantity.is_some());
        assert!(sample_trade_data(TradeType::Sell).trade_info.quantity.is_some());
        assert!(sample_trade_data(TradeType::FiatDeposit).trade_info.quantity.is_none());
        assert!(sample_trade_data(TradeType::FiatWithdrawal).trade_info.quantity.is_none());
    }

    #[test]
    fn sample_values() {
        let info = sample_trade_data(TradeType::Buy).trade_info;
        assert_eq!(info.trade_value, dec!(1944.9));
        assert_eq!(info.share_price, dec!(194.49));
        assert_eq!(info.coin_minting_price, dec!(0.000000000012));
    }

    #[test]
    fn json_round_trips() {
        let json = sample_trade_data_json(TradeType::Sell);
        assert!(json.contains(r#""trade_type":2"#));
        let decoded: TradeData = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, sample_trade_data(TradeType::Sell));
    }
}
