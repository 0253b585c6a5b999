//! Crate-level error types.
//!
//! [`TradeDataError`] is the closed set of reasons a trade data payload can
//! be rejected. Its `Display` output is the exact message surfaced to the
//! caller, so downstream consumers can match on it verbatim.
//!
//! [`GateError`] wraps everything else (configuration, I/O, JSON) behind a
//! single enum for the binary and the config loader.

use std::fmt;

use rust_decimal::Decimal;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GateError>;

/// Top-level error type returned by configuration and CLI APIs.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// Configuration could not be loaded from the environment or a file.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading a payload or registry file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The trade data payload was rejected.
    #[error(transparent)]
    Validation(#[from] TradeDataError),
}

/// Reason a trade data payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TradeDataError {
    /// The payload is not a JSON object or a mandatory section is missing or empty.
    #[error("invalid trade data")]
    InvalidTradeData,

    /// A field violates its invariant.
    #[error("{field} {rule}")]
    FieldInvariant { field: TradeField, rule: FieldRule },

    /// The trade type is unset or not a known variant.
    #[error("invalid trade_type")]
    InvalidTradeType,

    /// Quantity is missing or only partially specified.
    #[error("invalid quantity")]
    InvalidQuantity,

    /// Quantity is well-formed but carries a zero amount.
    #[error("zero quantity not allowed")]
    ZeroQuantity,

    /// Quantity carries data on a trade type that forbids it.
    #[error("quantity must not be set")]
    QuantityMustNotBeSet,

    /// Quantity denom differs from the one derived from the currency.
    #[error("invalid denom expected: {expected}, got: {got}")]
    DenomMismatch { expected: String, got: String },
}

/// Coarse classification of a [`TradeDataError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeDataErrorKind {
    Structural,
    FieldInvariant,
    TypeMismatch,
    QuantityShape,
    QuantityValue,
    QuantityPresence,
    DenomMismatch,
}

impl TradeDataError {
    pub(crate) fn field(field: TradeField, rule: FieldRule) -> Self {
        Self::FieldInvariant { field, rule }
    }

    /// Returns the bucket this error belongs to.
    pub fn kind(&self) -> TradeDataErrorKind {
        match self {
            Self::InvalidTradeData => TradeDataErrorKind::Structural,
            Self::FieldInvariant { .. } => TradeDataErrorKind::FieldInvariant,
            Self::InvalidTradeType => TradeDataErrorKind::TypeMismatch,
            Self::InvalidQuantity => TradeDataErrorKind::QuantityShape,
            Self::ZeroQuantity => TradeDataErrorKind::QuantityValue,
            Self::QuantityMustNotBeSet => TradeDataErrorKind::QuantityPresence,
            Self::DenomMismatch { .. } => TradeDataErrorKind::DenomMismatch,
        }
    }
}

/// Every field a validation rule can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeField {
    AssetHolderId,
    AssetId,
    BaseCurrency,
    SettlementCurrency,
    Exchange,
    FundName,
    Issuer,
    CoinMintingPrice,
    Segment,
    Ticker,
    TradeFee,
    ExchangeRate,
    BrokerageCountry,
    BrokerageType,
    BrokerageName,
    SharePrice,
    ShareNetPrice,
    NumberOfShares,
    TradeValue,
    TradeNetValue,
}

impl TradeField {
    /// Returns the label used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeField::AssetHolderId => "asset_holder_id",
            TradeField::AssetId => "asset_id",
            TradeField::BaseCurrency => "base_currency",
            TradeField::SettlementCurrency => "settlement_currency",
            TradeField::Exchange => "exchange",
            TradeField::FundName => "fund_name",
            TradeField::Issuer => "issuer",
            TradeField::CoinMintingPrice => "coin_minting_price",
            TradeField::Segment => "segment",
            TradeField::Ticker => "ticker",
            TradeField::TradeFee => "trade_fee",
            TradeField::ExchangeRate => "exchange_rate",
            TradeField::BrokerageCountry => "brokerage country",
            TradeField::BrokerageType => "brokerage type",
            TradeField::BrokerageName => "brokerage name",
            TradeField::SharePrice => "share_price",
            TradeField::ShareNetPrice => "share_net_price",
            TradeField::NumberOfShares => "number_of_shares",
            TradeField::TradeValue => "trade_value",
            TradeField::TradeNetValue => "trade_net_value",
        }
    }
}

impl fmt::Display for TradeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The invariant a field failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule {
    Positive,
    NotBlank,
    NonNegative,
    /// Strictly positive, with the offending value echoed back.
    PositiveGot(Decimal),
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("must be greater than 0"),
            Self::NotBlank => f.write_str("must not be empty or whitespace"),
            Self::NonNegative => f.write_str("must be a non-negative number"),
            Self::PositiveGot(value) => write!(f, "must be greater than 0, got: {value}"),
        }
    }
}
