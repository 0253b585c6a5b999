//! Trade type discriminator and its quantity grouping.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Kind of trade a payload describes.
///
/// On the wire this is an integer code (names are accepted as well).
/// Codes outside the known set decode to [`TradeType::Unrecognized`] so
/// they are rejected by validation rather than by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TradeType {
    /// Unset value (code `0`); never valid.
    #[default]
    Unspecified,
    Buy,
    Sell,
    FiatDeposit,
    FiatWithdrawal,
    Unrecognized(i64),
}

impl TradeType {
    /// Maps a wire code to a trade type.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => TradeType::Unspecified,
            1 => TradeType::Buy,
            2 => TradeType::Sell,
            3 => TradeType::FiatDeposit,
            4 => TradeType::FiatWithdrawal,
            other => TradeType::Unrecognized(other),
        }
    }

    /// Returns the wire code.
    pub fn code(&self) -> i64 {
        match self {
            TradeType::Unspecified => 0,
            TradeType::Buy => 1,
            TradeType::Sell => 2,
            TradeType::FiatDeposit => 3,
            TradeType::FiatWithdrawal => 4,
            TradeType::Unrecognized(code) => *code,
        }
    }

    /// Whether a trade of this type must carry a quantity.
    ///
    /// Buy and sell require a positive quantity in the expected denom; fiat
    /// deposit and withdrawal must not carry one. `None` for an unset or
    /// unknown type.
    pub fn requires_quantity(&self) -> Option<bool> {
        match self {
            TradeType::Buy | TradeType::Sell => Some(true),
            TradeType::FiatDeposit | TradeType::FiatWithdrawal => Some(false),
            TradeType::Unspecified | TradeType::Unrecognized(_) => None,
        }
    }

    /// Returns `true` for every named variant except [`TradeType::Unspecified`].
    pub fn is_known(&self) -> bool {
        self.requires_quantity().is_some()
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeType::Unspecified => f.write_str("unspecified"),
            TradeType::Buy => f.write_str("buy"),
            TradeType::Sell => f.write_str("sell"),
            TradeType::FiatDeposit => f.write_str("fiat-deposit"),
            TradeType::FiatWithdrawal => f.write_str("fiat-withdrawal"),
            TradeType::Unrecognized(code) => write!(f, "unrecognized({code})"),
        }
    }
}

impl FromStr for TradeType {
    type Err = String;

    /// Parses `buy`, `fiat-deposit`, `TRADE_TYPE_FIAT_DEPOSIT` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let name = normalized
            .strip_prefix("trade_type_")
            .unwrap_or(&normalized);
        match name {
            "unspecified" | "nil" => Ok(TradeType::Unspecified),
            "buy" => Ok(TradeType::Buy),
            "sell" => Ok(TradeType::Sell),
            "fiat_deposit" => Ok(TradeType::FiatDeposit),
            "fiat_withdrawal" => Ok(TradeType::FiatWithdrawal),
            _ => Err(format!("unknown trade type: {s}")),
        }
    }
}

impl Serialize for TradeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for TradeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(i64),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Code(code) => Ok(TradeType::from_code(code)),
            Raw::Name(name) => name.parse().map_err(de::Error::custom),
        }
    }
}
