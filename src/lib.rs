//! Validation gate for real-world-asset trade data payloads.
//!
//! Decodes the JSON trade data attached to a ledger transaction (brokerage
//! buy/sell or fiat deposit/withdrawal) and decides, before any balance is
//! touched, whether it is well-formed and internally consistent.

pub mod config;
pub mod decode;
pub mod denom;
pub mod error;
pub mod models;
pub mod sample;
pub mod validation;

pub use error::{GateError, Result, TradeDataError};
pub use validation::{TradeValidator, validate_trade_data};
