//! Application configuration loaded from environment variables.
//!
//! - `TRADE_GATE_DENOM_REGISTRY` — optional path to a JSON denom registry
//! - `TRADE_GATE_DEFAULT_CURRENCY` — optional override of the registry's
//!   default currency
//!
//! Without either variable the `u<code>v` convention with a GBP default applies.

use std::path::PathBuf;

use crate::denom::DenomRegistry;

/// Environment variable naming the denom registry file.
pub const DENOM_REGISTRY_VAR: &str = "TRADE_GATE_DENOM_REGISTRY";

/// Environment variable overriding the default currency.
pub const DEFAULT_CURRENCY_VAR: &str = "TRADE_GATE_DEFAULT_CURRENCY";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub registry_path: Option<PathBuf>,
    pub registry: DenomRegistry,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`GateError::Config`](crate::GateError::Config) if the registry
/// file cannot be read, or a JSON error if it cannot be parsed.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let registry_path = non_empty_var(DENOM_REGISTRY_VAR).map(PathBuf::from);

    let mut registry = match &registry_path {
        Some(path) => DenomRegistry::load(path)?,
        None => DenomRegistry::default(),
    };

    if let Some(currency) = non_empty_var(DEFAULT_CURRENCY_VAR) {
        registry = registry.with_default_currency(&currency);
    }

    if registry.default_currency.trim().is_empty() {
        return Err(crate::GateError::Config(
            "default currency must not be empty".to_string(),
        ));
    }

    Ok(AppConfig {
        registry_path,
        registry,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.trim().is_empty())
}
