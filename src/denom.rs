//! Currency to on-chain denom mapping.
//!
//! Every fiat-backed token follows the `u<code>v` convention, e.g. `GBP`
//! maps to `ugbpv`. Environments that mint under a different unit can
//! supply a [`DenomRegistry`] with per-currency overrides.

use std::collections::HashMap;
use std::path::Path;

use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Currency used when a trade carries no base currency of its own.
pub const DEFAULT_CURRENCY: &str = "GBP";

/// Denom of [`DEFAULT_CURRENCY`].
pub const DEFAULT_DENOM: &str = "ugbpv";

/// Returns the denom a quantity in `currency` must be expressed in.
pub fn denom_for_currency(currency: &str) -> String {
    format!("u{}v", currency.trim().to_lowercase())
}

/// Currency to denom lookup, loaded from `denoms.json` when present.
#[derive(Debug, Clone, Deserialize)]
pub struct DenomRegistry {
    /// Currency assumed when the trade does not name one.
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// Per-currency denoms that replace the `u<code>v` convention, keyed
    /// by trimmed upper-case currency code.
    #[serde(default, deserialize_with = "normalized_overrides")]
    pub overrides: HashMap<String, String>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn currency_key(currency: &str) -> String {
    currency.trim().to_uppercase()
}

/// Keys that collide once normalized (`usd` and `USD`) are rejected.
fn normalized_overrides<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<String, String>::deserialize(deserializer)?;
    let mut overrides = HashMap::with_capacity(raw.len());
    for (currency, denom) in raw {
        let key = currency_key(&currency);
        if overrides.insert(key.clone(), denom).is_some() {
            return Err(de::Error::custom(format!(
                "duplicate denom override for currency {key}"
            )));
        }
    }
    Ok(overrides)
}

impl Default for DenomRegistry {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            overrides: HashMap::new(),
        }
    }
}

impl DenomRegistry {
    /// Loads a registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            crate::GateError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let registry: Self = serde_json::from_str(&contents)?;
        Ok(registry)
    }

    /// Replaces the default currency.
    #[must_use]
    pub fn with_default_currency(mut self, currency: &str) -> Self {
        self.default_currency = currency.trim().to_string();
        self
    }

    /// Adds or replaces the override for `currency`.
    #[must_use]
    pub fn with_override(mut self, currency: &str, denom: &str) -> Self {
        self.overrides.insert(currency_key(currency), denom.to_string());
        self
    }

    /// Returns the denom for `currency`, honouring overrides.
    ///
    /// Currency codes are compared case-insensitively.
    pub fn denom_for(&self, currency: &str) -> String {
        self.overrides
            .get(&currency_key(currency))
            .cloned()
            .unwrap_or_else(|| denom_for_currency(currency))
    }

    /// Returns the denom a trade in `base_currency` must carry.
    ///
    /// Falls back to the default currency when `base_currency` is blank.
    pub fn expected_denom(&self, base_currency: &str) -> String {
        if base_currency.trim().is_empty() {
            self.denom_for(&self.default_currency)
        } else {
            self.denom_for(base_currency)
        }
    }
}
