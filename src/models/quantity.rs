//! On-chain token amount attached to a trade.

use serde::{Deserialize, Serialize};

/// Token amount and the denom it is expressed in.
///
/// `amount` is `None` when the payload omits it or sends an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "amount")]
    pub amount: Option<u128>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub denom: String,
}

impl Quantity {
    /// Creates a quantity with both fields set.
    #[must_use]
    pub fn new(amount: u128, denom: &str) -> Self {
        Self {
            amount: Some(amount),
            denom: denom.to_string(),
        }
    }

    /// Both the amount and a non-blank denom are present.
    pub fn is_well_formed(&self) -> bool {
        self.amount.is_some() && !self.denom.trim().is_empty()
    }

    /// The amount is present and zero.
    pub fn is_zero(&self) -> bool {
        self.amount == Some(0)
    }

    /// A non-zero amount in a non-blank denom.
    pub fn carries_value(&self) -> bool {
        matches!(self.amount, Some(amount) if amount > 0) && !self.denom.trim().is_empty()
    }
}

/// Amounts travel as decimal strings; bare JSON integers are accepted too.
mod amount {
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};

    pub fn serialize<S: Serializer>(amount: &Option<u128>, serializer: S) -> Result<S::Ok, S::Error> {
        match amount {
            Some(value) => serializer.collect_str(value),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u128>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Number(n)) => Ok(Some(u128::from(n))),
            Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(Raw::Text(s)) => s
                .trim()
                .parse::<u128>()
                .map(Some)
                .map_err(|e| de::Error::custom(format!("invalid amount {s:?}: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_from_string_or_number() {
        let q: Quantity =
            serde_json::from_str(r#"{"amount":"162075000000000","denom":"ugbpv"}"#).unwrap();
        assert_eq!(q, Quantity::new(162_075_000_000_000, "ugbpv"));

        let q: Quantity = serde_json::from_str(r#"{"amount":5,"denom":"ugbpv"}"#).unwrap();
        assert_eq!(q.amount, Some(5));
    }

    #[test]
    fn missing_or_empty_amount_is_none() {
        let q: Quantity = serde_json::from_str(r#"{"denom":"ugbpv"}"#).unwrap();
        assert_eq!(q.amount, None);
        assert!(!q.is_well_formed());

        let q: Quantity = serde_json::from_str(r#"{"amount":"","denom":""}"#).unwrap();
        assert_eq!(q.amount, None);
    }

    #[test]
    fn null_denom_and_extra_keys() {
        let q: Quantity =
            serde_json::from_str(r#"{"amount":"7","denom":null,"precision":6}"#).unwrap();
        assert_eq!(q.amount, Some(7));
        assert_eq!(q.denom, "");
        assert!(!q.is_well_formed());
    }

    #[test]
    fn negative_amount_is_rejected() {
        assert!(serde_json::from_str::<Quantity>(r#"{"amount":"-5","denom":"ugbpv"}"#).is_err());
    }

    #[test]
    fn predicates() {
        let q = Quantity::new(0, "ugbpv");
        assert!(q.is_well_formed());
        assert!(q.is_zero());
        assert!(!q.carries_value());

        let q = Quantity::new(100, "  ");
        assert!(!q.is_well_formed());
        assert!(!q.carries_value());

        assert!(Quantity::new(100, "ugbpv").carries_value());
        assert!(!Quantity::default().carries_value());
    }

    #[test]
    fn amount_serializes_as_string() {
        let json = serde_json::to_string(&Quantity::new(42, "ugbpv")).unwrap();
        assert_eq!(json, r#"{"amount":"42","denom":"ugbpv"}"#);
    }
}
