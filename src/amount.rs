//! Monetary amount type.
//!
//! `Amount` wraps `Decimal` and parses values that may carry a currency
//! prefix (e.g. `Ksh 1,500.00`) or thousands separators, while always
//! serializing as a bare decimal so the CSV files stay machine-readable.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

/// A monetary value.
///
/// Equality and ordering follow the underlying `Decimal`, so `1500` and
/// `1,500.00` parse to equal amounts.
///
/// # Examples
///
/// ```
/// # use shopbook::Amount;
/// # use std::str::FromStr;
/// let a = Amount::from_str("Ksh 1,500.00").unwrap();
/// let b = Amount::from_str("1500").unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Creates a new `Amount` from a `Decimal` value.
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying `Decimal` value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// The line total for a transaction row: unit price times quantity.
    pub fn times(&self, quantity: i64) -> Amount {
        Amount(self.0 * Decimal::from(quantity))
    }

    /// Formats the value with thousands separators and two decimal places,
    /// e.g. `1,500.00`. Used for report output, never for persistence.
    pub fn grouped(&self) -> String {
        let (sign, num) = if self.is_negative() {
            ("-", self.0.abs())
        } else {
            ("", self.0)
        };
        format!(
            "{sign}{}",
            format_num::format_num!(",.2", num.to_f64().unwrap_or_default())
        )
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Amount::default());
        }

        // Strip a currency prefix such as "Ksh" or "KES", with the minus
        // sign allowed on either side of it.
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };
        let rest = rest
            .trim_start_matches(|c: char| c.is_ascii_alphabetic())
            .trim_start();
        let (negative, rest) = match rest.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (negative, rest),
        };

        let cleaned = rest.replace(',', "");
        let value = Decimal::from_str(&cleaned)?;
        Ok(Amount(if negative { -value } else { value }))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Bare decimal string, e.g. "1500.00".
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount(Decimal::from(value))
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        Amount(iter.map(|a| a.0).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let amount = Amount::from_str("50.00").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("50.00").unwrap());
    }

    #[test]
    fn test_parse_with_currency_prefix() {
        let amount = Amount::from_str("Ksh 1,500.00").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("1500.00").unwrap());
    }

    #[test]
    fn test_parse_negative() {
        let amount = Amount::from_str("-250.50").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("-250.50").unwrap());
    }

    #[test]
    fn test_parse_negative_after_prefix() {
        let amount = Amount::from_str("Ksh -250").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("-250").unwrap());
    }

    #[test]
    fn test_parse_empty_is_zero() {
        let amount = Amount::from_str("").unwrap();
        assert!(amount.is_zero());
    }

    #[test]
    fn test_parse_commas_only() {
        let amount = Amount::from_str("1,234,567.89").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("1234567.89").unwrap());
    }

    #[test]
    fn test_equality_ignores_formatting() {
        let a = Amount::from_str("1500").unwrap();
        let b = Amount::from_str("1,500.00").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_times() {
        let price = Amount::from(10);
        assert_eq!(price.times(5), Amount::from(50));
    }

    #[test]
    fn test_grouped_display() {
        let amount = Amount::from_str("60000").unwrap();
        assert_eq!(amount.grouped(), "60,000.00");
        let negative = Amount::from_str("-60000").unwrap();
        assert_eq!(negative.grouped(), "-60,000.00");
    }

    #[test]
    fn test_serialize_bare() {
        let amount = Amount::from_str("1,500.00").unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"1500.00\"");
    }

    #[test]
    fn test_deserialize() {
        let amount: Amount = serde_json::from_str("\"250.75\"").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("250.75").unwrap());
    }

    #[test]
    fn test_sum() {
        let total: Amount = [Amount::from(1), Amount::from(2), Amount::from(3)]
            .into_iter()
            .sum();
        assert_eq!(total, Amount::from(6));
    }
}
