//! Exact decimal money amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// A money amount with two decimal places, stored as whole cents.
///
/// Serialized as a decimal string (`"1.99"`) so no precision is lost on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    cents: i64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub const fn cents(self) -> i64 {
        self.cents
    }

    /// Price of `quantity` units. Saturates at the `i64` cent range.
    pub fn times(self, quantity: u32) -> Self {
        Self {
            cents: self.cents.saturating_mul(i64::from(quantity)),
        }
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        self.cents = self.cents.saturating_add(rhs.cents);
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price '{0}'")]
pub struct PriceParseError(String);

impl FromStr for Price {
    type Err = PriceParseError;

    /// Accepts `12`, `12.5`, `12.50` and `-0.99`. Digits past the second
    /// decimal place must be zero; amounts are never rounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PriceParseError(s.to_string());
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > 2 && fraction[2..].bytes().any(|b| b != b'0') {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let mut cents_part = fraction.get(..2).unwrap_or(fraction).to_string();
        while cents_part.len() < 2 {
            cents_part.push('0');
        }
        let fraction: i64 = cents_part.parse().map_err(|_| invalid())?;

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(invalid)?;
        Ok(Self {
            cents: if negative { -cents } else { cents },
        })
    }
}

impl TryFrom<String> for Price {
    type Error = PriceParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("1.99".parse::<Price>().unwrap(), Price::from_cents(199));
        assert_eq!("2".parse::<Price>().unwrap(), Price::from_cents(200));
        assert_eq!("2.5".parse::<Price>().unwrap(), Price::from_cents(250));
        assert_eq!("3.490".parse::<Price>().unwrap(), Price::from_cents(349));
        assert_eq!("-0.05".parse::<Price>().unwrap(), Price::from_cents(-5));
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::from_cents(-150).to_string(), "-1.50");
    }

    #[test]
    fn test_rejects_inexact_or_malformed_amounts() {
        for input in ["", ".5", "1.999", "abc", "1.2.3", "1,99", "--1"] {
            assert!(input.parse::<Price>().is_err(), "{input} should not parse");
        }
    }

    #[test]
    fn test_arithmetic_is_exact() {
        let total: Price = [Price::from_cents(199).times(3), Price::from_cents(10)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(607));
    }

    #[test]
    fn test_large_amounts_saturate_instead_of_wrapping() {
        let max = Price::from_cents(i64::MAX);
        assert_eq!(max.times(u32::MAX), max);
        assert_eq!(Price::from_cents(-2).times(u32::MAX), Price::from_cents(-2 * i64::from(u32::MAX)));
        assert_eq!(Price::from_cents(i64::MIN / 2).times(4), Price::from_cents(i64::MIN));
        assert_eq!(max + Price::from_cents(1), max);

        let mut total = max;
        total += max;
        assert_eq!(total, max);
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Price::from_cents(1234)).unwrap();
        assert_eq!(json, "\"12.34\"");
        let back: Price = serde_json::from_str("\"0.99\"").unwrap();
        assert_eq!(back, Price::from_cents(99));
    }
}
