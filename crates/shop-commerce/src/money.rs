//! Price type for representing monetary values.
//!
//! Prices are exact decimals so that `10.1 * 3` is `30.3`, not
//! `30.299999999999997`. On the wire they are plain JSON numbers, matching
//! what the REST service and persisted carts contain.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;

/// Display symbol for the store's currency (CNY).
pub const CURRENCY_SYMBOL: &str = "\u{00a5}";

/// A unit price or amount in the store's single currency.
///
/// Deserialization is lenient: numbers and numeric strings are accepted,
/// anything else (null, garbage text, objects) becomes zero instead of an
/// error, so one malformed field never poisons a whole cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// Zero.
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Wrap an exact decimal.
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Build a price from an integer amount and a scale.
    ///
    /// ```
    /// use shop_commerce::money::Price;
    /// let price = Price::from_parts(4999, 2);
    /// assert_eq!(price.to_string(), "\u{00a5}49.99");
    /// ```
    pub fn from_parts(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    /// The underlying decimal.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Convert to a float, for wire formats that need one.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// Multiply by a quantity, saturating instead of overflowing.
    pub fn multiply(&self, quantity: i64) -> Price {
        Price(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        format!("{:.2}", self.0)
    }

    /// Coerce an arbitrary JSON value to a price. Non-numeric input is zero.
    pub fn from_json_lenient(value: &serde_json::Value) -> Price {
        match value {
            serde_json::Value::Number(n) => parse_decimal(&n.to_string()),
            serde_json::Value::String(s) => parse_decimal(s),
            _ => Price::ZERO,
        }
    }
}

fn parse_decimal(text: &str) -> Price {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map(Price)
        .unwrap_or(Price::ZERO)
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<i32> for Price {
    fn from(amount: i32) -> Self {
        Self(Decimal::from(amount))
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Price)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl Mul<i64> for Price {
    type Output = Price;

    fn mul(self, quantity: i64) -> Price {
        self.multiply(quantity)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CURRENCY_SYMBOL, self.display_amount())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.to_i64() {
            Some(whole) if self.0.fract().is_zero() => serializer.serialize_i64(whole),
            _ => serializer.serialize_f64(self.to_f64()),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Price::from_json_lenient(&value))
    }
}

/// Lenient integer deserialization for counts.
///
/// Mirrors how the storefront has always read quantities: integers pass
/// through, fractional numbers truncate, numeric strings parse, and
/// anything else is zero.
pub mod lenient {
    use serde::{Deserialize, Deserializer};

    /// Coerce an arbitrary JSON value to an integer count.
    pub fn count_from_json(value: &serde_json::Value) -> i64 {
        match value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
                .unwrap_or(0),
            serde_json::Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// `deserialize_with` adapter for [`count_from_json`].
    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(count_from_json(&value))
    }
}
