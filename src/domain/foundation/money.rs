//! Money value object.
//!
//! Prices travel over the wire as plain JSON numbers in dollars (`220`,
//! `149.5`). Internally they are whole cents so that totals add up exactly.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use super::ValidationError;

/// An amount of money in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(0);

    /// Largest single price accepted from the wire: one trillion dollars.
    pub const MAX_PRICE_CENTS: i64 = 100_000_000_000_000;

    /// Creates an amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates an amount from whole dollars.
    pub fn from_dollars(dollars: i64) -> Self {
        Self(dollars.saturating_mul(100))
    }

    /// Creates an amount from a dollar figure, rounding to the nearest cent.
    ///
    /// Amounts beyond `MAX_PRICE_CENTS` either way are rejected.
    pub fn try_from_dollars_f64(dollars: f64) -> Result<Self, ValidationError> {
        if !dollars.is_finite() {
            return Err(ValidationError::invalid_format("price", "not a finite number"));
        }
        let cents = (dollars * 100.0).round();
        if cents.abs() > Self::MAX_PRICE_CENTS as f64 {
            // Float-to-int casts saturate
            return Err(ValidationError::out_of_range(
                "price",
                -Self::MAX_PRICE_CENTS,
                Self::MAX_PRICE_CENTS,
                cents as i64,
            ));
        }
        Ok(Self(cents as i64))
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the amount in dollars as a float (for the wire only).
    pub fn as_dollars_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Saturates at the `i64` bounds.
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

/// Whole amounts print without decimals (`$220`), others with two (`$149.50`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        if abs % 100 == 0 {
            write!(f, "{}${}", sign, abs / 100)
        } else {
            write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_dollars_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        Money::try_from_dollars_f64(dollars).map_err(serde::de::Error::custom)
    }
}
