//! Money value object for currency amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use crate::domain::shared::DomainError;

/// Number of fractional digits in the reservation store's amount columns.
///
/// Every amount rendered at an API or cache boundary carries exactly this
/// many digits after the decimal point.
pub const AMOUNT_SCALE: u32 = 3;

/// A monetary amount.
///
/// Represented as a [`Decimal`] so summation is exact base-10 arithmetic.
/// Amounts never pass through a binary float between the reservation store
/// and the API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new Money value from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Parse a decimal-literal string such as `"333.333"`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if the input is not a finite
    /// base-10 number.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        Decimal::from_str(input.trim())
            .map(Self)
            .map_err(|e| DomainError::InvalidAmount {
                input: input.to_string(),
                message: e.to_string(),
            })
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Render with exactly [`AMOUNT_SCALE`] fractional digits.
    ///
    /// This is the canonical wire form (`"1000.000"`), produced directly
    /// from the decimal representation.
    #[must_use]
    pub fn to_amount_string(&self) -> String {
        format!("{:.1$}", self.0, AMOUNT_SCALE as usize)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_amount_string())
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}
