//! Amount type for budget and expense values
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Amounts entered by the user are never negative: the only accepted
//! text is a plain numeric literal with at most one decimal point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A non-negative monetary amount stored as cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Largest amount accepted from text, 10 trillion units
    ///
    /// Far below `i64::MAX / 100`, so a ledger of any realistic number of
    /// categories can be totalled without overflow.
    pub const MAX_CENTS: i64 = 1_000_000_000_000_000;

    /// Create an Amount from cents
    ///
    /// # Examples
    /// ```
    /// use finance_guardian::models::Amount;
    /// let amount = Amount::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an Amount from whole units and cents
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a zero Amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Scale by a fraction, rounding to the nearest cent
    pub fn scale(&self, fraction: f64) -> Self {
        Self((self.0 as f64 * fraction).round() as i64)
    }

    /// Parse an amount from a numeric literal
    ///
    /// Accepts ASCII digits with at most one decimal point, e.g. "10",
    /// "10.5", ".5" or "10.". Digits past the second decimal place are
    /// truncated. Signs, currency symbols, exponents and separators are
    /// rejected.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        let invalid = || AmountParseError::InvalidFormat(s.to_string());

        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        if !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(invalid());
        }

        let mut parts = s.splitn(2, '.');
        let units_str = parts.next().unwrap_or("");
        let cents_str = parts.next().unwrap_or("");

        if cents_str.contains('.') || (units_str.is_empty() && cents_str.is_empty()) {
            return Err(invalid());
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str.parse().map_err(|_| invalid())?
        };

        let cents: i64 = match cents_str.len() {
            0 => 0,
            1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => cents_str[..2].parse().map_err(|_| invalid())?,
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .filter(|c| *c <= Self::MAX_CENTS)
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.units(), self.cents_part())
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, m| acc + m)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "No amount entered"),
            AmountParseError::InvalidFormat(s) => write!(f, "Not a valid number: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
