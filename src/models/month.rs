//! Calendar month selection
//!
//! Every ledger is addressed by a month number 1..=12. The selection `0` means
//! "return to the previous menu" and is handled before a `Month` is built.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GuardianError, GuardianResult};

/// A validated month of the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(u32);

impl Month {
    /// Create a month, failing with `InvalidMonth` outside 1..=12
    pub fn new(number: u32) -> GuardianResult<Self> {
        if (1..=12).contains(&number) {
            Ok(Self(number))
        } else {
            Err(GuardianError::InvalidMonth(number))
        }
    }

    /// Month number, 1 for January
    pub const fn number(&self) -> u32 {
        self.0
    }

    /// English month name ("January")
    pub fn name(&self) -> &'static str {
        u8::try_from(self.0)
            .ok()
            .and_then(|n| chrono::Month::try_from(n).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Self)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<u32> for Month {
    type Error = GuardianError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_months() {
        assert_eq!(Month::new(1).unwrap().name(), "January");
        assert_eq!(Month::new(12).unwrap().name(), "December");
        assert_eq!(Month::new(7).unwrap().to_string(), "July");
    }

    #[test]
    fn test_invalid_months() {
        assert!(matches!(Month::new(0), Err(GuardianError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(GuardianError::InvalidMonth(13))));
    }

    #[test]
    fn test_all_in_order() {
        let numbers: Vec<u32> = Month::all().map(|m| m.number()).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let month: Month = serde_json::from_str("3").unwrap();
        assert_eq!(month.name(), "March");
        assert!(serde_json::from_str::<Month>("13").is_err());
    }
}
