//! Month ledger model
//!
//! A month ledger pairs every template category with its budget and expense
//! amounts for one month. Rows are kept as single records so the budget and
//! expense values can never drift out of alignment with their category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::month::Month;

/// Which of the two monthly columns a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Allocated amounts
    Budget,
    /// Recorded transactions
    Expense,
}

impl RecordKind {
    /// Noun used in prompts ("budget", "transactions")
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Expense => "transactions",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Budget => write!(f, "Budget"),
            Self::Expense => write!(f, "Expenses"),
        }
    }
}

/// Whether a month currently holds a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStatus {
    /// Sentinel cell is "0": nothing recorded
    Empty,
    /// A budget has been saved for the month
    Populated,
}

/// One category row of a month ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub category: String,
    pub budget: Amount,
    pub expense: Amount,
}

impl LedgerRow {
    /// Create a new row
    pub fn new(category: impl Into<String>, budget: Amount, expense: Amount) -> Self {
        Self {
            category: category.into(),
            budget,
            expense,
        }
    }

    /// Value of the given column
    pub fn value(&self, kind: RecordKind) -> Amount {
        match kind {
            RecordKind::Budget => self.budget,
            RecordKind::Expense => self.expense,
        }
    }

    /// Set the value of the given column
    pub fn set_value(&mut self, kind: RecordKind, amount: Amount) {
        match kind {
            RecordKind::Budget => self.budget = amount,
            RecordKind::Expense => self.expense = amount,
        }
    }
}

/// Budget and expenses of one user for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthLedger {
    /// The month this ledger covers
    pub month: Month,

    /// Header text of the budget column
    pub label: String,

    /// One row per template category, in template order
    pub rows: Vec<LedgerRow>,

    /// Income the budget was derived from, if known
    pub income: Option<Amount>,
}

impl MonthLedger {
    /// Create a ledger
    pub fn new(month: Month, label: impl Into<String>, rows: Vec<LedgerRow>) -> Self {
        Self {
            month,
            label: label.into(),
            rows,
            income: None,
        }
    }

    /// Values of one column in row order
    pub fn values(&self, kind: RecordKind) -> Vec<Amount> {
        self.rows.iter().map(|r| r.value(kind)).collect()
    }

    /// Total of one column
    pub fn total(&self, kind: RecordKind) -> Amount {
        self.rows.iter().map(|r| r.value(kind)).sum()
    }

    /// Set the value of the category at a 1-based position
    ///
    /// Returns false when the position is outside the ledger.
    pub fn set(&mut self, position: usize, kind: RecordKind, amount: Amount) -> bool {
        match position.checked_sub(1).and_then(|i| self.rows.get_mut(i)) {
            Some(row) => {
                row.set_value(kind, amount);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> MonthLedger {
        MonthLedger::new(
            Month::new(1).unwrap(),
            "January",
            vec![
                LedgerRow::new("Rent", Amount::from_cents(50_000), Amount::from_cents(45_000)),
                LedgerRow::new("Food", Amount::from_cents(30_000), Amount::zero()),
            ],
        )
    }

    #[test]
    fn test_values_and_totals() {
        let ledger = ledger();
        assert_eq!(
            ledger.values(RecordKind::Budget),
            vec![Amount::from_cents(50_000), Amount::from_cents(30_000)]
        );
        assert_eq!(ledger.total(RecordKind::Budget).cents(), 80_000);
        assert_eq!(ledger.total(RecordKind::Expense).cents(), 45_000);
    }

    #[test]
    fn test_set_by_position() {
        let mut ledger = ledger();
        assert!(ledger.set(2, RecordKind::Expense, Amount::from_cents(1_234)));
        assert_eq!(ledger.rows[1].expense.cents(), 1_234);
        assert_eq!(ledger.rows[0].expense.cents(), 45_000);

        assert!(!ledger.set(0, RecordKind::Budget, Amount::zero()));
        assert!(!ledger.set(3, RecordKind::Budget, Amount::zero()));
    }

    #[test]
    fn test_record_kind_labels() {
        assert_eq!(RecordKind::Budget.noun(), "budget");
        assert_eq!(RecordKind::Expense.noun(), "transactions");
        assert_eq!(RecordKind::Expense.to_string(), "Expenses");
    }
}
