//! Column addressing
//!
//! Maps a month and record kind to the column of a user sheet. Column 0 holds
//! the category labels; month `m` owns columns `2m - 1` (budget) and `2m`
//! (expenses).

use crate::error::GuardianResult;
use crate::models::{Month, RecordKind};

/// Column holding the category labels
pub const CATEGORY_COLUMN: usize = 0;

/// Total number of columns in a user sheet
pub const COLUMN_COUNT: usize = 1 + 12 * 2;

/// Column of a validated month
pub fn column(month: Month, kind: RecordKind) -> usize {
    let budget = 2 * month.number() as usize - 1;
    match kind {
        RecordKind::Budget => budget,
        RecordKind::Expense => budget + 1,
    }
}

/// Column of a raw month number
///
/// Fails with `InvalidMonth` for anything outside 1..=12, including the
/// "return" selection 0.
pub fn column_for(month: u32, kind: RecordKind) -> GuardianResult<usize> {
    Ok(column(Month::new(month)?, kind))
}
