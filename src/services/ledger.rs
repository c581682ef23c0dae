//! Monthly ledger service
//!
//! Reads, allocates, saves and clears the budget and expense columns of one
//! user's month. The interactive flows in `session` decide *when* to call
//! these operations; this service decides *where* the values live and how
//! they are encoded.

use crate::error::GuardianResult;
use crate::models::{
    Amount, CategoryTemplate, LedgerRow, Month, MonthLedger, MonthStatus, RecordKind, UserRecord,
};
use crate::storage::init::EMPTY_CELL;
use crate::storage::ledger_store::{read_snapshot, sentinel_row, write_amounts};
use crate::storage::LedgerStore;

use super::addressing::column;
use super::allocator::allocate;

/// Service for one user's monthly ledgers
pub struct LedgerService<'a, S: LedgerStore + ?Sized> {
    store: &'a mut S,
    sheet: String,
    template: CategoryTemplate,
}

impl<'a, S: LedgerStore + ?Sized> LedgerService<'a, S> {
    /// Create a ledger service for a user, reading the template once
    pub fn new(store: &'a mut S, user: &UserRecord) -> GuardianResult<Self> {
        let template = store.read_template()?;
        Ok(Self {
            store,
            sheet: user.sheet_name(),
            template,
        })
    }

    /// The template the ledger rows follow
    pub fn template(&self) -> &CategoryTemplate {
        &self.template
    }

    /// Number of category rows
    pub fn category_count(&self) -> usize {
        self.template.len()
    }

    /// Whether the month holds a budget, decided by the sentinel cell only
    pub fn status(&self, month: Month) -> GuardianResult<MonthStatus> {
        let budget = read_snapshot(
            &*self.store,
            &self.sheet,
            column(month, RecordKind::Budget),
            self.category_count(),
        )?;

        Ok(if budget.is_empty() {
            MonthStatus::Empty
        } else {
            MonthStatus::Populated
        })
    }

    /// Header text of the month's budget column, falling back to its name
    pub fn month_label(&self, month: Month) -> GuardianResult<String> {
        let cells = self
            .store
            .read_column(&self.sheet, column(month, RecordKind::Budget))?;
        Ok(cells
            .first()
            .map(|h| h.trim())
            .filter(|h| !h.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| month.name().to_string()))
    }

    /// Stored budget and expenses of a month, zero-filled row for row
    pub fn load(&self, month: Month) -> GuardianResult<MonthLedger> {
        let rows = self.category_count();
        let budget = read_snapshot(&*self.store, &self.sheet, column(month, RecordKind::Budget), rows)?;
        let expense =
            read_snapshot(&*self.store, &self.sheet, column(month, RecordKind::Expense), rows)?;

        let ledger_rows = self
            .template
            .names()
            .zip(budget.values.iter().zip(&expense.values))
            .map(|(name, (b, e))| LedgerRow::new(name, *b, *e))
            .collect();

        let label = if budget.header.trim().is_empty() {
            month.name().to_string()
        } else {
            budget.header.trim().to_string()
        };

        let income = if budget.is_empty() {
            None
        } else {
            budget
                .sentinel
                .as_deref()
                .and_then(|text| Amount::parse(text).ok())
        };

        Ok(MonthLedger {
            month,
            label,
            rows: ledger_rows,
            income,
        })
    }

    /// A new budget for the month derived from `income`, not yet saved
    ///
    /// Stored expenses are carried into the draft so they can be shown
    /// alongside the new budget.
    pub fn draft(&self, month: Month, income: Amount) -> GuardianResult<MonthLedger> {
        let mut ledger = self.load(month)?;
        for (row, amount) in ledger.rows.iter_mut().zip(allocate(income, &self.template)) {
            row.budget = amount;
        }
        ledger.income = Some(income);
        Ok(ledger)
    }

    /// Write one column of the ledger back to the sheet
    ///
    /// Saving the budget column also writes the ledger's income into the
    /// sentinel row when it is known, which marks the month as populated.
    pub fn save(&mut self, ledger: &MonthLedger, kind: RecordKind) -> GuardianResult<()> {
        let col = column(ledger.month, kind);
        write_amounts(&mut *self.store, &self.sheet, col, &ledger.values(kind))?;

        if kind == RecordKind::Budget {
            if let Some(income) = ledger.income {
                self.store.write_cell(
                    &self.sheet,
                    sentinel_row(self.category_count()),
                    col,
                    &income.to_string(),
                )?;
            }
        }

        tracing::info!(
            sheet = %self.sheet,
            month = ledger.month.number(),
            kind = kind.noun(),
            total = %ledger.total(kind),
            "ledger column saved"
        );
        Ok(())
    }

    /// Soft delete: overwrite every data row and the sentinel with "0"
    pub fn clear(&mut self, month: Month, kind: RecordKind) -> GuardianResult<()> {
        let col = column(month, kind);
        for row in 1..=sentinel_row(self.category_count()) {
            self.store.write_cell(&self.sheet, row, col, EMPTY_CELL)?;
        }

        tracing::info!(
            sheet = %self.sheet,
            month = month.number(),
            kind = kind.noun(),
            "ledger column cleared"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DisplayName, Username};
    use crate::storage::init::{blank_sheet_rows, template_rows};
    use crate::storage::{MemoryWorkbook, Workbook, TEMPLATE_SHEET};

    fn user() -> UserRecord {
        UserRecord {
            id: 1,
            username: Username::parse("alice").unwrap(),
            display_name: DisplayName::parse("Alice").unwrap(),
        }
    }

    fn workbook() -> MemoryWorkbook {
        let template = CategoryTemplate::from_pairs([("Rent", 0.5), ("Food", 0.3), ("Fun", 0.2)]);
        let mut wb = MemoryWorkbook::new();
        wb.write_rows(TEMPLATE_SHEET, &template_rows(&template)).unwrap();
        wb.write_rows("1", &blank_sheet_rows(&template)).unwrap();
        wb
    }

    fn january() -> Month {
        Month::new(1).unwrap()
    }

    fn units(n: i64) -> Amount {
        Amount::from_units_cents(n, 0)
    }

    #[test]
    fn test_blank_month_is_empty() {
        let mut wb = workbook();
        let service = LedgerService::new(&mut wb, &user()).unwrap();

        assert_eq!(service.status(january()).unwrap(), MonthStatus::Empty);
        let ledger = service.load(january()).unwrap();
        assert_eq!(ledger.label, "January");
        assert_eq!(ledger.income, None);
        assert!(ledger.rows.iter().all(|r| r.budget.is_zero() && r.expense.is_zero()));
    }

    #[test]
    fn test_create_then_view_returns_computed_budget() {
        let mut wb = workbook();
        let mut service = LedgerService::new(&mut wb, &user()).unwrap();

        let draft = service.draft(january(), units(1000)).unwrap();
        assert_eq!(draft.values(RecordKind::Budget), vec![units(500), units(300), units(200)]);
        assert_eq!(service.status(january()).unwrap(), MonthStatus::Empty);

        service.save(&draft, RecordKind::Budget).unwrap();

        assert_eq!(service.status(january()).unwrap(), MonthStatus::Populated);
        let viewed = service.load(january()).unwrap();
        assert_eq!(viewed.values(RecordKind::Budget), draft.values(RecordKind::Budget));
        assert_eq!(viewed.income, Some(units(1000)));
    }

    #[test]
    fn test_zero_income_budget_is_populated() {
        let mut wb = workbook();
        let mut service = LedgerService::new(&mut wb, &user()).unwrap();

        let draft = service.draft(january(), Amount::zero()).unwrap();
        service.save(&draft, RecordKind::Budget).unwrap();

        assert_eq!(service.status(january()).unwrap(), MonthStatus::Populated);
    }

    #[test]
    fn test_update_one_category_leaves_others() {
        let mut wb = workbook();
        let mut service = LedgerService::new(&mut wb, &user()).unwrap();
        let draft = service.draft(january(), units(1000)).unwrap();
        service.save(&draft, RecordKind::Budget).unwrap();

        let mut ledger = service.load(january()).unwrap();
        assert!(ledger.set(2, RecordKind::Budget, units(42)));
        service.save(&ledger, RecordKind::Budget).unwrap();

        let stored = service.load(january()).unwrap();
        assert_eq!(stored.values(RecordKind::Budget), vec![units(500), units(42), units(200)]);
        assert_eq!(stored.income, Some(units(1000)));
    }

    #[test]
    fn test_expenses_are_saved_separately() {
        let mut wb = workbook();
        let mut service = LedgerService::new(&mut wb, &user()).unwrap();
        let draft = service.draft(january(), units(1000)).unwrap();
        service.save(&draft, RecordKind::Budget).unwrap();

        let mut ledger = service.load(january()).unwrap();
        ledger.set(1, RecordKind::Expense, units(450));
        service.save(&ledger, RecordKind::Expense).unwrap();

        let stored = service.load(january()).unwrap();
        assert_eq!(stored.values(RecordKind::Expense), vec![units(450), units(0), units(0)]);
        assert_eq!(stored.values(RecordKind::Budget), vec![units(500), units(300), units(200)]);

        // A new draft keeps the recorded expenses
        let redraft = service.draft(january(), units(2000)).unwrap();
        assert_eq!(redraft.rows[0].expense, units(450));
        assert_eq!(redraft.rows[0].budget, units(1000));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut wb = workbook();
        let sheet_column = column(january(), RecordKind::Budget);
        {
            let mut service = LedgerService::new(&mut wb, &user()).unwrap();
            let draft = service.draft(january(), units(1000)).unwrap();
            service.save(&draft, RecordKind::Budget).unwrap();
            service.clear(january(), RecordKind::Budget).unwrap();
        }
        let first = wb.column_values("1", sheet_column).unwrap();

        {
            let mut service = LedgerService::new(&mut wb, &user()).unwrap();
            service.clear(january(), RecordKind::Budget).unwrap();
            assert_eq!(service.status(january()).unwrap(), MonthStatus::Empty);
        }
        let second = wb.column_values("1", sheet_column).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, vec!["January", "0", "0", "0", "0"]);
    }

    #[test]
    fn test_months_are_independent() {
        let mut wb = workbook();
        let mut service = LedgerService::new(&mut wb, &user()).unwrap();
        let draft = service.draft(january(), units(1000)).unwrap();
        service.save(&draft, RecordKind::Budget).unwrap();

        let february = Month::new(2).unwrap();
        assert_eq!(service.status(february).unwrap(), MonthStatus::Empty);
        assert_eq!(service.month_label(february).unwrap(), "February");
    }

    #[test]
    fn test_missing_user_sheet_is_not_found() {
        let mut wb = workbook();
        let mut stranger = user();
        stranger.id = 99;
        let service = LedgerService::new(&mut wb, &stranger).unwrap();
        assert!(service.status(january()).unwrap_err().is_not_found());
    }
}
