//! Storage layer for Finance Guardian
//!
//! All persistent state lives in a workbook: a set of named sheets addressed
//! by (row, column). `CsvWorkbook` keeps one CSV file per sheet with atomic
//! writes; `MemoryWorkbook` keeps sheets in memory.

pub mod csv_workbook;
pub mod file_io;
pub mod init;
pub mod ledger_store;
pub mod memory;

pub use csv_workbook::CsvWorkbook;
pub use init::{blank_sheet_rows, initialize_workbook};
pub use ledger_store::{ColumnSnapshot, LedgerStore};
pub use memory::MemoryWorkbook;

use crate::error::{GuardianError, GuardianResult};

/// Sheet holding one row per user
pub const USERS_SHEET: &str = "users";
/// Sheet holding the shared category template
pub const TEMPLATE_SHEET: &str = "template";
/// Sheet copied for every new user
pub const BLANK_SHEET: &str = "blank";

/// A row/column addressed tabular store
///
/// Implementors provide whole-sheet reads and writes; cell level operations
/// are derived from them. Every write is visible to the next read.
pub trait Workbook {
    /// Names of all sheets, sorted
    fn sheet_names(&self) -> GuardianResult<Vec<String>>;

    /// All rows of a sheet
    fn read_rows(&self, sheet: &str) -> GuardianResult<Vec<Vec<String>>>;

    /// Replace the content of a sheet, creating it if needed
    fn write_rows(&mut self, sheet: &str, rows: &[Vec<String>]) -> GuardianResult<()>;

    /// Check whether a sheet exists
    fn has_sheet(&self, sheet: &str) -> GuardianResult<bool> {
        Ok(self.sheet_names()?.iter().any(|name| name == sheet))
    }

    /// Create a new sheet, failing if the name is taken
    fn create_sheet(&mut self, sheet: &str, rows: &[Vec<String>]) -> GuardianResult<()> {
        if self.has_sheet(sheet)? {
            return Err(GuardianError::Duplicate {
                entity_type: "Sheet",
                identifier: sheet.to_string(),
            });
        }
        self.write_rows(sheet, rows)
    }

    /// All cells of one column, top to bottom; short rows read as ""
    fn column_values(&self, sheet: &str, column: usize) -> GuardianResult<Vec<String>> {
        Ok(self
            .read_rows(sheet)?
            .into_iter()
            .map(|row| row.get(column).cloned().unwrap_or_default())
            .collect())
    }

    /// Write a single cell, growing the sheet as needed
    fn update_cell(
        &mut self,
        sheet: &str,
        row: usize,
        column: usize,
        value: &str,
    ) -> GuardianResult<()> {
        let mut rows = self.read_rows(sheet)?;
        set_cell(&mut rows, row, column, value);
        self.write_rows(sheet, &rows)
    }

    /// Append a row at the bottom of a sheet
    fn append_row(&mut self, sheet: &str, row: Vec<String>) -> GuardianResult<()> {
        let mut rows = self.read_rows(sheet)?;
        rows.push(row);
        self.write_rows(sheet, &rows)
    }

    /// Index of the first row whose cell in `column` equals `value`
    fn find_row(&self, sheet: &str, column: usize, value: &str) -> GuardianResult<Option<usize>> {
        Ok(self
            .read_rows(sheet)?
            .iter()
            .position(|row| row.get(column).map(String::as_str) == Some(value)))
    }

    /// Copy a sheet under a new name
    fn duplicate_sheet(&mut self, source: &str, new_name: &str) -> GuardianResult<()> {
        let rows = self.read_rows(source)?;
        self.create_sheet(new_name, &rows)
    }
}

/// Set a cell in an in-memory grid, padding rows and columns with ""
pub(crate) fn set_cell(rows: &mut Vec<Vec<String>>, row: usize, column: usize, value: &str) {
    if rows.len() <= row {
        rows.resize_with(row + 1, Vec::new);
    }
    let cells = &mut rows[row];
    if cells.len() <= column {
        cells.resize(column + 1, String::new());
    }
    cells[column] = value.to_string();
}

/// Check that a sheet name is usable as a file stem
pub(crate) fn validate_sheet_name(name: &str) -> GuardianResult<()> {
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(GuardianError::Storage(format!("Invalid sheet name: '{}'", name)));
    }
    Ok(())
}
