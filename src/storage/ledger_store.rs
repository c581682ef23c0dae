//! Ledger store adapter
//!
//! The ledger engine only needs three operations from the tabular store:
//! read a column, write a cell and read the category template. Cell text is
//! converted to `Amount` here, at the boundary, and back to text only when
//! written.

use crate::error::{GuardianError, GuardianResult};
use crate::models::{Amount, CategoryTemplate, TemplateCategory};

use super::init::EMPTY_CELL;
use super::{Workbook, TEMPLATE_SHEET};

/// The narrow store contract used by the ledger engine
pub trait LedgerStore {
    /// All cells of a column; row 0 is the header
    fn read_column(&self, sheet: &str, column: usize) -> GuardianResult<Vec<String>>;

    /// Write one cell
    fn write_cell(&mut self, sheet: &str, row: usize, column: usize, value: &str)
        -> GuardianResult<()>;

    /// The shared category template, in row order
    fn read_template(&self) -> GuardianResult<CategoryTemplate>;
}

impl<W: Workbook + ?Sized> LedgerStore for W {
    fn read_column(&self, sheet: &str, column: usize) -> GuardianResult<Vec<String>> {
        self.column_values(sheet, column)
    }

    fn write_cell(
        &mut self,
        sheet: &str,
        row: usize,
        column: usize,
        value: &str,
    ) -> GuardianResult<()> {
        self.update_cell(sheet, row, column, value)
    }

    fn read_template(&self) -> GuardianResult<CategoryTemplate> {
        let rows = self.read_rows(TEMPLATE_SHEET)?;
        let mut categories = Vec::new();

        for (index, row) in rows.iter().enumerate().skip(1) {
            let name = row.first().map(|s| s.trim()).unwrap_or_default();
            if name.is_empty() {
                continue;
            }
            let cell = row.get(1).map(String::as_str).unwrap_or_default();
            let percentage = crate::models::template::parse_percentage(cell).map_err(|e| {
                GuardianError::Storage(format!("Template row {}: {}", index + 1, e))
            })?;
            categories.push(TemplateCategory::new(name, percentage));
        }

        let template = CategoryTemplate::new(categories);
        template
            .validate()
            .map_err(|e| GuardianError::Storage(format!("Invalid template: {}", e)))?;
        Ok(template)
    }
}

/// One stored column decoded for the engine
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSnapshot {
    /// Row 0 text, the month label
    pub header: String,

    /// Data rows 1..=n, blank or missing cells read as zero
    pub values: Vec<Amount>,

    /// Raw text of the sentinel row (row n + 1), if present
    pub sentinel: Option<String>,
}

impl ColumnSnapshot {
    /// True when the sentinel marks the column as holding nothing
    ///
    /// Only the literal "0" (or a missing/blank cell) counts as empty; the
    /// data rows are never inspected.
    pub fn is_empty(&self) -> bool {
        match self.sentinel.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(text) => text == EMPTY_CELL,
        }
    }
}

/// Row index of the sentinel for a template of `rows` categories
pub fn sentinel_row(rows: usize) -> usize {
    rows + 1
}

/// Read a column and decode its first `rows` data cells
pub fn read_snapshot<S: LedgerStore + ?Sized>(
    store: &S,
    sheet: &str,
    column: usize,
    rows: usize,
) -> GuardianResult<ColumnSnapshot> {
    let cells = store.read_column(sheet, column)?;

    let header = cells.first().cloned().unwrap_or_default();
    let values = (1..=rows)
        .map(|row| decode_cell(sheet, row, column, cells.get(row).map(String::as_str)))
        .collect::<GuardianResult<Vec<_>>>()?;
    let sentinel = cells.get(sentinel_row(rows)).cloned();

    Ok(ColumnSnapshot {
        header,
        values,
        sentinel,
    })
}

/// Write amounts into data rows 1..=n of a column
pub fn write_amounts<S: LedgerStore + ?Sized>(
    store: &mut S,
    sheet: &str,
    column: usize,
    values: &[Amount],
) -> GuardianResult<()> {
    for (index, value) in values.iter().enumerate() {
        store.write_cell(sheet, index + 1, column, &value.to_string())?;
    }
    Ok(())
}

fn decode_cell(sheet: &str, row: usize, column: usize, cell: Option<&str>) -> GuardianResult<Amount> {
    match cell.map(str::trim) {
        None | Some("") => Ok(Amount::zero()),
        Some(text) => Amount::parse(text).map_err(|e| {
            GuardianError::Storage(format!(
                "Sheet {} row {} column {}: {}",
                sheet, row, column, e
            ))
        }),
    }
}
