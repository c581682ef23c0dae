//! Workbook initialization
//!
//! Handles first-run setup: the user directory, the category template and the
//! blank sheet every new user receives a copy of.

use crate::error::GuardianResult;
use crate::models::{CategoryTemplate, Month, RecordKind};
use crate::services::addressing::{column, CATEGORY_COLUMN, COLUMN_COUNT};

use super::{LedgerStore, Workbook, BLANK_SHEET, TEMPLATE_SHEET, USERS_SHEET};

/// Label of the trailing sentinel row
pub const SENTINEL_LABEL: &str = "Income";

/// Text of an empty cell
pub const EMPTY_CELL: &str = "0";

/// Initialize a workbook for a fresh installation
///
/// Missing sheets are created; existing sheets are left untouched. The blank
/// sheet is derived from the stored template, so edit the template before the
/// first run if the default categories do not fit.
pub fn initialize_workbook<W: Workbook + ?Sized>(workbook: &mut W) -> GuardianResult<()> {
    if !workbook.has_sheet(USERS_SHEET)? {
        workbook.create_sheet(USERS_SHEET, &[header(&["id", "username", "display_name"])])?;
        tracing::info!("created users sheet");
    }

    if !workbook.has_sheet(TEMPLATE_SHEET)? {
        workbook.create_sheet(TEMPLATE_SHEET, &template_rows(&CategoryTemplate::default_template()))?;
        tracing::info!("created default template sheet");
    }

    if !workbook.has_sheet(BLANK_SHEET)? {
        let template = workbook.read_template()?;
        workbook.create_sheet(BLANK_SHEET, &blank_sheet_rows(&template))?;
        tracing::info!(categories = template.len(), "created blank sheet");
    }

    Ok(())
}

/// Check if a workbook still needs initialization
pub fn needs_initialization<W: Workbook + ?Sized>(workbook: &W) -> GuardianResult<bool> {
    for sheet in [USERS_SHEET, TEMPLATE_SHEET, BLANK_SHEET] {
        if !workbook.has_sheet(sheet)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Rows of the template sheet
pub fn template_rows(template: &CategoryTemplate) -> Vec<Vec<String>> {
    let mut rows = vec![header(&["category", "percentage"])];
    rows.extend(
        template
            .categories
            .iter()
            .map(|c| vec![c.name.clone(), c.percentage.to_string()]),
    );
    rows
}

/// Rows of a blank per-user sheet
///
/// Row 0 holds the headers, one row per category follows, and the last row is
/// the sentinel row. Every value cell starts as "0".
pub fn blank_sheet_rows(template: &CategoryTemplate) -> Vec<Vec<String>> {
    let mut header_row = vec![String::new(); COLUMN_COUNT];
    header_row[CATEGORY_COLUMN] = "Categories".to_string();
    for month in Month::all() {
        header_row[column(month, RecordKind::Budget)] = month.name().to_string();
        header_row[column(month, RecordKind::Expense)] = format!("{} Expenses", month.name());
    }

    let value_row = |label: &str| {
        let mut row = vec![EMPTY_CELL.to_string(); COLUMN_COUNT];
        row[CATEGORY_COLUMN] = label.to_string();
        row
    };

    let mut rows = vec![header_row];
    rows.extend(template.names().map(value_row));
    rows.push(value_row(SENTINEL_LABEL));
    rows
}

fn header(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryWorkbook;

    #[test]
    fn test_initialize_creates_all_sheets() {
        let mut wb = MemoryWorkbook::new();
        assert!(needs_initialization(&wb).unwrap());

        initialize_workbook(&mut wb).unwrap();

        assert!(!needs_initialization(&wb).unwrap());
        assert_eq!(wb.read_rows(USERS_SHEET).unwrap().len(), 1);
        assert_eq!(wb.read_rows(TEMPLATE_SHEET).unwrap().len(), 11);
        assert_eq!(wb.read_rows(BLANK_SHEET).unwrap().len(), 12);
    }

    #[test]
    fn test_initialize_keeps_existing_template() {
        let mut wb = MemoryWorkbook::new();
        let template = CategoryTemplate::from_pairs([("Rent", 0.5), ("Food", 0.3), ("Fun", 0.2)]);
        wb.create_sheet(TEMPLATE_SHEET, &template_rows(&template)).unwrap();

        initialize_workbook(&mut wb).unwrap();
        initialize_workbook(&mut wb).unwrap();

        let blank = wb.read_rows(BLANK_SHEET).unwrap();
        let labels: Vec<&str> = blank.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(labels, vec!["Categories", "Rent", "Food", "Fun", "Income"]);
    }

    #[test]
    fn test_blank_sheet_layout() {
        let template = CategoryTemplate::from_pairs([("Rent", 0.5)]);
        let rows = blank_sheet_rows(&template);

        assert_eq!(rows[0].len(), COLUMN_COUNT);
        assert_eq!(rows[0][1], "January");
        assert_eq!(rows[0][2], "January Expenses");
        assert_eq!(rows[0][24], "December Expenses");
        assert!(rows[1][1..].iter().all(|c| c == "0"));
        assert_eq!(rows[2][0], SENTINEL_LABEL);
    }
}
