//! In-memory workbook
//!
//! Keeps sheets in a map; used by tests and by callers that want to run the
//! ledger without touching disk.

use std::collections::BTreeMap;

use crate::error::{GuardianError, GuardianResult};

use super::{validate_sheet_name, Workbook};

/// Workbook backed by a map of sheet name to rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryWorkbook {
    sheets: BTreeMap<String, Vec<Vec<String>>>,
}

impl MemoryWorkbook {
    /// Create an empty workbook
    pub fn new() -> Self {
        Self::default()
    }
}

impl Workbook for MemoryWorkbook {
    fn sheet_names(&self) -> GuardianResult<Vec<String>> {
        Ok(self.sheets.keys().cloned().collect())
    }

    fn read_rows(&self, sheet: &str) -> GuardianResult<Vec<Vec<String>>> {
        self.sheets
            .get(sheet)
            .cloned()
            .ok_or_else(|| GuardianError::sheet_not_found(sheet))
    }

    fn write_rows(&mut self, sheet: &str, rows: &[Vec<String>]) -> GuardianResult<()> {
        validate_sheet_name(sheet)?;
        self.sheets.insert(sheet.to_string(), rows.to_vec());
        Ok(())
    }

    fn has_sheet(&self, sheet: &str) -> GuardianResult<bool> {
        Ok(self.sheets.contains_key(sheet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sheet_is_not_found() {
        let wb = MemoryWorkbook::new();
        let err = wb.read_rows("users").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Sheet not found: users");
    }

    #[test]
    fn test_write_then_read() {
        let mut wb = MemoryWorkbook::new();
        let rows = vec![vec!["a".to_string(), "b".to_string()]];
        wb.write_rows("sheet", &rows).unwrap();
        assert_eq!(wb.read_rows("sheet").unwrap(), rows);
        assert_eq!(wb.sheet_names().unwrap(), vec!["sheet"]);
    }
}
