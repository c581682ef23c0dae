//! CSV-backed workbook
//!
//! Each sheet is stored as `<name>.csv` inside the workbook directory.

use std::path::PathBuf;

use crate::error::{GuardianError, GuardianResult};

use super::file_io::{read_csv_rows, write_csv_atomic};
use super::{validate_sheet_name, Workbook};

/// Workbook stored as a directory of CSV files
#[derive(Debug, Clone)]
pub struct CsvWorkbook {
    dir: PathBuf,
}

impl CsvWorkbook {
    /// Open a workbook directory, creating it if needed
    pub fn open(dir: impl Into<PathBuf>) -> GuardianResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            GuardianError::Storage(format!("Failed to create workbook {}: {}", dir.display(), e))
        })?;
        Ok(Self { dir })
    }

    /// Directory holding the sheet files
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn sheet_path(&self, sheet: &str) -> GuardianResult<PathBuf> {
        validate_sheet_name(sheet)?;
        Ok(self.dir.join(format!("{}.csv", sheet)))
    }
}

impl Workbook for CsvWorkbook {
    fn sheet_names(&self) -> GuardianResult<Vec<String>> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            GuardianError::Storage(format!("Failed to list {}: {}", self.dir.display(), e))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("csv") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_rows(&self, sheet: &str) -> GuardianResult<Vec<Vec<String>>> {
        let path = self.sheet_path(sheet)?;
        if !path.exists() {
            return Err(GuardianError::sheet_not_found(sheet));
        }
        read_csv_rows(&path)
    }

    fn write_rows(&mut self, sheet: &str, rows: &[Vec<String>]) -> GuardianResult<()> {
        let path = self.sheet_path(sheet)?;
        write_csv_atomic(&path, rows)?;
        tracing::debug!(sheet, rows = rows.len(), "sheet written");
        Ok(())
    }

    fn has_sheet(&self, sheet: &str) -> GuardianResult<bool> {
        Ok(self.sheet_path(sheet)?.exists())
    }
}
