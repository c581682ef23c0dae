//! File I/O utilities with atomic writes
//!
//! Provides safe sheet file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::GuardianError;

/// Read every record of a CSV file as rows of strings
///
/// Rows may have different lengths; the first row is data, not a header.
pub fn read_csv_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, GuardianError> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| GuardianError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            GuardianError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

/// Write rows to a CSV file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_csv_atomic<P: AsRef<Path>>(path: P, rows: &[Vec<String>]) -> Result<(), GuardianError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            GuardianError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| GuardianError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(BufWriter::new(file));

    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| GuardianError::Storage(format!("Failed to serialize row: {}", e)))?;
    }

    let mut buffered = writer
        .into_inner()
        .map_err(|e| GuardianError::Storage(format!("Failed to flush data: {}", e)))?;

    buffered
        .flush()
        .map_err(|e| GuardianError::Storage(format!("Failed to flush data: {}", e)))?;

    buffered
        .get_ref()
        .sync_all()
        .map_err(|e| GuardianError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        GuardianError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
