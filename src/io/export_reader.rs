//! Streaming reader over a transactions export
//!
//! Provides an iterator over [`KeyedTransaction`]s from a CSV export file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as Err variants in the iterator
//! - Line numbers are taken from the CSV position, so quoted multi-line cells
//!   do not skew them

use crate::io::csv_format::{convert_csv_record, CsvTransactionRecord, KeyedTransaction};
use crate::types::SyncError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming reader over `transactions.csv`
#[derive(Debug)]
pub struct ExportReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
    record: StringRecord,
}

impl ExportReader {
    /// Open an export file for streaming iteration
    ///
    /// The CSV reader is configured to trim surrounding whitespace and to
    /// accept rows with missing trailing columns.
    pub fn new(path: &Path) -> Result<Self, SyncError> {
        let file = File::open(path).map_err(|e| SyncError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }
}

impl Iterator for ExportReader {
    type Item = Result<KeyedTransaction, SyncError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self.record.position().map(|pos| pos.line());
                Some(
                    self.record
                        .deserialize::<CsvTransactionRecord>(Some(&self.headers))
                        .map_err(SyncError::from)
                        .and_then(|row| convert_csv_record(row, line)),
                )
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
