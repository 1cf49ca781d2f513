//! CSV format handling for the banking export
//!
//! This module centralizes all CSV format concerns of the export backend:
//! - `CsvTransactionRecord` structure for deserialization
//! - Conversion from CSV records to [`RawTransaction`]
//! - Date parsing for the formats banks put into exports
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Layout
//!
//! `transactions.csv` has the columns
//! `bank_code,account_number,remote_name,purpose,valuta_date,date,value,currency`.
//! Multi-line fields (remote name, purpose) carry one text line per line of
//! the quoted cell.

use crate::types::{MonetaryValue, RawTransaction, SyncError};
use chrono::NaiveDate;
use serde::Deserialize;

/// Date formats accepted in exports, tried in order
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y%m%d", "%d.%m.%Y"];

/// CSV record structure for deserialization
///
/// Every column except the account key is optional: banks routinely leave
/// dates, texts or even the value empty.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CsvTransactionRecord {
    pub bank_code: String,
    pub account_number: String,
    pub remote_name: Option<String>,
    pub purpose: Option<String>,
    pub valuta_date: Option<String>,
    pub date: Option<String>,
    pub value: Option<String>,
    pub currency: Option<String>,
}

/// Raw transaction together with the account it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedTransaction {
    pub bank_code: String,
    pub account_number: String,
    pub transaction: RawTransaction,
}

/// Convert a CsvTransactionRecord to a KeyedTransaction
///
/// This function:
/// - Splits multi-line text cells into their lines
/// - Parses value-date and booking date; unparseable dates are logged and
///   treated as absent
/// - Keeps the value as text (parsing it is the normalizer's job); an empty
///   value cell means "no value"
///
/// # Returns
///
/// Result containing either:
/// - Ok(KeyedTransaction) - Successfully converted record
/// - Err(SyncError) - The record does not name an account
pub fn convert_csv_record(
    record: CsvTransactionRecord,
    line: Option<u64>,
) -> Result<KeyedTransaction, SyncError> {
    if record.bank_code.trim().is_empty() || record.account_number.trim().is_empty() {
        return Err(SyncError::parse(
            line,
            "transaction row without bank_code/account_number",
        ));
    }

    let value = record
        .value
        .filter(|amount| !amount.trim().is_empty())
        .map(|amount| MonetaryValue {
            amount,
            currency: record.currency,
        });

    Ok(KeyedTransaction {
        bank_code: record.bank_code,
        account_number: record.account_number,
        transaction: RawTransaction {
            remote_name: split_lines(record.remote_name.as_deref()),
            purpose: split_lines(record.purpose.as_deref()),
            valuta_date: parse_optional_date(record.valuta_date.as_deref(), "valuta_date", line),
            date: parse_optional_date(record.date.as_deref(), "date", line),
            value,
        },
    })
}

/// Split a multi-line cell into its text lines
fn split_lines(cell: Option<&str>) -> Vec<String> {
    match cell {
        Some(text) if !text.is_empty() => text
            .split('\n')
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect(),
        _ => Vec::new(),
    }
}

/// Parse a date in any of the accepted export formats
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

fn parse_optional_date(cell: Option<&str>, column: &str, line: Option<u64>) -> Option<NaiveDate> {
    let text = cell.map(str::trim).filter(|t| !t.is_empty())?;
    let parsed = parse_date(text);
    if parsed.is_none() {
        tracing::warn!(column, value = text, line, "ignoring unparseable date");
    }
    parsed
}
