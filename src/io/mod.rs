//! I/O module
//!
//! Handles the banking export, the outbound HTTP call and all output formats.
//!
//! # Components
//!
//! - `csv_format` - Export row format (record conversion, date parsing)
//! - `export_reader` - Streaming reader over a transactions export
//! - `csv_backend` - Banking backend over a CSV export directory
//! - `json_payload` - JSON string escaping and request body assembly
//! - `http` - Blocking HTTP transport
//! - `text_format` - Account listing and transaction summary lines

pub mod csv_backend;
pub mod csv_format;
pub mod export_reader;
pub mod http;
pub mod json_payload;
pub mod text_format;

pub use csv_backend::CsvBankingBackend;
pub use csv_format::{convert_csv_record, CsvTransactionRecord, KeyedTransaction};
pub use export_reader::ExportReader;
pub use http::HttpTransport;
pub use json_payload::{build_payload, escape_json, escaped_len};
pub use text_format::{format_transaction_line, write_accounts};
