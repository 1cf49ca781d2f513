//! Benchmark suite for the per-transaction hot paths
//!
//! Every synchronized transaction is normalized, fingerprinted and, in send
//! mode, encoded into a JSON payload. These benchmarks measure each step.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use bank_event_sync::core::{fingerprint, normalize};
use bank_event_sync::io::{build_payload, escape_json};
use bank_event_sync::types::{MonetaryValue, RawTransaction};
use chrono::NaiveDate;

fn main() {
    divan::main();
}

fn raw_transaction() -> RawTransaction {
    RawTransaction {
        remote_name: vec!["ACME Corporation".to_string(), "Accounts Receivable".to_string()],
        purpose: vec![
            "Invoice 2024-0042".to_string(),
            "Customer 1337".to_string(),
            "Thank you".to_string(),
        ],
        valuta_date: NaiveDate::from_ymd_opt(2024, 3, 1),
        date: NaiveDate::from_ymd_opt(2024, 2, 29),
        value: Some(MonetaryValue::new("-1234.56", Some("EUR"))),
    }
}

/// Normalize one raw transaction
#[divan::bench]
fn normalize_transaction(bencher: divan::Bencher) {
    let raw = raw_transaction();
    bencher.bench(|| normalize(divan::black_box(&raw)));
}

/// Fingerprint one normalized transaction
#[divan::bench]
fn fingerprint_transaction(bencher: divan::Bencher) {
    let normalized = normalize(&raw_transaction()).expect("transaction has a value");
    bencher.bench(|| fingerprint(divan::black_box(&normalized)));
}

/// Escape text with quotes and control characters
#[divan::bench]
fn escape_text(bencher: divan::Bencher) {
    let text = "Rechnung \"42\"\tfür Müller\nC:\\Belege\u{1}".repeat(8);
    bencher.bench(|| escape_json(divan::black_box(Some(text.as_str()))));
}

/// Build a payload for a batch of transactions
#[divan::bench(args = [1, 10, 100])]
fn payload_batch(bencher: divan::Bencher, size: usize) {
    let normalized = normalize(&raw_transaction()).expect("transaction has a value");
    let batch = vec![normalized; size];
    bencher.bench(|| build_payload("conf2024", divan::black_box(&batch)));
}
