//! JSON payload encoding for the event-ledger API
//!
//! Text fields coming from the bank (payer, reference) are escaped into JSON
//! string literals by [`escape_json`] and spliced into the request body as raw
//! JSON values; the surrounding document is serialized with serde_json.
//!
//! # Payload shape
//!
//! ```json
//! {"event":"conf2024","transactions":[{"payer":"ACMECorp","reference":"Invoice42","amount":"12.50","date":"2024-03-01"}]}
//! ```

use crate::types::{NormalizedTransaction, SyncError};
use serde::Serialize;
use serde_json::value::RawValue;

/// Length of the escape sequence for one character, or 1 if it passes through
fn escaped_char_len(c: char) -> usize {
    match c {
        '"' | '\\' | '\u{08}' | '\u{0c}' | '\n' | '\r' | '\t' => 2,
        c if (c as u32) < 0x20 => 6,
        c => c.len_utf8(),
    }
}

/// Exact byte length of `escape_json(input)`, quotes included
pub fn escaped_len(input: Option<&str>) -> usize {
    2 + input.map_or(0, |s| s.chars().map(escaped_char_len).sum())
}

/// Escape text into a JSON string literal, enclosing quotes included
///
/// - `None` becomes `""`
/// - `"`, `\`, backspace, form-feed, newline, carriage-return and tab get
///   their two-character escapes
/// - Any other control character below U+0020 becomes `\u00XX`
/// - Everything else passes through unchanged
///
/// The output is allocated once with its exact final size.
pub fn escape_json(input: Option<&str>) -> String {
    let mut out = String::with_capacity(escaped_len(input));
    out.push('"');
    for c in input.unwrap_or("").chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// One transaction entry of the outbound payload
#[derive(Debug, Serialize)]
pub struct PayloadEntry {
    pub payer: Box<RawValue>,
    pub reference: Box<RawValue>,
    pub amount: String,
    pub date: String,
}

impl PayloadEntry {
    /// Build the entry for one normalized transaction
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Payload` if an escaped literal is not valid JSON.
    pub fn from_transaction(transaction: &NormalizedTransaction) -> Result<Self, SyncError> {
        Ok(PayloadEntry {
            payer: RawValue::from_string(escape_json(transaction.remote_name.as_deref()))?,
            reference: RawValue::from_string(escape_json(transaction.purpose.as_deref()))?,
            amount: transaction.formatted_amount(),
            date: transaction.formatted_date(),
        })
    }
}

/// Request body sent to the event-ledger API
#[derive(Debug, Serialize)]
pub struct OutboundPayload<'a> {
    pub event: &'a str,
    pub transactions: Vec<PayloadEntry>,
}

/// Assemble and serialize the request body for `transactions`
pub fn build_payload(
    event: &str,
    transactions: &[NormalizedTransaction],
) -> Result<String, SyncError> {
    let entries = transactions
        .iter()
        .map(PayloadEntry::from_transaction)
        .collect::<Result<Vec<_>, _>>()?;

    let payload = OutboundPayload {
        event,
        transactions: entries,
    };
    Ok(serde_json::to_string(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use serde_json::Value;

    #[rstest]
    #[case::null(None, "\"\"")]
    #[case::empty(Some(""), "\"\"")]
    #[case::plain(Some("ACMECorp"), "\"ACMECorp\"")]
    #[case::quote_and_tab(Some("a\"\tb"), "\"a\\\"\\tb\"")]
    #[case::backslash(Some("C:\\dir"), "\"C:\\\\dir\"")]
    #[case::short_escapes(Some("\u{08}\u{0c}\n\r"), "\"\\b\\f\\n\\r\"")]
    #[case::other_control(Some("a\u{01}b\u{1f}"), "\"a\\u0001b\\u001f\"")]
    #[case::unicode_passes(Some("Müller €"), "\"Müller €\"")]
    #[case::slash_passes(Some("a/b"), "\"a/b\"")]
    fn test_escape_json(#[case] input: Option<&str>, #[case] expected: &str) {
        let escaped = escape_json(input);
        assert_eq!(escaped, expected);
        assert_eq!(escaped.len(), escaped_len(input));
    }

    #[rstest]
    #[case("")]
    #[case("plain text")]
    #[case("quote \" backslash \\ slash /")]
    #[case("tab\tnewline\ncarriage\rbell\u{07}escape\u{1b}")]
    #[case("Überweisung für Straße — 10 €")]
    #[case("\u{0}\u{1}\u{2}\u{1e}\u{1f}\u{20}\u{7f}")]
    fn test_escape_json_round_trips_through_parser(#[case] input: &str) {
        let parsed: String = serde_json::from_str(&escape_json(Some(input))).unwrap();
        assert_eq!(parsed, input);
    }

    #[test]
    fn test_escape_json_allocates_exactly() {
        let input = "x\"\u{01}ä";
        let escaped = escape_json(Some(input));
        assert_eq!(escaped.capacity(), escaped_len(Some(input)));
    }

    fn transaction() -> NormalizedTransaction {
        NormalizedTransaction {
            remote_name: Some("ACMECorp".to_string()),
            purpose: Some("Invoice42".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, 1),
            value: Decimal::new(1250, 2),
            currency: Some("EUR".to_string()),
        }
    }

    #[test]
    fn test_build_payload_single_transaction() {
        let body = build_payload("conf2024", &[transaction()]).unwrap();
        let json: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(json["event"], "conf2024");
        let entries = json["transactions"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["amount"], "12.50");
        assert_eq!(entries[0]["date"], "2024-03-01");
        assert_eq!(entries[0]["payer"], "ACMECorp");
        assert_eq!(entries[0]["reference"], "Invoice42");
    }

    #[test]
    fn test_build_payload_exact_body() {
        let body = build_payload("conf2024", &[transaction()]).unwrap();
        assert_eq!(
            body,
            r#"{"event":"conf2024","transactions":[{"payer":"ACMECorp","reference":"Invoice42","amount":"12.50","date":"2024-03-01"}]}"#
        );
    }

    #[test]
    fn test_build_payload_absent_fields() {
        let bare = NormalizedTransaction {
            remote_name: None,
            purpose: None,
            date: None,
            value: Decimal::new(-5, 0),
            currency: None,
        };

        let body = build_payload("ev\"ent", &[bare]).unwrap();
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["event"], "ev\"ent");
        assert_eq!(json["transactions"][0]["payer"], "");
        assert_eq!(json["transactions"][0]["reference"], "");
        assert_eq!(json["transactions"][0]["amount"], "-5.00");
        assert_eq!(json["transactions"][0]["date"], "1970-01-01");
    }

    #[test]
    fn test_build_payload_batch() {
        let mut second = transaction();
        second.remote_name = Some("Tab\there".to_string());

        let body = build_payload("conf2024", &[transaction(), second]).unwrap();
        let json: Value = serde_json::from_str(&body).unwrap();
        let entries = json["transactions"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1]["payer"], "Tab\there");
    }
}
