//! Transaction normalizer
//!
//! Builds the canonical [`NormalizedTransaction`] from a backend's
//! [`RawTransaction`]. Pure data transformation: no I/O, no retries.
//!
//! # Rules
//!
//! - Transactions without a parseable value are excluded entirely
//! - Remote name and purpose lines are joined without separator
//! - The value-date wins over the booking date; if neither exists a warning is
//!   logged and the date stays unresolved
//! - Empty currency codes are treated as absent

use crate::core::joiner::join_fields;
use crate::types::{MonetaryValue, NormalizedTransaction, RawTransaction};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Normalize one raw transaction
///
/// # Returns
///
/// * `Some(NormalizedTransaction)` if the raw transaction carries a parseable value
/// * `None` otherwise; the transaction must not be listed, sent or fingerprinted
pub fn normalize(raw: &RawTransaction) -> Option<NormalizedTransaction> {
    let value = raw.value.as_ref()?;
    let amount = parse_amount(value)?;

    let date = raw.valuta_date.or(raw.date);
    if date.is_none() {
        tracing::warn!("no date could be acquired for this transaction");
    }

    Some(NormalizedTransaction {
        remote_name: join_fields(&raw.remote_name),
        purpose: join_fields(&raw.purpose),
        date,
        value: amount,
        currency: value
            .currency
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string),
    })
}

/// Normalize a batch, dropping transactions that yield nothing
pub fn normalize_all<'a, I>(raws: I) -> Vec<NormalizedTransaction>
where
    I: IntoIterator<Item = &'a RawTransaction>,
{
    raws.into_iter().filter_map(normalize).collect()
}

/// Parse the amount text of a monetary value
///
/// Accepts a plain decimal (`-12.50`) and, as found in German exports, a
/// decimal comma (`-12,50`).
fn parse_amount(value: &MonetaryValue) -> Option<Decimal> {
    let text = value.amount.trim();
    if text.is_empty() {
        return None;
    }

    let parsed = Decimal::from_str(text).or_else(|err| {
        if !text.contains('.') && text.matches(',').count() == 1 {
            Decimal::from_str(&text.replace(',', "."))
        } else {
            Err(err)
        }
    });

    match parsed {
        Ok(amount) => Some(amount),
        Err(e) => {
            tracing::warn!(amount = %value.amount, error = %e, "skipping transaction with unparseable value");
            None
        }
    }
}
