//! Transaction-related types for the bank event sync
//!
//! This module defines the raw transaction as delivered by the banking
//! backend, the canonical record produced by the normalizer, and the
//! derived fingerprint used as a dedup/display key.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

use super::account::Account;

/// Date format used for display, fingerprinting and the outbound payload
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder printed (and hashed) when a transaction has no date at all
///
/// Matches falling back to the Unix epoch when neither a value-date nor a
/// booking date is available.
pub const EPOCH_DATE: &str = "1970-01-01";

/// Monetary value attached to a raw transaction
///
/// The amount is kept as the backend's text representation; converting it
/// to a [`Decimal`] is the normalizer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonetaryValue {
    /// Signed amount as text, e.g. `-12.50`
    pub amount: String,

    /// ISO-style currency code, if the backend supplied one
    pub currency: Option<String>,
}

impl MonetaryValue {
    pub fn new(amount: impl Into<String>, currency: Option<&str>) -> Self {
        MonetaryValue {
            amount: amount.into(),
            currency: currency.map(str::to_string),
        }
    }
}

/// Transaction exactly as the banking backend reports it
///
/// Text fields such as the remote name or the purpose may span several lines.
/// Transient: lives only for one synchronization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTransaction {
    /// Remote party name, one entry per text line
    pub remote_name: Vec<String>,

    /// Purpose / reference text, one entry per text line
    pub purpose: Vec<String>,

    /// Date the transaction affects the available balance
    pub valuta_date: Option<NaiveDate>,

    /// Date the bank recorded the transaction
    pub date: Option<NaiveDate>,

    /// Monetary value; transactions without one are never synchronized
    pub value: Option<MonetaryValue>,
}

/// Canonical transaction record
///
/// Only ever constructed for raw transactions that carry a parseable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTransaction {
    /// All remote name lines concatenated without separator
    pub remote_name: Option<String>,

    /// All purpose lines concatenated without separator
    pub purpose: Option<String>,

    /// Value-date if present, else booking date
    pub date: Option<NaiveDate>,

    /// Signed amount
    pub value: Decimal,

    /// Currency code, if any
    pub currency: Option<String>,
}

impl NormalizedTransaction {
    /// Date as `YYYY-MM-DD`, or the epoch placeholder when unresolved
    pub fn formatted_date(&self) -> String {
        match self.date {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => EPOCH_DATE.to_string(),
        }
    }

    /// Value rounded half away from zero and printed with two decimal places
    pub fn formatted_amount(&self) -> String {
        let rounded = self
            .value
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", rounded)
    }
}

/// Stateless dedup/display key of a transaction
///
/// Not a security identifier; collisions are tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(pub u64);

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transactions retrieved for one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub account: Account,
    pub transactions: Vec<RawTransaction>,
}

/// Result container of executing a job queue
///
/// Holds one [`AccountInfo`] per account that had transactions, in the order
/// the backend produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportContext {
    pub account_infos: Vec<AccountInfo>,
}

impl ImportContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of raw transactions across all accounts
    pub fn transaction_count(&self) -> usize {
        self.account_infos
            .iter()
            .map(|info| info.transactions.len())
            .sum()
    }
}
