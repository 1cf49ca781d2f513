//! Account-related types for the bank event sync
//!
//! This module defines the Account structure as reported by the banking
//! backend. Accounts are read-only to the sync pipeline: they are looked up
//! and displayed, never mutated.

use serde::Deserialize;

/// Bank account as known to the banking session
///
/// Mirrors the identifying fields a banking backend exposes for an account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    /// Bank code (BLZ / routing number) of the account's bank
    pub bank_code: String,

    /// Human-readable bank name
    pub bank_name: String,

    /// Account number, the field matched by `--list_transactions` patterns
    pub account_number: String,

    /// Account holder's name for the account
    pub account_name: String,

    /// Name of the backend provider serving this account
    pub provider: String,
}

impl Account {
    /// Create a new account description
    pub fn new(
        bank_code: impl Into<String>,
        bank_name: impl Into<String>,
        account_number: impl Into<String>,
        account_name: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Account {
            bank_code: bank_code.into(),
            bank_name: bank_name.into(),
            account_number: account_number.into(),
            account_name: account_name.into(),
            provider: provider.into(),
        }
    }

    /// Whether `bank_code` and `account_number` identify this account
    pub fn is_identified_by(&self, bank_code: &str, account_number: &str) -> bool {
        self.bank_code == bank_code && self.account_number == account_number
    }
}
