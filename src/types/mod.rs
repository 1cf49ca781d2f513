//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Bank account description
//! - `transaction`: Raw and normalized transactions, fingerprints, import context
//! - `error`: Error types and exit codes

pub mod account;
pub mod error;
pub mod transaction;

pub use account::Account;
pub use error::{exit_code, SyncError};
pub use transaction::{
    AccountInfo, Fingerprint, ImportContext, MonetaryValue, NormalizedTransaction,
    RawTransaction, DATE_FORMAT, EPOCH_DATE,
};
