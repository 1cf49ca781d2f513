//! Output strategy module for synchronized transactions
//!
//! This module defines the Strategy pattern for the last stage of the sync
//! pipeline: what happens to each normalized transaction. Listing prints a
//! summary line per transaction, sending posts it to the event-ledger API.
//! The dispatcher drives either one through the [`TransactionSink`] trait.

use crate::core::dispatcher::{RunSummary, SyncState};
use crate::types::{NormalizedTransaction, SyncError};

pub mod list;
pub mod send;

pub use list::ListSink;
pub use send::{SendConfig, SendSink};

/// Destination of normalized transactions
pub trait TransactionSink {
    /// Dispatcher state while this sink consumes transactions
    fn state(&self) -> SyncState;

    /// Consume one transaction
    ///
    /// `index` is the 1-based position of the transaction within its account.
    ///
    /// # Errors
    ///
    /// Only fatal problems (output not writable, payload not encodable) are
    /// returned. Per-transaction transport failures are logged, counted in
    /// `summary` and swallowed.
    fn accept(
        &mut self,
        index: usize,
        transaction: &NormalizedTransaction,
        summary: &mut RunSummary,
    ) -> Result<(), SyncError>;

    /// Flush anything buffered once all transactions were accepted
    fn finish(&mut self, _summary: &mut RunSummary) -> Result<(), SyncError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    /// Sink that only counts and relies on the default `finish`
    struct CountingSink;

    impl TransactionSink for CountingSink {
        fn state(&self) -> SyncState {
            SyncState::Listing
        }

        fn accept(
            &mut self,
            _index: usize,
            _transaction: &NormalizedTransaction,
            summary: &mut RunSummary,
        ) -> Result<(), SyncError> {
            summary.listed += 1;
            Ok(())
        }
    }

    #[test]
    fn test_default_finish_leaves_summary_untouched() {
        let transaction = NormalizedTransaction {
            remote_name: Some("ACMECorp".to_string()),
            purpose: None,
            date: None,
            value: Decimal::new(100, 2),
            currency: None,
        };
        let mut sink = CountingSink;
        let mut summary = RunSummary::default();

        sink.accept(1, &transaction, &mut summary).unwrap();
        sink.finish(&mut summary).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                listed: 1,
                ..RunSummary::default()
            }
        );
    }
}
