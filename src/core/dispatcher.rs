//! Sync dispatcher
//!
//! This module provides the SyncDispatcher that orchestrates one sync run for
//! one account by coordinating the banking backend, the normalizer and a
//! [`TransactionSink`].
//!
//! # States
//!
//! ```text
//! Fetching -> Normalizing -> (Listing | Sending) -> Done
//!     \-> Failed
//! ```
//!
//! Backend failures while fetching are fatal for the run and are never
//! retried. Transactions without a value are dropped while normalizing.

use crate::core::normalizer::normalize_all;
use crate::core::traits::BankingBackend;
use crate::strategy::TransactionSink;
use crate::types::{Account, ImportContext, SyncError};

/// Bank code pattern used for account lookup; accounts are selected by number
const ANY_BANK_CODE: &str = "*";

/// Lifecycle state of a sync run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Fetching,
    Normalizing,
    Listing,
    Sending,
    Done,
    Failed,
}

/// Counters of one sync run
///
/// Transactions skipped for lack of a value are not counted anywhere.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Transactions that survived normalization
    pub normalized: usize,
    /// Transactions printed in list mode
    pub listed: usize,
    /// Transactions delivered in send mode
    pub sent: usize,
    /// Transactions whose request failed in send mode
    pub failed: usize,
    /// HTTP requests issued
    pub requests: usize,
}

/// Orchestrates a sync run over a borrowed banking backend
pub struct SyncDispatcher<'a, B: BankingBackend> {
    backend: &'a mut B,
    state: SyncState,
}

impl<'a, B: BankingBackend> SyncDispatcher<'a, B> {
    pub fn new(backend: &'a mut B) -> Self {
        SyncDispatcher {
            backend,
            state: SyncState::Idle,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    fn transition(&mut self, next: SyncState) {
        tracing::debug!(from = ?self.state, to = ?next, "sync state");
        self.state = next;
    }

    /// Look up the account whose number matches `pattern`
    ///
    /// # Errors
    ///
    /// Returns `SyncError::AccountNotFound` if nothing matches.
    pub fn find_account(&self, pattern: &str) -> Result<Account, SyncError> {
        self.backend
            .find_account(ANY_BANK_CODE, pattern)
            .ok_or_else(|| SyncError::account_not_found(pattern))
    }

    /// Run the whole pipeline for the account matching `pattern`
    ///
    /// 1. Looks up the account (fatal if missing)
    /// 2. Fetches transactions via a get-transactions job
    /// 3. Normalizes them, dropping value-less ones
    /// 4. Feeds each into `sink`, numbering them per account
    ///
    /// # Errors
    ///
    /// Returns an error if the account is not found, the backend job fails,
    /// or the sink reports a fatal error. Failed HTTP requests are not errors.
    pub fn run(
        &mut self,
        pattern: &str,
        sink: &mut dyn TransactionSink,
    ) -> Result<RunSummary, SyncError> {
        let account = self.find_account(pattern)?;
        tracing::info!(
            bank_code = %account.bank_code,
            account_number = %account.account_number,
            "synchronizing account"
        );

        self.transition(SyncState::Fetching);
        let context = match self.fetch(&account) {
            Ok(context) => context,
            Err(e) => {
                self.transition(SyncState::Failed);
                return Err(e);
            }
        };

        self.transition(SyncState::Normalizing);
        let mut summary = RunSummary::default();
        let accounts: Vec<_> = context
            .account_infos
            .iter()
            .map(|info| normalize_all(&info.transactions))
            .collect();
        summary.normalized = accounts.iter().map(Vec::len).sum();
        tracing::debug!(
            raw = context.transaction_count(),
            normalized = summary.normalized,
            "transactions normalized"
        );

        self.transition(sink.state());
        for transactions in &accounts {
            for (i, transaction) in transactions.iter().enumerate() {
                sink.accept(i + 1, transaction, &mut summary)?;
            }
        }
        sink.finish(&mut summary)?;

        self.transition(SyncState::Done);
        Ok(summary)
    }

    /// Create, check and execute the get-transactions job for `account`
    fn fetch(&mut self, account: &Account) -> Result<ImportContext, SyncError> {
        let job = self.backend.transactions_job(account)?;
        self.backend.execute_jobs(std::slice::from_ref(&job))
    }
}
