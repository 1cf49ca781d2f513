//! Send strategy: POST transactions to the event-ledger API
//!
//! By default every transaction is sent in its own request and each request
//! completes before the next transaction is processed. With batching enabled
//! all transactions of the run are buffered and sent in a single request from
//! [`TransactionSink::finish`].
//!
//! A failed request is logged and counted; it never aborts the run.

use crate::core::dispatcher::{RunSummary, SyncState};
use crate::core::fingerprint::fingerprint;
use crate::core::traits::{Header, Transport};
use crate::io::json_payload::build_payload;
use crate::strategy::TransactionSink;
use crate::types::{NormalizedTransaction, SyncError};
use std::time::Duration;

/// Authorization scheme used when none is configured
pub const DEFAULT_AUTH_SCHEME: &str = "Token";

/// Send-mode configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendConfig {
    /// Endpoint receiving the POST requests
    pub url: String,

    /// API token sent in the `Authorization` header
    pub token: String,

    /// Event identifier placed into every payload
    pub event: String,

    /// Scheme prefixed to the token, e.g. `Token` or `Bearer`
    pub auth_scheme: String,

    /// Send all transactions in one request instead of one per transaction
    pub batch: bool,

    /// Per-request timeout; the transport default applies when unset
    pub timeout: Option<Duration>,
}

impl SendConfig {
    /// Create a send configuration with defaults for the optional settings
    ///
    /// # Errors
    ///
    /// Returns `SyncError::MissingParameter` if `url` or `token` is empty.
    pub fn new(
        url: impl Into<String>,
        token: impl Into<String>,
        event: impl Into<String>,
    ) -> Result<Self, SyncError> {
        let url = url.into();
        let token = token.into();
        if url.trim().is_empty() {
            return Err(SyncError::MissingParameter { name: "url" });
        }
        if token.trim().is_empty() {
            return Err(SyncError::MissingParameter { name: "token" });
        }

        Ok(SendConfig {
            url,
            token,
            event: event.into(),
            auth_scheme: DEFAULT_AUTH_SCHEME.to_string(),
            batch: false,
            timeout: None,
        })
    }

    pub fn with_batch(mut self, batch: bool) -> Self {
        self.batch = batch;
        self
    }

    pub fn with_auth_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.auth_scheme = scheme.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Headers sent with every request
    pub fn headers(&self) -> Vec<Header> {
        vec![
            ("content-type", "application/json".to_string()),
            (
                "authorization",
                format!("{} {}", self.auth_scheme, self.token),
            ),
            ("accept-charset", "utf-8".to_string()),
        ]
    }
}

/// Sink posting transactions through a [`Transport`]
pub struct SendSink<'a> {
    config: SendConfig,
    transport: &'a dyn Transport,
    pending: Vec<NormalizedTransaction>,
}

impl<'a> SendSink<'a> {
    pub fn new(config: SendConfig, transport: &'a dyn Transport) -> Self {
        SendSink {
            config,
            transport,
            pending: Vec::new(),
        }
    }

    /// Send one request carrying `transactions`
    fn dispatch(
        &self,
        transactions: &[NormalizedTransaction],
        summary: &mut RunSummary,
    ) -> Result<(), SyncError> {
        let body = build_payload(&self.config.event, transactions)?;
        summary.requests += 1;

        match self
            .transport
            .post(&self.config.url, &self.config.headers(), &body)
        {
            Ok(()) => {
                summary.sent += transactions.len();
                for transaction in transactions {
                    tracing::info!(
                        fingerprint = %fingerprint(transaction),
                        amount = %transaction.formatted_amount(),
                        date = %transaction.formatted_date(),
                        "transaction sent"
                    );
                }
            }
            Err(e) => {
                summary.failed += transactions.len();
                tracing::warn!(error = %e, transactions = transactions.len(), "failed to send transactions");
            }
        }
        Ok(())
    }
}

impl TransactionSink for SendSink<'_> {
    fn state(&self) -> SyncState {
        SyncState::Sending
    }

    fn accept(
        &mut self,
        _index: usize,
        transaction: &NormalizedTransaction,
        summary: &mut RunSummary,
    ) -> Result<(), SyncError> {
        if self.config.batch {
            self.pending.push(transaction.clone());
            return Ok(());
        }
        self.dispatch(std::slice::from_ref(transaction), summary)
    }

    fn finish(&mut self, summary: &mut RunSummary) -> Result<(), SyncError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let pending = std::mem::take(&mut self.pending);
        self.dispatch(&pending, summary)
    }
}
