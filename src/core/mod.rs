//! Core sync logic module
//!
//! This module contains the transaction synchronization components:
//! - `traits` - Trait abstractions for the banking backend and HTTP transport
//! - `session` - Scoped banking session with guaranteed teardown
//! - `joiner` - Multi-line text field joining
//! - `normalizer` - Raw to canonical transaction conversion
//! - `fingerprint` - Stateless dedup/display key
//! - `dispatcher` - Per-account sync orchestration

pub mod dispatcher;
pub mod fingerprint;
pub mod joiner;
pub mod normalizer;
pub mod session;
pub mod traits;

pub use dispatcher::{RunSummary, SyncDispatcher, SyncState};
pub use fingerprint::{djb2, fingerprint};
pub use joiner::join_fields;
pub use normalizer::{normalize, normalize_all};
pub use session::Session;
pub use traits::{BankingBackend, Header, TransactionsJob, Transport};
