//! Bank Event Sync Library
//! # Overview
//!
//! This library synchronizes bank-account transactions from a banking backend
//! into a remote event-ledger API. Deduplication across runs needs no stored
//! state: every transaction gets a fingerprint recomputed on each run.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, RawTransaction, NormalizedTransaction, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Sync logic:
//!   - [`core::joiner`] - Multi-line text field joining
//!   - [`core::normalizer`] - Raw to canonical transaction conversion
//!   - [`core::fingerprint`] - Stateless dedup/display key
//!   - [`core::dispatcher`] - Per-account sync orchestration
//!   - [`core::session`] - Scoped banking session
//! - [`io`] - CSV export backend, JSON payload, HTTP transport, text output
//! - [`strategy`] - List and send sinks
//! - [`app`] - Executes one command-line operation against a banking backend
//!
//! # Pipeline
//!
//! raw backend transaction → normalized record → fingerprint (listing) or
//! JSON payload (sending) → stdout or HTTP.

// Module declarations
pub mod app;
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use crate::core::{
    fingerprint, join_fields, normalize, BankingBackend, RunSummary, Session, SyncDispatcher,
    Transport,
};
pub use io::{build_payload, escape_json, CsvBankingBackend, HttpTransport};
pub use strategy::{ListSink, SendConfig, SendSink, TransactionSink};
pub use types::{
    Account, Fingerprint, MonetaryValue, NormalizedTransaction, RawTransaction, SyncError,
};
