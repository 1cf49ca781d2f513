//! Command execution
//!
//! Runs one command-line operation against a banking backend.
//! [`run_in_session`] wraps [`execute`] in an opened [`Session`] and settles
//! which error wins when both the command and the teardown fail.

use crate::cli::Command;
use crate::core::dispatcher::{RunSummary, SyncDispatcher};
use crate::core::session::Session;
use crate::core::traits::{BankingBackend, Transport};
use crate::io::text_format::write_accounts;
use crate::strategy::{ListSink, SendConfig, SendSink};
use crate::types::SyncError;
use std::io::Write;

/// Open a session on `backend`, execute `command` and close the session again
///
/// The session is closed even when the command fails.
///
/// # Errors
///
/// * `SyncError::SessionInit` if the session cannot be opened
/// * the command's error, if it failed; a teardown failure on top of it is
///   only logged
/// * `SyncError::SessionTeardown` if the command succeeded but teardown failed
pub fn run_in_session<B, T, F>(
    backend: B,
    command: &Command,
    output: &mut dyn Write,
    connect: F,
) -> Result<RunSummary, SyncError>
where
    B: BankingBackend,
    T: Transport,
    F: FnOnce(&SendConfig) -> Result<T, SyncError>,
{
    let mut session = Session::open(backend)?;
    let outcome = execute(command, session.backend_mut(), output, connect);
    let closed = session.close();

    match (outcome, closed) {
        (Err(e), Err(teardown)) => {
            tracing::error!(error = %teardown, "banking session teardown failed");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(summary), closed) => closed.map(|()| summary),
    }
}

/// Execute `command` against an opened backend
///
/// `connect` builds the HTTP transport; it is only called in send mode, after
/// the account was found, so no client exists for runs that never POST.
///
/// # Errors
///
/// Returns the first fatal error: account not found, backend job failure or
/// an output write failure. Failed POSTs are reported in the summary instead.
pub fn execute<B, T, F>(
    command: &Command,
    backend: &mut B,
    output: &mut dyn Write,
    connect: F,
) -> Result<RunSummary, SyncError>
where
    B: BankingBackend,
    T: Transport,
    F: FnOnce(&SendConfig) -> Result<T, SyncError>,
{
    match command {
        Command::Help => Ok(RunSummary::default()),
        Command::ListAccounts => {
            write_accounts(&backend.accounts(), output)?;
            Ok(RunSummary::default())
        }
        Command::ListTransactions { pattern } => {
            let mut dispatcher = SyncDispatcher::new(backend);
            dispatcher.find_account(pattern)?;
            writeln!(output, "list of transactions:")?;
            let mut sink = ListSink::new(output);
            dispatcher.run(pattern, &mut sink)
        }
        Command::SendTransactions { pattern, config } => {
            let mut dispatcher = SyncDispatcher::new(backend);
            dispatcher.find_account(pattern)?;
            let transport = connect(config)?;
            let mut sink = SendSink::new(config.clone(), &transport);
            let summary = dispatcher.run(pattern, &mut sink)?;
            tracing::info!(
                sent = summary.sent,
                failed = summary.failed,
                requests = summary.requests,
                "send finished"
            );
            Ok(summary)
        }
    }
}
