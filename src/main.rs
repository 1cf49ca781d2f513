//! Bank Event Sync CLI
//!
//! Command-line interface for listing bank transactions and sending them to an
//! event-ledger API.
//!
//! # Usage
//!
//! ```bash
//! bank-event-sync --list
//! bank-event-sync --list_transactions '9876*'
//! bank-event-sync --send_transactions '9876*' conf2024 https://pretix.example/api/v1/... TOKEN
//! bank-event-sync --backend-dir /srv/export --batch --send_transactions ...
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success or help
//! - 1: Output could not be written
//! - 2: Banking session init failure
//! - 3: Banking session teardown failure
//! - 4: Account not found
//! - 5: Missing send parameter (URL or token)
//! - 6: Get-transactions job unavailable or failed
//! - 64: Command-line usage error

use bank_event_sync::cli::{self, CliArgs, Command};
use bank_event_sync::io::{CsvBankingBackend, HttpTransport};
use bank_event_sync::types::{exit_code, SyncError};
use bank_event_sync::{app, logging};
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::init();

    let result = args.to_command().and_then(|command| match command {
        Command::Help => cli::print_usage().map_err(SyncError::from),
        command => run(&args, &command),
    });

    match result {
        Ok(()) => process::exit(exit_code::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

/// Run `command` against the CSV export in `--backend-dir`, listing to stdout
fn run(args: &CliArgs, command: &Command) -> Result<(), SyncError> {
    let mut stdout = std::io::stdout().lock();
    app::run_in_session(
        CsvBankingBackend::new(&args.backend_dir),
        command,
        &mut stdout,
        |config| HttpTransport::new(config.timeout),
    )?;
    Ok(())
}
