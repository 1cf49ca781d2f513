use crate::strategy::send::DEFAULT_AUTH_SCHEME;
use crate::strategy::SendConfig;
use crate::types::SyncError;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// Synchronize bank transactions into an event-ledger API
#[derive(Parser, Debug)]
#[command(name = "bank-event-sync")]
#[command(about = "Synchronize bank transactions into an event-ledger API", long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .args(["list", "list_transactions", "send_transactions"])
        .multiple(false)
))]
pub struct CliArgs {
    /// List all available accounts
    #[arg(long = "list")]
    pub list: bool,

    /// List transactions of the account whose number matches (wildcards possible)
    #[arg(long = "list_transactions", value_name = "ACCOUNT")]
    pub list_transactions: Option<String>,

    /// Send transactions of the matching account to the event-ledger API
    #[arg(
        long = "send_transactions",
        num_args = 1..=4,
        value_names = ["ACCOUNT", "EVENT", "URL", "TOKEN"]
    )]
    pub send_transactions: Option<Vec<String>>,

    /// Directory holding the banking export (accounts.csv, transactions.csv)
    #[arg(long = "backend-dir", value_name = "DIR", default_value = ".")]
    pub backend_dir: PathBuf,

    /// Send all transactions in a single request (send mode only)
    #[arg(long = "batch")]
    pub batch: bool,

    /// Authorization scheme prefixed to the token (send mode only)
    #[arg(long = "auth-scheme", value_name = "SCHEME", default_value = DEFAULT_AUTH_SCHEME)]
    pub auth_scheme: String,

    /// Per-request timeout in seconds (send mode only)
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Operation selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No mode given: print usage
    Help,
    /// `--list`
    ListAccounts,
    /// `--list_transactions`
    ListTransactions { pattern: String },
    /// `--send_transactions`
    SendTransactions { pattern: String, config: SendConfig },
}

impl CliArgs {
    /// Resolve the selected operation
    ///
    /// Send-mode parameters are validated here, before any banking job runs.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::MissingParameter` if the URL or token of
    /// `--send_transactions` is missing or empty.
    pub fn to_command(&self) -> Result<Command, SyncError> {
        if self.list {
            return Ok(Command::ListAccounts);
        }
        if let Some(pattern) = &self.list_transactions {
            return Ok(Command::ListTransactions {
                pattern: pattern.clone(),
            });
        }
        if let Some(values) = &self.send_transactions {
            let arg = |i: usize| values.get(i).cloned().unwrap_or_default();
            let config = SendConfig::new(arg(2), arg(3), arg(1))?
                .with_batch(self.batch)
                .with_auth_scheme(self.auth_scheme.clone())
                .with_timeout(self.timeout.map(Duration::from_secs));
            return Ok(Command::SendTransactions {
                pattern: arg(0),
                config,
            });
        }
        Ok(Command::Help)
    }
}
