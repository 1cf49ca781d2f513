//! Banking backend over an offline CSV export
//!
//! Implements [`BankingBackend`] on top of a directory holding
//! `accounts.csv` and `transactions.csv`, the shape of an export produced by
//! a banking client. The session lifecycle is tracked so that misuse (running
//! jobs on a session that is not online) fails the way a real backend would.
//!
//! # Error codes
//!
//! Lifecycle and job errors carry one of the `ERROR_*` codes of this module.

use crate::core::traits::{wildcard_match, BankingBackend, TransactionsJob};
use crate::io::export_reader::ExportReader;
use crate::types::{Account, AccountInfo, ImportContext, SyncError};
use csv::{ReaderBuilder, Trim};
use std::path::{Path, PathBuf};

/// A required export file does not exist
pub const ERROR_NOT_FOUND: i32 = -1;
/// The requested job cannot run for this account
pub const ERROR_NOT_AVAILABLE: i32 = -2;
/// Reading the export failed
pub const ERROR_IO: i32 = -3;
/// Lifecycle call out of order
pub const ERROR_INVALID_STATE: i32 = -4;

pub const ACCOUNTS_FILE: &str = "accounts.csv";
pub const TRANSACTIONS_FILE: &str = "transactions.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackendState {
    Closed,
    Initialized,
    Online,
}

/// CSV export banking backend
#[derive(Debug)]
pub struct CsvBankingBackend {
    dir: PathBuf,
    accounts: Vec<Account>,
    state: BackendState,
}

impl CsvBankingBackend {
    /// Create a backend reading exports from `dir`
    ///
    /// Nothing is read until [`BankingBackend::init`] is called.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        CsvBankingBackend {
            dir: dir.into(),
            accounts: Vec::new(),
            state: BackendState::Closed,
        }
    }

    fn transactions_path(&self) -> PathBuf {
        self.dir.join(TRANSACTIONS_FILE)
    }

    fn is_known(&self, account: &Account) -> bool {
        self.accounts.iter().any(|known| known == account)
    }
}

/// Read `accounts.csv`; malformed rows are logged and skipped
fn load_accounts(path: &Path) -> Result<Vec<Account>, i32> {
    if !path.exists() {
        tracing::error!(path = %path.display(), "accounts export not found");
        return Err(ERROR_NOT_FOUND);
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "cannot open accounts export");
            ERROR_IO
        })?;

    let mut accounts = Vec::new();
    for result in reader.deserialize::<Account>() {
        match result {
            Ok(account) => accounts.push(account),
            Err(e) => tracing::warn!(error = %SyncError::from(e), "skipping malformed account row"),
        }
    }
    Ok(accounts)
}

impl BankingBackend for CsvBankingBackend {
    fn init(&mut self) -> Result<(), i32> {
        if self.state != BackendState::Closed {
            return Err(ERROR_INVALID_STATE);
        }
        self.accounts = load_accounts(&self.dir.join(ACCOUNTS_FILE))?;
        self.state = BackendState::Initialized;
        tracing::debug!(accounts = self.accounts.len(), dir = %self.dir.display(), "banking backend initialized");
        Ok(())
    }

    fn online_init(&mut self) -> Result<(), i32> {
        if self.state != BackendState::Initialized {
            return Err(ERROR_INVALID_STATE);
        }
        self.state = BackendState::Online;
        Ok(())
    }

    fn online_fini(&mut self) -> Result<(), i32> {
        if self.state != BackendState::Online {
            return Err(ERROR_INVALID_STATE);
        }
        self.state = BackendState::Initialized;
        Ok(())
    }

    fn fini(&mut self) -> Result<(), i32> {
        if self.state != BackendState::Initialized {
            return Err(ERROR_INVALID_STATE);
        }
        self.accounts.clear();
        self.state = BackendState::Closed;
        Ok(())
    }

    fn accounts(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    fn find_account(
        &self,
        bank_code_pattern: &str,
        account_number_pattern: &str,
    ) -> Option<Account> {
        self.accounts
            .iter()
            .find(|account| {
                wildcard_match(bank_code_pattern, &account.bank_code)
                    && wildcard_match(account_number_pattern, &account.account_number)
            })
            .cloned()
    }

    fn transactions_job(&self, account: &Account) -> Result<TransactionsJob, SyncError> {
        if self.state != BackendState::Online {
            return Err(SyncError::JobUnavailable {
                code: ERROR_INVALID_STATE,
            });
        }
        if !self.is_known(account) || !self.transactions_path().exists() {
            return Err(SyncError::JobUnavailable {
                code: ERROR_NOT_AVAILABLE,
            });
        }
        Ok(TransactionsJob {
            account: account.clone(),
        })
    }

    fn execute_jobs(&mut self, jobs: &[TransactionsJob]) -> Result<ImportContext, SyncError> {
        if self.state != BackendState::Online {
            return Err(SyncError::job_execution(
                ERROR_INVALID_STATE,
                "session is not online",
            ));
        }

        let reader = ExportReader::new(&self.transactions_path())
            .map_err(|e| SyncError::job_execution(ERROR_IO, e.to_string()))?;

        let mut infos: Vec<AccountInfo> = jobs
            .iter()
            .map(|job| AccountInfo {
                account: job.account.clone(),
                transactions: Vec::new(),
            })
            .collect();

        for result in reader {
            let keyed = match result {
                Ok(keyed) => keyed,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed transaction row");
                    continue;
                }
            };
            if let Some(info) = infos.iter_mut().find(|info| {
                info.account
                    .is_identified_by(&keyed.bank_code, &keyed.account_number)
            }) {
                info.transactions.push(keyed.transaction);
            }
        }

        infos.retain(|info| !info.transactions.is_empty());
        Ok(ImportContext {
            account_infos: infos,
        })
    }
}
