//! Error types for the bank event sync
//!
//! This module defines all error types that can occur while synchronizing
//! transactions. Errors are designed to be descriptive and user-friendly for
//! CLI output, and each maps onto a documented process exit code.
//!
//! # Error Categories
//!
//! - **Precondition Errors**: Account not found, missing send parameters
//! - **Backend Errors**: Session init/teardown failure, job unavailable or failed
//! - **Transport Errors**: A single POST failed (recoverable)
//! - **Data Errors**: Malformed export rows, payload encoding problems

use thiserror::Error;

/// Process exit codes, one per error category
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const IO: i32 = 1;
    pub const SESSION_INIT: i32 = 2;
    pub const SESSION_TEARDOWN: i32 = 3;
    pub const ACCOUNT_NOT_FOUND: i32 = 4;
    pub const MISSING_PARAMETER: i32 = 5;
    pub const JOB_FAILED: i32 = 6;
    pub const USAGE: i32 = 64;
}

/// Main error type for the bank event sync
///
/// Each variant includes the context needed to diagnose the problem. Backend
/// variants carry the backend's numeric error code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// Opening the banking session failed
    ///
    /// Fatal: nothing can be fetched without a session.
    #[error("Error on {stage} ({code})")]
    SessionInit {
        /// Lifecycle step that failed (`init` or `onlineinit`)
        stage: &'static str,
        /// Backend error code
        code: i32,
    },

    /// Closing the banking session failed
    #[error("Error on {stage} ({code})")]
    SessionTeardown {
        /// Lifecycle step that failed (`online deinit` or `deinit`)
        stage: &'static str,
        /// Backend error code
        code: i32,
    },

    /// No account matched the requested pattern
    #[error("Bank account not found: {pattern}")]
    AccountNotFound {
        /// The account number pattern that matched nothing
        pattern: String,
    },

    /// A send-mode parameter is missing or empty
    #[error("Missing send parameter: {name}")]
    MissingParameter {
        /// Name of the missing parameter (`url` or `token`)
        name: &'static str,
    },

    /// The backend cannot run a get-transactions job for the account
    #[error("Job is not available ({code})")]
    JobUnavailable {
        /// Backend error code
        code: i32,
    },

    /// Executing the job queue failed
    #[error("Error on executeQueue ({code}): {message}")]
    JobExecution {
        /// Backend error code
        code: i32,
        /// Backend-provided description
        message: String,
    },

    /// A single HTTP request failed
    ///
    /// Recoverable: the failure is logged and the next transaction is sent.
    #[error("Transport error: {message}")]
    Transport {
        /// Transport-provided description
        message: String,
    },

    /// The outbound payload could not be assembled
    #[error("Payload error: {message}")]
    Payload {
        /// Description of the encoding problem
        message: String,
    },

    /// Malformed row in the banking export
    ///
    /// Recoverable: the row is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// I/O error while reading the export or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for SyncError {
    fn from(error: std::io::Error) -> Self {
        SyncError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for SyncError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        SyncError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(error: serde_json::Error) -> Self {
        SyncError::Payload {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl SyncError {
    /// Create an AccountNotFound error
    pub fn account_not_found(pattern: &str) -> Self {
        SyncError::AccountNotFound {
            pattern: pattern.to_string(),
        }
    }

    /// Create a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        SyncError::Transport {
            message: message.into(),
        }
    }

    /// Create a JobExecution error
    pub fn job_execution(code: i32, message: impl Into<String>) -> Self {
        SyncError::JobExecution {
            code,
            message: message.into(),
        }
    }

    /// Create a ParseError error
    pub fn parse(line: Option<u64>, message: impl Into<String>) -> Self {
        SyncError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Process exit code for this error when it ends the run
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::SessionInit { .. } => exit_code::SESSION_INIT,
            SyncError::SessionTeardown { .. } => exit_code::SESSION_TEARDOWN,
            SyncError::AccountNotFound { .. } => exit_code::ACCOUNT_NOT_FOUND,
            SyncError::MissingParameter { .. } => exit_code::MISSING_PARAMETER,
            SyncError::JobUnavailable { .. } | SyncError::JobExecution { .. } => {
                exit_code::JOB_FAILED
            }
            SyncError::Transport { .. }
            | SyncError::Payload { .. }
            | SyncError::ParseError { .. }
            | SyncError::IoError { .. } => exit_code::IO,
        }
    }
}
