//! Core traits for the external collaborators
//!
//! The sync pipeline talks to a banking backend and an HTTP transport only
//! through these traits, so the FinTS stack, a file export or a test double
//! can be plugged in interchangeably.

use crate::types::{Account, ImportContext, SyncError};

/// A get-transactions job for one account
///
/// Created by [`BankingBackend::transactions_job`] after the backend confirmed
/// the job is available for the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionsJob {
    pub account: Account,
}

/// Trait for a banking backend session
///
/// Lifecycle calls return the backend's numeric error code on failure, the
/// way banking libraries report them. Use [`crate::core::Session`] rather than
/// calling them directly so teardown is never skipped.
pub trait BankingBackend {
    /// Initialize the backend
    fn init(&mut self) -> Result<(), i32>;

    /// Bring the backend online (after `init`)
    fn online_init(&mut self) -> Result<(), i32>;

    /// Take the backend offline (before `fini`)
    fn online_fini(&mut self) -> Result<(), i32>;

    /// Release the backend
    fn fini(&mut self) -> Result<(), i32>;

    /// All accounts known to the backend
    fn accounts(&self) -> Vec<Account>;

    /// Find the first account matching both wildcard patterns
    ///
    /// Patterns support `*` (any run of characters) and `?` (one character).
    fn find_account(&self, bank_code_pattern: &str, account_number_pattern: &str)
        -> Option<Account>;

    /// Create a get-transactions job and check its availability
    ///
    /// # Errors
    ///
    /// Returns `SyncError::JobUnavailable` with the backend code if the job
    /// cannot be run for this account.
    fn transactions_job(&self, account: &Account) -> Result<TransactionsJob, SyncError>;

    /// Execute a job queue
    ///
    /// # Errors
    ///
    /// Returns `SyncError::JobExecution` with the backend code on failure.
    fn execute_jobs(&mut self, jobs: &[TransactionsJob]) -> Result<ImportContext, SyncError>;
}

/// A single HTTP header as name/value pair
pub type Header = (&'static str, String);

/// Trait for the outbound HTTP transport
pub trait Transport {
    /// POST `body` to `url` with the given headers
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Transport` with a description of the failure. The
    /// caller decides whether that is fatal.
    fn post(&self, url: &str, headers: &[Header], body: &str) -> Result<(), SyncError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(&self, url: &str, headers: &[Header], body: &str) -> Result<(), SyncError> {
        (**self).post(url, headers, body)
    }
}

/// Match `text` against a wildcard `pattern`
///
/// `*` matches any run of characters (including none), `?` exactly one.
pub fn wildcard_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some((p, t));
            p += 1;
        } else if let Some((star_p, star_t)) = star {
            // backtrack: let the last `*` swallow one more character
            p = star_p + 1;
            t = star_t + 1;
            star = Some((star_p, star_t + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::exact("123456", "123456", true)]
    #[case::mismatch("123456", "123457", false)]
    #[case::star_all("*", "123456", true)]
    #[case::star_empty("*", "", true)]
    #[case::star_suffix("123*", "123456", true)]
    #[case::star_prefix("*456", "123456", true)]
    #[case::star_middle("1*6", "123456", true)]
    #[case::star_middle_miss("1*7", "123456", false)]
    #[case::question("12?456", "123456", true)]
    #[case::question_too_short("12?", "12", false)]
    #[case::multiple_stars("*2*5*", "123456", true)]
    #[case::backtracking("*56*56", "5656556", true)]
    #[case::empty_pattern("", "1", false)]
    #[case::both_empty("", "", true)]
    fn test_wildcard_match(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
        assert_eq!(wildcard_match(pattern, text), expected);
    }
}
