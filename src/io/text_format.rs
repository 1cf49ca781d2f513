//! Human-readable output formats
//!
//! Account listing and the one-line transaction summary printed in list mode.
//! All functions write to a caller-supplied writer, so they are easy to test.

use crate::types::{Account, Fingerprint, NormalizedTransaction, SyncError};
use std::io::Write;

/// Format one listed transaction
///
/// `index` is the 1-based position of the transaction within its account.
/// Absent text fields print as empty parentheses.
pub fn format_transaction_line(
    index: usize,
    fingerprint: Fingerprint,
    transaction: &NormalizedTransaction,
) -> String {
    format!(
        "transaction {} [{}] - name: ({}) purpose: ({}) date: ({}) value: ({} {})",
        index,
        fingerprint,
        transaction.remote_name.as_deref().unwrap_or(""),
        transaction.purpose.as_deref().unwrap_or(""),
        transaction.formatted_date(),
        transaction.formatted_amount(),
        transaction.currency.as_deref().unwrap_or(""),
    )
}

/// Write the account listing, one numbered line per account
pub fn write_accounts(accounts: &[Account], output: &mut dyn Write) -> Result<(), SyncError> {
    writeln!(output, "list of available banking accounts: ")?;
    for (i, account) in accounts.iter().enumerate() {
        writeln!(
            output,
            "Account {}: {} ({}) {} ({}) [{}]",
            i + 1,
            account.bank_code,
            account.bank_name,
            account.account_number,
            account.account_name,
            account.provider
        )?;
    }
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_format_transaction_line() {
        let transaction = NormalizedTransaction {
            remote_name: Some("ACMECorp".to_string()),
            purpose: Some("Invoice42".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, 1),
            value: Decimal::new(1250, 2),
            currency: Some("EUR".to_string()),
        };

        assert_eq!(
            format_transaction_line(1, Fingerprint(42), &transaction),
            "transaction 1 [42] - name: (ACMECorp) purpose: (Invoice42) date: (2024-03-01) value: (12.50 EUR)"
        );
    }

    #[test]
    fn test_format_transaction_line_absent_fields() {
        let transaction = NormalizedTransaction {
            remote_name: None,
            purpose: None,
            date: None,
            value: Decimal::new(-7, 0),
            currency: None,
        };

        assert_eq!(
            format_transaction_line(3, Fingerprint(7), &transaction),
            "transaction 3 [7] - name: () purpose: () date: (1970-01-01) value: (-7.00 )"
        );
    }

    #[test]
    fn test_write_accounts() {
        let accounts = vec![
            Account::new("12345678", "Sparkasse", "987654", "Giro", "csv"),
            Account::new("87654321", "Volksbank", "111", "Savings", "csv"),
        ];
        let mut output = Vec::new();

        write_accounts(&accounts, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "list of available banking accounts: \n\
             Account 1: 12345678 (Sparkasse) 987654 (Giro) [csv]\n\
             Account 2: 87654321 (Volksbank) 111 (Savings) [csv]\n"
        );
    }

    #[test]
    fn test_write_accounts_empty() {
        let mut output = Vec::new();
        write_accounts(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "list of available banking accounts: \n"
        );
    }
}
