//! List strategy: print one summary line per transaction

use crate::core::dispatcher::{RunSummary, SyncState};
use crate::core::fingerprint::fingerprint;
use crate::io::text_format::format_transaction_line;
use crate::strategy::TransactionSink;
use crate::types::{NormalizedTransaction, SyncError};
use std::io::Write;

/// Sink printing `transaction <n> [<fingerprint>] - name: (...) ...` lines
pub struct ListSink<W: Write> {
    output: W,
}

impl<W: Write> ListSink<W> {
    pub fn new(output: W) -> Self {
        ListSink { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> TransactionSink for ListSink<W> {
    fn state(&self) -> SyncState {
        SyncState::Listing
    }

    fn accept(
        &mut self,
        index: usize,
        transaction: &NormalizedTransaction,
        summary: &mut RunSummary,
    ) -> Result<(), SyncError> {
        let line = format_transaction_line(index, fingerprint(transaction), transaction);
        writeln!(self.output, "{}", line)?;
        summary.listed += 1;
        Ok(())
    }

    fn finish(&mut self, _summary: &mut RunSummary) -> Result<(), SyncError> {
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fingerprint::djb2;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_list_sink_prints_fingerprinted_line() {
        let transaction = NormalizedTransaction {
            remote_name: Some("ACMECorp".to_string()),
            purpose: Some("Invoice42".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, 1),
            value: Decimal::new(1250, 2),
            currency: Some("EUR".to_string()),
        };
        let mut sink = ListSink::new(Vec::new());
        let mut summary = RunSummary::default();

        sink.accept(1, &transaction, &mut summary).unwrap();
        sink.finish(&mut summary).unwrap();

        let expected_fingerprint = djb2("ACMECorp")
            .wrapping_add(djb2("Invoice42"))
            .wrapping_add(djb2("2024-03-01"))
            .wrapping_add(djb2("EUR"));
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            format!(
                "transaction 1 [{}] - name: (ACMECorp) purpose: (Invoice42) date: (2024-03-01) value: (12.50 EUR)\n",
                expected_fingerprint
            )
        );
        assert_eq!(summary.listed, 1);
    }

    #[test]
    fn test_list_sink_state() {
        let sink = ListSink::new(Vec::new());
        assert_eq!(sink.state(), SyncState::Listing);
    }
}
