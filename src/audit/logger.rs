//! Append-only transaction log
//!
//! Each money operation is written as one human-readable line and flushed
//! immediately. The log is never rewritten and never used to rebuild
//! balances.

use std::path::PathBuf;

use log::debug;

use crate::config::HistoryMatch;
use crate::error::LedgerResult;
use crate::storage::file_io::{append_line, read_lines};

use super::entry::{referenced_accounts, TransactionLogEntry};

/// Handles writing and searching the transaction log file
pub struct TransactionLog {
    /// Path to the transaction log file
    log_path: PathBuf,
}

impl TransactionLog {
    /// Create a new TransactionLog that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as a single line
    pub fn append(&self, entry: &TransactionLogEntry) -> LedgerResult<()> {
        append_line(&self.log_path, &entry.format_line())?;
        debug!(
            "logged {} for account {}",
            entry.transaction_type, entry.account_number
        );
        Ok(())
    }

    /// Read every line of the log, oldest first
    pub fn read_all(&self) -> LedgerResult<Vec<String>> {
        read_lines(&self.log_path)
    }

    /// Lines that mention the given account
    ///
    /// `Substring` matching returns any line containing the account number,
    /// so "10" also matches lines for "100". `Exact` only matches the
    /// `Account` and `Target Account` fields.
    pub fn find_by_account(
        &self,
        account_number: &str,
        mode: HistoryMatch,
    ) -> LedgerResult<Vec<String>> {
        let lines = self.read_all()?;

        Ok(lines
            .into_iter()
            .filter(|line| match mode {
                HistoryMatch::Substring => line.contains(account_number),
                HistoryMatch::Exact => referenced_accounts(line).contains(&account_number),
            })
            .collect())
    }

    /// Get the number of entries in the log
    pub fn entry_count(&self) -> LedgerResult<usize> {
        Ok(self.read_all()?.len())
    }

    /// Check if the log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_log() -> (TransactionLog, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("Transactions_Log.txt");
        (TransactionLog::new(log_path), temp_dir)
    }

    #[test]
    fn test_append_and_read() {
        let (log, _temp) = create_test_log();

        log.append(&TransactionLogEntry::deposit("100", Money::from_cents(500)))
            .unwrap();

        let lines = log.read_all().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Type: Deposit, Account: 100, Amount: 5.00"));
    }

    #[test]
    fn test_append_keeps_order() {
        let (log, _temp) = create_test_log();

        log.append(&TransactionLogEntry::deposit("100", Money::from_cents(100)))
            .unwrap();
        log.append(&TransactionLogEntry::withdraw("100", Money::from_cents(50)))
            .unwrap();
        log.append(&TransactionLogEntry::balance_inquiry("100"))
            .unwrap();

        let lines = log.read_all().unwrap();
        assert_eq!(log.entry_count().unwrap(), 3);
        assert!(lines[0].contains("Deposit"));
        assert!(lines[1].contains("Withdraw"));
        assert!(lines[2].contains("Balance Inquiry"));
    }

    #[test]
    fn test_empty_log() {
        let (log, _temp) = create_test_log();

        assert!(!log.exists());
        assert_eq!(log.entry_count().unwrap(), 0);
        assert!(log
            .find_by_account("100", HistoryMatch::Substring)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_substring_match_over_matches() {
        let (log, _temp) = create_test_log();

        log.append(&TransactionLogEntry::deposit("10", Money::from_cents(100)))
            .unwrap();
        log.append(&TransactionLogEntry::deposit("100", Money::from_cents(200)))
            .unwrap();

        let lines = log.find_by_account("10", HistoryMatch::Substring).unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_exact_match() {
        let (log, _temp) = create_test_log();

        log.append(&TransactionLogEntry::deposit("10", Money::from_cents(100)))
            .unwrap();
        log.append(&TransactionLogEntry::deposit("100", Money::from_cents(200)))
            .unwrap();
        log.append(&TransactionLogEntry::transfer("300", "10", Money::from_cents(300)))
            .unwrap();

        let lines = log.find_by_account("10", HistoryMatch::Exact).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Amount: 1.00"));
        assert!(lines[1].contains("Target Account: 10,"));
    }

    #[test]
    fn test_survives_restart() {
        let (log, temp) = create_test_log();
        log.append(&TransactionLogEntry::balance_inquiry("100"))
            .unwrap();

        let log2 = TransactionLog::new(temp.path().join("Transactions_Log.txt"));
        assert_eq!(log2.read_all().unwrap().len(), 1);
    }
}
