//! Transaction log entry data structures
//!
//! Defines the money-movement event types and the human-readable line
//! format written to the transaction log.

use chrono::{DateTime, Local};
use std::fmt;

use crate::models::Money;

/// `ctime`-style timestamp layout, e.g. `Mon Oct 19 14:03:22 2026`
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Types of money operations recorded in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Withdraw,
    Deposit,
    Transfer,
    BalanceInquiry,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Withdraw => write!(f, "Withdraw"),
            TransactionType::Deposit => write!(f, "Deposit"),
            TransactionType::Transfer => write!(f, "Transfer"),
            TransactionType::BalanceInquiry => write!(f, "Balance Inquiry"),
        }
    }
}

/// A single transaction log entry
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionLogEntry {
    /// When the operation occurred (local time)
    pub timestamp: DateTime<Local>,

    /// Type of operation performed
    pub transaction_type: TransactionType,

    /// Account the operation was performed on (sender for transfers)
    pub account_number: String,

    /// Amount moved, zero for inquiries
    pub amount: Money,

    /// Receiving account for transfers
    pub target_account: Option<String>,
}

impl TransactionLogEntry {
    /// Create an entry stamped with the current time
    pub fn new(
        transaction_type: TransactionType,
        account_number: impl Into<String>,
        amount: Money,
        target_account: Option<String>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            transaction_type,
            account_number: account_number.into(),
            amount,
            target_account,
        }
    }

    pub fn withdraw(account_number: impl Into<String>, amount: Money) -> Self {
        Self::new(TransactionType::Withdraw, account_number, amount, None)
    }

    pub fn deposit(account_number: impl Into<String>, amount: Money) -> Self {
        Self::new(TransactionType::Deposit, account_number, amount, None)
    }

    pub fn transfer(
        from_account: impl Into<String>,
        to_account: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self::new(
            TransactionType::Transfer,
            from_account,
            amount,
            Some(to_account.into()),
        )
    }

    pub fn balance_inquiry(account_number: impl Into<String>) -> Self {
        Self::new(
            TransactionType::BalanceInquiry,
            account_number,
            Money::zero(),
            None,
        )
    }

    /// Format the entry as a log line (without trailing newline)
    ///
    /// `[<timestamp>] Type: <type>, Account: <acct>[, Target Account: <acct>], Amount: <amount>`
    pub fn format_line(&self) -> String {
        let mut output = format!(
            "[{}] Type: {}, Account: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.transaction_type,
            self.account_number
        );

        if let Some(target) = &self.target_account {
            output.push_str(&format!(", Target Account: {}", target));
        }

        output.push_str(&format!(", Amount: {}", self.amount.to_plain_string()));
        output
    }
}

impl fmt::Display for TransactionLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_line())
    }
}

/// Account numbers named by the `Account` and `Target Account` fields of a log line
pub fn referenced_accounts(line: &str) -> Vec<&str> {
    let fields = match line.split_once("] ") {
        Some((_, rest)) => rest,
        None => line,
    };

    fields
        .split(", ")
        .filter_map(|field| field.split_once(": "))
        .filter(|(key, _)| *key == "Account" || *key == "Target Account")
        .map(|(_, value)| value)
        .collect()
}
