//! Transaction log for the client ledger
//!
//! Records every money operation (withdraw, deposit, transfer, balance
//! inquiry) in an append-only text file that is separate from the client
//! records.
//!
//! # Architecture
//!
//! - `TransactionLogEntry`: one operation with timestamp, type, account,
//!   amount and optional transfer target.
//! - `TransactionLog`: appends formatted lines and searches them by account.
//!
//! # Example
//!
//! ```rust,ignore
//! use client_ledger::audit::{TransactionLog, TransactionLogEntry};
//!
//! let log = TransactionLog::new(paths.transaction_log());
//! log.append(&TransactionLogEntry::transfer("100", "200", amount))?;
//! let lines = log.find_by_account("100", HistoryMatch::Substring)?;
//! ```

mod entry;
mod logger;

pub use entry::{referenced_accounts, TransactionLogEntry, TransactionType, TIMESTAMP_FORMAT};
pub use logger::TransactionLog;
