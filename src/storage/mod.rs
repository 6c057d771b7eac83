//! Storage layer for the client ledger
//!
//! Provides the line-based clients file with atomic rewrites, the record
//! codec, and access to the transaction log.

pub mod clients;
pub mod codec;
pub mod file_io;

pub use clients::ClientRepository;
pub use codec::{decode, encode};
pub use file_io::{append_line, read_lines, write_lines_atomic};

use log::error;

use crate::audit::{TransactionLog, TransactionLogEntry};
use crate::config::{paths::LedgerPaths, Settings};
use crate::error::LedgerError;

/// Main storage coordinator that provides access to the clients file and
/// the transaction log
pub struct Storage {
    paths: LedgerPaths,
    settings: Settings,
    pub clients: ClientRepository,
    pub transactions: TransactionLog,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths, settings: Settings) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            clients: ClientRepository::new(paths.clients_file(), settings.malformed_records),
            transactions: TransactionLog::new(paths.transaction_log()),
            paths,
            settings,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Get the active settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Append to the transaction log without failing the caller
    ///
    /// The ledger mutation that produced the entry is already committed, so a
    /// log write failure is reported and otherwise ignored.
    pub fn log_transaction(&self, entry: &TransactionLogEntry) {
        if let Err(err) = self.transactions.append(entry) {
            error!(
                "could not record {} for account {} in {}: {}",
                entry.transaction_type,
                entry.account_number,
                self.transactions.path().display(),
                err
            );
        }
    }
}
