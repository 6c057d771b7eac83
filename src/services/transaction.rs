//! Transaction service
//!
//! Provides the money operations: withdraw, deposit, transfer and balance
//! inquiry, plus transaction history lookup. Every operation follows the
//! same cycle: load the clients file, locate, validate, mutate, save the
//! whole file, then append to the transaction log.

use log::{info, warn};

use crate::audit::TransactionLogEntry;
use crate::config::HistoryMatch;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{ClientRecord, Money};
use crate::storage::Storage;

/// Service for money operations on client accounts
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Result of a completed transfer
#[derive(Debug, Clone)]
pub struct TransferResult {
    /// Sender after the transfer
    pub sender: ClientRecord,
    /// Receiver after the transfer
    pub receiver: ClientRecord,
    /// Amount moved
    pub amount: Money,
}

/// Result of a balance inquiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceInquiry {
    pub account_number: String,
    pub name: String,
    pub balance: Money,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Withdraw from an account
    ///
    /// The amount must be positive and no larger than the balance.
    pub fn withdraw(&self, account_number: &str, amount: Money) -> LedgerResult<ClientRecord> {
        let mut clients = self.storage.clients.load_all()?;
        let index = locate(&clients, account_number)
            .ok_or_else(|| LedgerError::account_not_found(account_number))?;

        let balance = clients[index].account_balance;
        if !amount.is_positive() {
            return Err(self.reject(
                TransactionLogEntry::withdraw(account_number, amount),
                LedgerError::InvalidAmount(amount),
            ));
        }
        if amount > balance {
            return Err(self.reject(
                TransactionLogEntry::withdraw(account_number, amount),
                LedgerError::InsufficientFunds {
                    account: account_number.to_string(),
                    needed: amount,
                    available: balance,
                },
            ));
        }

        clients[index].account_balance -= amount;
        self.storage.clients.save_all(&clients)?;
        self.storage
            .log_transaction(&TransactionLogEntry::withdraw(account_number, amount));
        info!("withdrew {} from {}", amount, account_number);

        Ok(clients.swap_remove(index))
    }

    /// Deposit into an account
    pub fn deposit(&self, account_number: &str, amount: Money) -> LedgerResult<ClientRecord> {
        let mut clients = self.storage.clients.load_all()?;
        let index = locate(&clients, account_number)
            .ok_or_else(|| LedgerError::account_not_found(account_number))?;

        if !amount.is_positive() {
            return Err(self.reject(
                TransactionLogEntry::deposit(account_number, amount),
                LedgerError::InvalidAmount(amount),
            ));
        }

        clients[index].account_balance = credit(&clients[index], amount)?;
        self.storage.clients.save_all(&clients)?;
        self.storage
            .log_transaction(&TransactionLogEntry::deposit(account_number, amount));
        info!("deposited {} into {}", amount, account_number);

        Ok(clients.swap_remove(index))
    }

    /// Move money from one account to another
    ///
    /// Both accounts are located before either balance changes, and the
    /// clients file is written once with both updates.
    pub fn transfer(&self, from: &str, to: &str, amount: Money) -> LedgerResult<TransferResult> {
        if from == to {
            return Err(LedgerError::SameAccount(from.to_string()));
        }

        let mut clients = self.storage.clients.load_all()?;

        let mut sender = None;
        let mut receiver = None;
        for (i, client) in clients.iter().enumerate() {
            if sender.is_none() && client.matches(from) {
                sender = Some(i);
            } else if receiver.is_none() && client.matches(to) {
                receiver = Some(i);
            }
        }

        let sender = sender.ok_or_else(|| LedgerError::sender_not_found(from))?;
        let receiver = receiver.ok_or_else(|| LedgerError::receiver_not_found(to))?;

        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let available = clients[sender].account_balance;
        if available < amount {
            return Err(LedgerError::InsufficientFunds {
                account: from.to_string(),
                needed: amount,
                available,
            });
        }

        let receiver_balance = credit(&clients[receiver], amount)?;
        clients[sender].account_balance -= amount;
        clients[receiver].account_balance = receiver_balance;

        self.storage.clients.save_all(&clients)?;
        self.storage
            .log_transaction(&TransactionLogEntry::transfer(from, to, amount));
        info!("transferred {} from {} to {}", amount, from, to);

        Ok(TransferResult {
            sender: clients[sender].clone(),
            receiver: clients[receiver].clone(),
            amount,
        })
    }

    /// Report the holder name and balance of an account
    pub fn balance_inquiry(&self, account_number: &str) -> LedgerResult<BalanceInquiry> {
        let clients = self.storage.clients.load_all()?;
        let client = clients
            .into_iter()
            .find(|c| c.matches(account_number))
            .ok_or_else(|| LedgerError::account_not_found(account_number))?;

        self.storage
            .log_transaction(&TransactionLogEntry::balance_inquiry(account_number));

        Ok(BalanceInquiry {
            account_number: client.account_number,
            name: client.name,
            balance: client.account_balance,
        })
    }

    /// Transaction log lines for an account
    ///
    /// Uses the configured matching mode unless one is given.
    pub fn history(
        &self,
        account_number: &str,
        mode: Option<HistoryMatch>,
    ) -> LedgerResult<Vec<String>> {
        let mode = mode.unwrap_or(self.storage.settings().history_match);
        self.storage.transactions.find_by_account(account_number, mode)
    }

    /// Log a rejected attempt when configured to, and hand back the error
    fn reject(&self, entry: TransactionLogEntry, err: LedgerError) -> LedgerError {
        warn!("rejected {} on {}: {}", entry.transaction_type, entry.account_number, err);
        if self.storage.settings().log_rejected_attempts {
            self.storage.log_transaction(&entry);
        }
        err
    }
}

fn locate(clients: &[ClientRecord], account_number: &str) -> Option<usize> {
    clients.iter().position(|c| c.matches(account_number))
}

fn credit(client: &ClientRecord, amount: Money) -> LedgerResult<Money> {
    client.account_balance.checked_add(amount).ok_or_else(|| {
        LedgerError::Validation(format!(
            "Balance of account {} would overflow",
            client.account_number
        ))
    })
}
