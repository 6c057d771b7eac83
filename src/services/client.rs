//! Client service
//!
//! Provides business logic for client management: add, find, list, modify
//! and delete. Each call loads the clients file, works on the loaded copy and
//! writes it back in full.

use log::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::ClientRecord;
use crate::storage::Storage;

/// Service for client management
pub struct ClientService<'a> {
    storage: &'a Storage,
}

impl<'a> ClientService<'a> {
    /// Create a new client service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new client
    ///
    /// The record is appended to the clients file. Unless duplicate
    /// rejection is enabled in the settings, an existing client with the same
    /// account number is not checked for; lookups then see the older record
    /// first.
    pub fn add(&self, client: ClientRecord) -> LedgerResult<ClientRecord> {
        client
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        if self.storage.settings().reject_duplicate_accounts {
            let clients = self.storage.clients.load_all()?;
            if clients.iter().any(|c| c.matches(&client.account_number)) {
                return Err(duplicate(&client.account_number));
            }
        }

        self.storage.clients.append_one(&client)?;
        info!("added client {}", client.account_number);

        Ok(client)
    }

    /// Find the first client with the given account number
    pub fn find(&self, account_number: &str) -> LedgerResult<ClientRecord> {
        self.storage
            .clients
            .load_all()?
            .into_iter()
            .find(|c| c.matches(account_number))
            .ok_or_else(|| LedgerError::account_not_found(account_number))
    }

    /// Get all clients in file order
    pub fn list(&self) -> LedgerResult<Vec<ClientRecord>> {
        self.storage.clients.load_all()
    }

    /// Replace every field of the first client with the given account number
    pub fn modify(&self, account_number: &str, updated: ClientRecord) -> LedgerResult<ClientRecord> {
        updated
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let mut clients = self.storage.clients.load_all()?;
        let index = clients
            .iter()
            .position(|c| c.matches(account_number))
            .ok_or_else(|| LedgerError::account_not_found(account_number))?;

        if self.storage.settings().reject_duplicate_accounts
            && clients
                .iter()
                .enumerate()
                .any(|(i, c)| i != index && c.matches(&updated.account_number))
        {
            return Err(duplicate(&updated.account_number));
        }

        clients[index] = updated.clone();
        self.storage.clients.save_all(&clients)?;
        info!("modified client {}", account_number);

        Ok(updated)
    }

    /// Remove every client with the given account number
    ///
    /// Returns the removed records.
    pub fn delete(&self, account_number: &str) -> LedgerResult<Vec<ClientRecord>> {
        let clients = self.storage.clients.load_all()?;
        let (removed, kept): (Vec<_>, Vec<_>) = clients
            .into_iter()
            .partition(|c| c.matches(account_number));

        if removed.is_empty() {
            return Err(LedgerError::account_not_found(account_number));
        }

        self.storage.clients.save_all(&kept)?;
        info!("deleted {} record(s) for client {}", removed.len(), account_number);

        Ok(removed)
    }
}

fn duplicate(account_number: &str) -> LedgerError {
    LedgerError::Duplicate {
        entity_type: "Account",
        identifier: account_number.to_string(),
    }
}
