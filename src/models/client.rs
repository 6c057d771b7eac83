//! Client record model
//!
//! Represents one account holder as stored in the clients file.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::storage::codec::obfuscate_pin;

/// Field separator used by the on-disk line format
pub const FIELD_SEPARATOR: &str = "#//#";

/// A single client account
///
/// The PIN is kept in plaintext in memory; it is only obfuscated when the
/// record is encoded for storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Account number (lookup key)
    pub account_number: String,

    /// PIN code
    pub pin_code: String,

    /// Account holder name
    pub name: String,

    /// Contact phone number
    pub phone: String,

    /// Current balance
    pub account_balance: Money,
}

impl ClientRecord {
    /// Create a new client record
    pub fn new(
        account_number: impl Into<String>,
        pin_code: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        account_balance: Money,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            pin_code: pin_code.into(),
            name: name.into(),
            phone: phone.into(),
            account_balance,
        }
    }

    /// Check whether this record carries the given account number
    pub fn matches(&self, account_number: &str) -> bool {
        self.account_number == account_number
    }

    /// Validate the record before it is persisted
    pub fn validate(&self) -> Result<(), ClientValidationError> {
        if self.account_number.trim().is_empty() {
            return Err(ClientValidationError::EmptyAccountNumber);
        }

        for (field, value) in self.text_fields() {
            if value.contains(FIELD_SEPARATOR) {
                return Err(ClientValidationError::ContainsSeparator(field));
            }
            if value.contains(['\n', '\r']) {
                return Err(ClientValidationError::ContainsLineBreak(field));
            }
        }

        // The PIN is written shifted, so check the stored form as well
        let storable = obfuscate_pin(&self.pin_code)
            .map(|stored| !stored.contains(FIELD_SEPARATOR) && !stored.contains(['\n', '\r']))
            .unwrap_or(false);
        if !storable {
            return Err(ClientValidationError::UnstorablePin);
        }

        if self.account_balance.is_negative() {
            return Err(ClientValidationError::NegativeBalance(self.account_balance));
        }

        Ok(())
    }

    fn text_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("account number", self.account_number.as_str()),
            ("PIN code", self.pin_code.as_str()),
            ("name", self.name.as_str()),
            ("phone", self.phone.as_str()),
        ]
    }
}

impl fmt::Display for ClientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_number)
    }
}

/// Validation errors for client records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientValidationError {
    EmptyAccountNumber,
    ContainsSeparator(&'static str),
    ContainsLineBreak(&'static str),
    UnstorablePin,
    NegativeBalance(Money),
}

impl fmt::Display for ClientValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAccountNumber => write!(f, "Account number cannot be empty"),
            Self::ContainsSeparator(field) => {
                write!(f, "Client {} cannot contain '{}'", field, FIELD_SEPARATOR)
            }
            Self::ContainsLineBreak(field) => {
                write!(f, "Client {} cannot contain line breaks", field)
            }
            Self::UnstorablePin => {
                write!(f, "PIN code contains characters that cannot be stored")
            }
            Self::NegativeBalance(balance) => {
                write!(f, "Account balance cannot be negative ({})", balance)
            }
        }
    }
}

impl std::error::Error for ClientValidationError {}
