//! Custom error types for the client ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for client records
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors (strict mode only)
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Amount is zero or negative
    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    /// Insufficient funds
    #[error("Insufficient funds in account '{account}': need {needed}, have {available}")]
    InsufficientFunds {
        account: String,
        needed: Money,
        available: Money,
    },

    /// Transfer source and destination are the same account
    #[error("Cannot transfer to the same account: {0}")]
    SameAccount(String),

    /// A stored line could not be decoded into a client record
    #[error("Malformed record: {reason}")]
    MalformedRecord { reason: String },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a "not found" error for client accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for the sending side of a transfer
    pub fn sender_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Sender account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for the receiving side of a transfer
    pub fn receiver_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Receiver account",
            identifier: identifier.into(),
        }
    }

    /// Create a malformed record error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::account_not_found("100");
        assert_eq!(err.to_string(), "Account not found: 100");
        assert!(err.is_not_found());

        let err = LedgerError::receiver_not_found("200");
        assert_eq!(err.to_string(), "Receiver account not found: 200");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_insufficient_funds_error() {
        let err = LedgerError::InsufficientFunds {
            account: "100".into(),
            needed: Money::from_cents(100000),
            available: Money::from_cents(5000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds in account '100': need $1000.00, have $50.00"
        );
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = LedgerError::InvalidAmount(Money::from_cents(-250));
        assert_eq!(err.to_string(), "Invalid amount: -$2.50");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
