//! Core data models for the client ledger
//!
//! Client records and the money type used for balances and amounts.

pub mod client;
pub mod money;

pub use client::{ClientRecord, ClientValidationError, FIELD_SEPARATOR};
pub use money::Money;
