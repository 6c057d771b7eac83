//! Service layer for the client ledger
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, balance rules and transaction logging.

pub mod client;
pub mod transaction;

pub use client::ClientService;
pub use transaction::{BalanceInquiry, TransactionService, TransferResult};
