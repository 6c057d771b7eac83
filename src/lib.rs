//! Client Ledger - file-backed client account management
//!
//! This library provides the core functionality for a single-user client
//! account ledger. Client records live in a flat text file that is fully
//! rewritten on every change, and money operations are recorded in a
//! separate append-only transaction log.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Client records and money amounts
//! - `storage`: Line codec and clients file storage
//! - `audit`: Transaction log
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `ledger` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use client_ledger::config::{LedgerPaths, Settings};
//! use client_ledger::services::TransactionService;
//! use client_ledger::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, settings)?;
//! TransactionService::new(&storage).transfer("100", "200", amount)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
