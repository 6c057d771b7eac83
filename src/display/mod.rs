//! Display formatting for terminal output
//!
//! Provides utilities for formatting client records and transaction history
//! for terminal display.

pub mod client;

pub use client::{format_client_details, format_client_list, format_history};
