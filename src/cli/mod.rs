//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod client;
pub mod transaction;

pub use client::{handle_client_command, parse_amount, ClientCommands};
pub use transaction::{
    handle_balance_command, handle_deposit_command, handle_history_command,
    handle_transfer_command, handle_withdraw_command,
};
