//! Client CLI commands
//!
//! Implements CLI commands for client management.

use clap::Subcommand;

use crate::display::client::{format_client_details, format_client_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{ClientRecord, Money};
use crate::services::ClientService;
use crate::storage::Storage;

/// Client subcommands
#[derive(Subcommand)]
pub enum ClientCommands {
    /// Add a new client
    Add {
        /// Account number
        account: String,
        /// Account holder name
        #[arg(short, long)]
        name: String,
        /// Phone number
        #[arg(short, long, default_value = "")]
        phone: String,
        /// Opening balance (e.g., "50.00" or "50")
        #[arg(short, long, default_value = "0")]
        balance: String,
        /// PIN code (prompted for when omitted)
        #[arg(long)]
        pin: Option<String>,
    },
    /// List all clients
    List,
    /// Show client details
    Show {
        /// Account number
        account: String,
    },
    /// Edit a client, keeping any field that is not given
    Edit {
        /// Account number
        account: String,
        /// New account number
        #[arg(long)]
        new_account: Option<String>,
        /// New PIN code
        #[arg(long)]
        pin: Option<String>,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New phone number
        #[arg(short, long)]
        phone: Option<String>,
        /// New balance
        #[arg(short, long)]
        balance: Option<String>,
    },
    /// Delete a client
    Delete {
        /// Account number
        account: String,
    },
}

/// Handle a client command
pub fn handle_client_command(storage: &Storage, cmd: ClientCommands) -> LedgerResult<()> {
    let service = ClientService::new(storage);
    let symbol = storage.settings().currency_symbol.as_str();

    match cmd {
        ClientCommands::Add {
            account,
            name,
            phone,
            balance,
            pin,
        } => {
            let pin = match pin {
                Some(pin) => pin,
                None => prompt_pin("Enter Pin Code: ")?,
            };
            let balance = parse_amount(&balance)?;

            let client = service.add(ClientRecord::new(account, pin, name, phone, balance))?;
            println!("Client added successfully: {}", client);
        }

        ClientCommands::List => {
            let clients = service.list()?;
            print!("{}", format_client_list(&clients, symbol));
        }

        ClientCommands::Show { account } => {
            let client = service.find(&account)?;
            print!("{}", format_client_details(&client, symbol));
        }

        ClientCommands::Edit {
            account,
            new_account,
            pin,
            name,
            phone,
            balance,
        } => {
            if new_account.is_none()
                && pin.is_none()
                && name.is_none()
                && phone.is_none()
                && balance.is_none()
            {
                println!("No changes specified. Use --name, --phone, --pin, --balance or --new-account.");
                return Ok(());
            }

            let mut updated = service.find(&account)?;
            if let Some(value) = new_account {
                updated.account_number = value;
            }
            if let Some(value) = pin {
                updated.pin_code = value;
            }
            if let Some(value) = name {
                updated.name = value;
            }
            if let Some(value) = phone {
                updated.phone = value;
            }
            if let Some(value) = balance {
                updated.account_balance = parse_amount(&value)?;
            }

            let client = service.modify(&account, updated)?;
            println!("Client updated successfully: {}", client);
        }

        ClientCommands::Delete { account } => {
            let removed = service.delete(&account)?;
            println!(
                "Client deleted successfully: {} ({} record(s))",
                account,
                removed.len()
            );
        }
    }

    Ok(())
}

/// Parse a user-entered amount
pub fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '100.00' or '100'. Error: {}",
            input, e
        ))
    })
}

/// Prompt for a PIN (hidden input)
fn prompt_pin(prompt: &str) -> LedgerResult<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| LedgerError::Io(format!("Failed to read PIN: {}", e)))
}
