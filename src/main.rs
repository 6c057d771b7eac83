use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use client_ledger::cli::{
    handle_balance_command, handle_client_command, handle_deposit_command,
    handle_history_command, handle_transfer_command, handle_withdraw_command, ClientCommands,
};
use client_ledger::config::paths::{LedgerPaths, DATA_DIR_ENV};
use client_ledger::config::settings::Settings;
use client_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "File-backed client account ledger",
    long_about = "Manages client accounts stored in a flat text file and records every \
                  withdraw, deposit, transfer and balance inquiry in an append-only \
                  transaction log."
)]
struct Cli {
    /// Directory holding Clients.txt, Transactions_Log.txt and config.json
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Client management commands
    #[command(subcommand)]
    Client(ClientCommands),

    /// Withdraw from an account
    Withdraw {
        /// Account number
        account: String,
        /// Amount (e.g., "20.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Deposit into an account
    Deposit {
        /// Account number
        account: String,
        /// Amount (e.g., "20.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Transfer between two accounts
    Transfer {
        /// Sending account number
        from: String,
        /// Receiving account number
        to: String,
        /// Amount (e.g., "20.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show an account's holder and balance
    Balance {
        /// Account number
        account: String,
    },

    /// Show transaction log lines for an account
    History {
        /// Account number
        account: String,
        /// Match only the account fields instead of any substring
        #[arg(long)]
        exact: bool,
    },

    /// Write a settings file with default values
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone(), settings)?;

    match cli.command {
        Some(Commands::Client(cmd)) => handle_client_command(&storage, cmd)?,
        Some(Commands::Withdraw { account, amount }) => {
            handle_withdraw_command(&storage, &account, &amount)?
        }
        Some(Commands::Deposit { account, amount }) => {
            handle_deposit_command(&storage, &account, &amount)?
        }
        Some(Commands::Transfer { from, to, amount }) => {
            handle_transfer_command(&storage, &from, &to, &amount)?
        }
        Some(Commands::Balance { account }) => handle_balance_command(&storage, &account)?,
        Some(Commands::History { account, exact }) => {
            handle_history_command(&storage, &account, exact)?
        }
        Some(Commands::Init) => {
            storage.settings().save(&paths)?;
            println!("Initialized client ledger at: {}", paths.base_dir().display());
        }
        Some(Commands::Config) => {
            let settings = storage.settings();
            println!("Client Ledger Configuration");
            println!("===========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Clients file:    {}", paths.clients_file().display());
            println!("Transaction log: {}", paths.transaction_log().display());
            println!("Log entries:     {}", storage.transactions.entry_count()?);
            println!();
            println!("Settings:");
            println!("  Reject duplicate accounts: {}", settings.reject_duplicate_accounts);
            println!("  Malformed records:         {:?}", settings.malformed_records);
            println!("  History match:             {:?}", settings.history_match);
            println!("  Log rejected attempts:     {}", settings.log_rejected_attempts);
        }
        None => {
            println!("Client Ledger - file-backed client accounts");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}
