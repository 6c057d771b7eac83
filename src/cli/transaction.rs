//! CLI command handlers for money operations
//!
//! Withdraw, deposit, transfer, balance inquiry and transaction history.

use crate::config::HistoryMatch;
use crate::display::client::format_history;
use crate::error::LedgerResult;
use crate::services::TransactionService;
use crate::storage::Storage;

use super::client::parse_amount;

/// Handle the withdraw command
pub fn handle_withdraw_command(storage: &Storage, account: &str, amount: &str) -> LedgerResult<()> {
    let amount = parse_amount(amount)?;
    let client = TransactionService::new(storage).withdraw(account, amount)?;

    println!(
        "Withdrawal successful. New Balance: {}",
        client
            .account_balance
            .format_with_symbol(&storage.settings().currency_symbol)
    );
    Ok(())
}

/// Handle the deposit command
pub fn handle_deposit_command(storage: &Storage, account: &str, amount: &str) -> LedgerResult<()> {
    let amount = parse_amount(amount)?;
    let client = TransactionService::new(storage).deposit(account, amount)?;

    println!(
        "Deposit successful. New Balance: {}",
        client
            .account_balance
            .format_with_symbol(&storage.settings().currency_symbol)
    );
    Ok(())
}

/// Handle the transfer command
pub fn handle_transfer_command(
    storage: &Storage,
    from: &str,
    to: &str,
    amount: &str,
) -> LedgerResult<()> {
    let amount = parse_amount(amount)?;
    let result = TransactionService::new(storage).transfer(from, to, amount)?;
    let symbol = storage.settings().currency_symbol.as_str();

    println!("Transfer successful!");
    println!(
        "  New Balance - Sender   ({}): {}",
        result.sender.account_number,
        result.sender.account_balance.format_with_symbol(symbol)
    );
    println!(
        "  New Balance - Receiver ({}): {}",
        result.receiver.account_number,
        result.receiver.account_balance.format_with_symbol(symbol)
    );
    Ok(())
}

/// Handle the balance inquiry command
pub fn handle_balance_command(storage: &Storage, account: &str) -> LedgerResult<()> {
    let inquiry = TransactionService::new(storage).balance_inquiry(account)?;

    println!("Client: {}", inquiry.name);
    println!(
        "Balance: {}",
        inquiry
            .balance
            .format_with_symbol(&storage.settings().currency_symbol)
    );
    Ok(())
}

/// Handle the history command
pub fn handle_history_command(storage: &Storage, account: &str, exact: bool) -> LedgerResult<()> {
    let mode = exact.then_some(HistoryMatch::Exact);
    let lines = TransactionService::new(storage).history(account, mode)?;

    print!("{}", format_history(account, &lines));
    Ok(())
}
