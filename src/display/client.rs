//! Client display formatting
//!
//! Formats clients for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::ClientRecord;

#[derive(Tabled)]
struct ClientRow<'a> {
    #[tabled(rename = "Account Number")]
    account_number: &'a str,
    #[tabled(rename = "Pin Code")]
    pin_code: &'a str,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Phone")]
    phone: &'a str,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format a list of clients as a table
pub fn format_client_list(clients: &[ClientRecord], currency_symbol: &str) -> String {
    if clients.is_empty() {
        return "No clients found.\n".to_string();
    }

    let rows = clients.iter().map(|c| ClientRow {
        account_number: &c.account_number,
        pin_code: &c.pin_code,
        name: &c.name,
        phone: &c.phone,
        balance: c.account_balance.format_with_symbol(currency_symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::ascii());

    format!("Client List ({} clients)\n{}\n", clients.len(), table)
}

/// Format a single client's details
pub fn format_client_details(client: &ClientRecord, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", client.account_number));
    output.push_str(&format!("  Name:     {}\n", client.name));
    output.push_str(&format!("  Phone:    {}\n", client.phone));
    output.push_str(&format!("  Pin Code: {}\n", client.pin_code));
    output.push_str(&format!(
        "  Balance:  {}\n",
        client.account_balance.format_with_symbol(currency_symbol)
    ));

    output
}

/// Format transaction log lines for an account
pub fn format_history(account_number: &str, lines: &[String]) -> String {
    if lines.is_empty() {
        return format!("No transactions found for account {}.\n", account_number);
    }

    let mut output = format!("Transactions for Account: {}\n", account_number);
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }
    output
}
