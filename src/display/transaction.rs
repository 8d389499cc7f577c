//! Transaction display formatting
//!
//! Renders the filtered transaction list as a fixed-width table, newest
//! first, with the id in the first column so rows can be deleted by id.

use crate::config::Settings;
use crate::models::Transaction;

use super::{fit, format_money};

const ID_WIDTH: usize = 14;
const DATE_WIDTH: usize = 10;
const TYPE_WIDTH: usize = 7;
const CATEGORY_WIDTH: usize = 14;
const DESC_WIDTH: usize = 28;
const AMOUNT_WIDTH: usize = 14;

/// Format a single transaction as a table row
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{} {} {} {} {} {:>width$}",
        fit(&txn.id.to_string(), ID_WIDTH),
        fit(&txn.date, DATE_WIDTH),
        fit(&txn.kind.as_str().to_uppercase(), TYPE_WIDTH),
        fit(&txn.category, CATEGORY_WIDTH),
        fit(&txn.description, DESC_WIDTH),
        format_money(txn.amount, settings),
        width = AMOUNT_WIDTH
    )
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[&Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{} {} {} {} {} {:>width$}\n",
        fit("ID", ID_WIDTH),
        fit("Date", DATE_WIDTH),
        fit("Type", TYPE_WIDTH),
        fit("Category", CATEGORY_WIDTH),
        fit("Description", DESC_WIDTH),
        "Amount",
        width = AMOUNT_WIDTH
    ));
    output.push_str(&"-".repeat(
        ID_WIDTH + DATE_WIDTH + TYPE_WIDTH + CATEGORY_WIDTH + DESC_WIDTH + AMOUNT_WIDTH + 5,
    ));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Amount:      {}\n", format_money(txn.amount, settings)));

    output
}
