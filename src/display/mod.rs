//! Display formatting for terminal output
//!
//! Plain-text renderers used by the CLI commands.

pub mod summary;
pub mod transaction;

pub use summary::format_summary;
pub use transaction::{format_transaction_details, format_transaction_table};

use crate::config::Settings;
use crate::models::Money;

/// Format an amount using the user's currency symbol and grouping
pub fn format_money(amount: Money, settings: &Settings) -> String {
    amount.format_with(&settings.currency_symbol, settings.digit_grouping)
}

/// Pad or cut `s` to exactly `width` characters
pub(crate) fn fit(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count <= width {
        format!("{:width$}", s, width = width)
    } else if width <= 3 {
        s.chars().take(width).collect()
    } else {
        let head: String = s.chars().take(width - 3).collect();
        format!("{}...", head)
    }
}
