//! Summary panel formatting

use crate::config::Settings;
use crate::services::Summary;

use super::format_money;

/// Format income, expense and balance totals, one per line
pub fn format_summary(summary: &Summary, settings: &Settings) -> String {
    format!(
        "Income:  {}\nExpense: {}\nBalance: {}\n",
        format_money(summary.income, settings),
        format_money(summary.expense, settings),
        format_money(summary.balance, settings),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_summary() {
        let summary = Summary {
            income: Money::zero(),
            expense: Money::from_major(1200),
            balance: Money::from_major(-1200),
        };
        let text = format_summary(&summary, &Settings::default());
        assert_eq!(text, "Income:  ₹0\nExpense: ₹1,200\nBalance: -₹1,200\n");
    }
}
