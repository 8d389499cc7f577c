//! TUI Views module
//!
//! The single ledger screen: summary panel, filter bar, transaction table
//! and status bar, with any open dialog drawn on top.

pub mod filter_bar;
pub mod register;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    summary::render(frame, app, layout.summary);
    filter_bar::render(frame, app, layout.filter_bar);
    register::render(frame, app, layout.table);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::ConfirmClear => dialogs::clear::render(frame, app),
        ActiveDialog::AddTransaction => dialogs::transaction::render(frame, app),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LedgerPaths, Settings};
    use crate::models::TransactionType;
    use crate::services::{CreateTransactionInput, TransactionService};
    use crate::storage::Storage;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_ledger_screen() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage =
            Storage::open(LedgerPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let settings = Settings::default();
        let app = App::new(&mut storage, &settings);

        let text = screen(&app);
        assert!(text.contains("No transactions found"));
        assert!(text.contains("Income"));
        assert!(text.contains("₹0"));
    }

    #[test]
    fn test_screen_shows_rows_and_dialogs() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage =
            Storage::open(LedgerPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let settings = Settings::default();
        TransactionService::new(&mut storage, &settings)
            .create(CreateTransactionInput {
                kind: TransactionType::Income,
                category: "Salary".into(),
                description: "March pay".into(),
                amount: "50000".into(),
            })
            .unwrap();

        let mut app = App::new(&mut storage, &settings);
        let text = screen(&app);
        assert!(text.contains("March pay"));
        assert!(text.contains("₹50,000"));

        app.open_dialog(ActiveDialog::ConfirmClear);
        let text = screen(&app);
        assert!(text.contains("Clear all transactions?"));
        assert!(text.contains("This removes 1 transaction."));
        assert!(!text.contains("not shown"));

        app.open_add_dialog();
        assert!(screen(&app).contains("Add Transaction"));
    }

    #[test]
    fn test_clear_dialog_counts_filtered_out_rows() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage =
            Storage::open(LedgerPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let settings = Settings::default();
        let mut service = TransactionService::new(&mut storage, &settings);
        for (kind, category, description) in [
            (TransactionType::Income, "Salary", "March pay"),
            (TransactionType::Expense, "Food", "Groceries"),
            (TransactionType::Expense, "Rent", "April rent"),
        ] {
            service
                .create(CreateTransactionInput {
                    kind,
                    category: category.into(),
                    description: description.into(),
                    amount: "100".into(),
                })
                .unwrap();
        }

        let mut app = App::new(&mut storage, &settings);
        app.cycle_type_filter();
        assert_eq!(app.visible_rows().len(), 1);

        app.open_dialog(ActiveDialog::ConfirmClear);
        let text = screen(&app);
        assert!(text.contains("This removes all 3 transactions."));
        assert!(text.contains("(2 not shown by the current filters)"));
    }
}
