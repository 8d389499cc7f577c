//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use tracing::error;

use crate::config::settings::Settings;
use crate::error::LedgerError;
use crate::models::{Transaction, TransactionType};
use crate::services::{ClearOutcome, Summary, TransactionFilter, TransactionService, CLEAR_PROMPT};
use crate::storage::Storage;

use super::dialogs::transaction::TransactionFormState;
use super::widgets::{Notification, TextInput};

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Keystrokes edit the search box
    Search,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    ConfirmClear,
    Help,
}

/// Main application state
pub struct App<'a> {
    pub storage: &'a mut Storage,
    pub settings: &'a Settings,

    pub should_quit: bool,
    pub input_mode: InputMode,
    pub active_dialog: ActiveDialog,

    /// Current type, category and search restrictions
    pub filter: TransactionFilter,
    pub search_input: TextInput,

    /// Row index into the filtered list
    pub selected_index: usize,

    pub transaction_form: TransactionFormState,
    pub notification: Option<Notification>,
}

impl<'a> App<'a> {
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            input_mode: InputMode::Normal,
            active_dialog: ActiveDialog::None,
            filter: TransactionFilter::new(),
            search_input: TextInput::new().label("Search").placeholder("press / to search"),
            selected_index: 0,
            transaction_form: TransactionFormState::new(),
            notification: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn service(&mut self) -> TransactionService<'_> {
        TransactionService::new(self.storage, self.settings)
    }

    /// Transactions passing the current filter, newest first
    pub fn visible_rows(&self) -> Vec<&Transaction> {
        self.filter.apply(self.storage.transactions.records())
    }

    /// Totals over the visible rows
    pub fn summary(&self) -> Summary {
        crate::services::summarize(self.visible_rows())
    }

    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.visible_rows().get(self.selected_index).copied()
    }

    /// Category filter choices: configured categories, then any others in use
    pub fn category_options(&self) -> Vec<String> {
        let mut options = self.settings.categories.clone();
        for category in self.storage.transactions.categories() {
            if !options.contains(&category) {
                options.push(category);
            }
        }
        options
    }

    // Navigation

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let count = self.visible_rows().len();
        if self.selected_index + 1 < count {
            self.selected_index += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.selected_index = self.visible_rows().len().saturating_sub(1);
    }

    /// Keep the selection inside the visible list
    fn clamp_selection(&mut self) {
        let count = self.visible_rows().len();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    // Filters

    /// all -> income -> expense -> all
    pub fn cycle_type_filter(&mut self) {
        self.filter.kind = match self.filter.kind {
            None => Some(TransactionType::Income),
            Some(TransactionType::Income) => Some(TransactionType::Expense),
            Some(TransactionType::Expense) => None,
        };
        self.selected_index = 0;
    }

    /// all -> each category option in turn -> all
    pub fn cycle_category_filter(&mut self) {
        let options = self.category_options();
        self.filter.category = match &self.filter.category {
            None => options.first().cloned(),
            Some(current) => options
                .iter()
                .position(|c| c == current)
                .and_then(|i| options.get(i + 1))
                .cloned(),
        };
        self.selected_index = 0;
    }

    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.search_input.focused = true;
    }

    pub fn finish_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.search_input.focused = false;
    }

    /// Copy the search box into the filter; called after every edit
    pub fn sync_search(&mut self) {
        self.filter.search = self.search_input.value().to_string();
        self.selected_index = 0;
    }

    pub fn reset_filters(&mut self) {
        self.filter = TransactionFilter::new();
        self.search_input.clear();
        self.selected_index = 0;
    }

    // Dialogs

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn open_add_dialog(&mut self) {
        self.transaction_form.clear_error();
        self.open_dialog(ActiveDialog::AddTransaction);
    }

    pub fn clear_prompt(&self) -> &'static str {
        CLEAR_PROMPT
    }

    // Notifications

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification.with_duration(self.settings.notification_secs));
    }

    /// Periodic housekeeping: drop an expired notification
    pub fn tick(&mut self) {
        if self.notification.as_ref().is_some_and(Notification::is_expired) {
            self.notification = None;
        }
    }

    fn report_failure(&mut self, action: &str, err: LedgerError) {
        error!(error = %err, "{} failed", action);
        self.notify(Notification::error(err.to_string()));
    }

    // Mutations

    /// Add the transaction described by the form
    ///
    /// Validation failures keep the dialog open with the message shown.
    pub fn submit_transaction(&mut self) {
        let input = self.transaction_form.to_input(&self.settings.categories);

        let result = self.service().create(input);
        match result {
            Ok(_) => {
                self.transaction_form.reset_after_submit();
                self.close_dialog();
                self.selected_index = 0;
                self.notify(Notification::success("Transaction added ✅"));
            }
            Err(e) if e.is_validation() => {
                let message = e.to_string();
                self.transaction_form.set_error(message.clone());
                self.notify(Notification::error(message));
            }
            Err(e) => self.report_failure("add", e),
        }
    }

    /// Delete the highlighted row, if any
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_transaction().map(|t| t.id) else {
            return;
        };

        let result = self.service().delete(id);
        match result {
            Ok(Some(_)) => {
                self.clamp_selection();
                self.notify(Notification::success("Deleted ✅"));
            }
            Ok(None) => {}
            Err(e) => self.report_failure("delete", e),
        }
    }

    /// Answer the clear-all confirmation
    pub fn resolve_clear(&mut self, confirmed: bool) {
        self.close_dialog();

        let result = self.service().clear_all(|_| confirmed);
        match result {
            Ok(ClearOutcome::Cleared(_)) => {
                self.selected_index = 0;
                self.notify(Notification::success("Cleared ✅"));
            }
            Ok(ClearOutcome::Declined) => {}
            Err(e) => self.report_failure("clear", e),
        }
    }
}
