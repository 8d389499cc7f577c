//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, InputMode};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows terminals also report releases
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Search => handle_search_key(app, key),
    }

    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('a') | KeyCode::Char('n') => app.open_add_dialog(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('C') => app.open_dialog(ActiveDialog::ConfirmClear),

        KeyCode::Char('t') => app.cycle_type_filter(),
        KeyCode::Char('c') => app.cycle_category_filter(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Esc => app.reset_filters(),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.move_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.move_to_bottom(),

        _ => {}
    }
}

/// Handle keys while editing the search box; the list updates per keystroke
fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.finish_search(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input.clear();
            app.sync_search();
        }
        KeyCode::Char(c) => {
            app.search_input.insert(c);
            app.sync_search();
        }
        KeyCode::Backspace => {
            app.search_input.backspace();
            app.sync_search();
        }
        KeyCode::Delete => {
            app.search_input.delete();
            app.sync_search();
        }
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Home => app.search_input.move_start(),
        KeyCode::End => app.search_input.move_end(),
        _ => {}
    }
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::ConfirmClear => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.resolve_clear(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.resolve_clear(false),
            _ => {}
        },
        ActiveDialog::AddTransaction => dialogs::transaction::handle_key(app, key),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LedgerPaths, Settings};
    use crate::models::TransactionType;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    fn setup() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, Storage::open(paths).unwrap(), Settings::default())
    }

    #[test]
    fn test_add_flow_via_keys() {
        let (_temp, mut storage, settings) = setup();
        let mut app = App::new(&mut storage, &settings);

        handle_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::AddTransaction);

        // Type field: switch to expense, then pick the second category
        handle_event(&mut app, key(KeyCode::Right)).unwrap();
        handle_event(&mut app, key(KeyCode::Tab)).unwrap();
        handle_event(&mut app, key(KeyCode::Right)).unwrap();
        handle_event(&mut app, key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "Lunch");
        handle_event(&mut app, key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "250");
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.active_dialog, ActiveDialog::None);
        let rows = app.visible_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, TransactionType::Expense);
        assert_eq!(rows[0].category, settings.categories[1]);
        assert_eq!(rows[0].description, "Lunch");
    }

    #[test]
    fn test_search_mode_captures_letters() {
        let (_temp, mut storage, settings) = setup();
        let mut app = App::new(&mut storage, &settings);

        handle_event(&mut app, key(KeyCode::Char('/'))).unwrap();
        // 'q' is text here, not quit
        type_text(&mut app, "qa");
        assert!(!app.should_quit);
        assert_eq!(app.filter.search, "qa");

        handle_event(&mut app, key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.filter.search, "q");

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.input_mode, InputMode::Normal);

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(app.filter.search.is_empty());
    }

    #[test]
    fn test_clear_dialog_keys() {
        let (_temp, mut storage, settings) = setup();
        let mut app = App::new(&mut storage, &settings);

        handle_event(&mut app, key(KeyCode::Char('C'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmClear);
        // Unrelated keys leave the dialog up
        handle_event(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmClear);
        handle_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::None);
    }

    #[test]
    fn test_quit_keys() {
        let (_temp, mut storage, settings) = setup();
        {
            let mut app = App::new(&mut storage, &settings);
            handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
            assert!(app.should_quit);
        }

        let mut app = App::new(&mut storage, &settings);
        app.open_add_dialog();
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }
}
