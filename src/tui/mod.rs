//! Terminal User Interface module
//!
//! The interactive ledger: an add form, a filterable transaction table, a
//! live summary panel and a status line, built on ratatui.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
