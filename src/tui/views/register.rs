//! Transaction register view
//!
//! Filtered transactions, newest first, with the selected row highlighted.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::format_money;
use crate::tui::app::App;

/// Render the transaction table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let transactions = app.visible_rows();

    let block = Block::default()
        .title(format!(" Transactions ({}) ", transactions.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if transactions.is_empty() {
        let text = Paragraph::new("No transactions found")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(8),  // Type
        Constraint::Length(16), // Category
        Constraint::Min(16),    // Description
        Constraint::Length(16), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Type").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Description").style(bold),
        Cell::from("Amount").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            let amount_color = if txn.is_income() {
                Color::Green
            } else {
                Color::Red
            };

            Row::new(vec![
                Cell::from(txn.date.clone()),
                Cell::from(txn.kind.as_str()),
                Cell::from(txn.category.clone()),
                Cell::from(txn.description.clone()),
                Cell::from(format_money(txn.signed_amount(), app.settings))
                    .style(Style::default().fg(amount_color)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index.min(transactions.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
