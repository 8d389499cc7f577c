//! Summary panel
//!
//! Income, expense and balance of the rows currently visible.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_money;
use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.summary();
    let settings = app.settings;

    let balance_color = if summary.balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };
    let bold = Modifier::BOLD;

    let line = Line::from(vec![
        Span::styled("Income ", Style::default().fg(Color::White)),
        Span::styled(
            format_money(summary.income, settings),
            Style::default().fg(Color::Green).add_modifier(bold),
        ),
        Span::raw("   │   "),
        Span::styled("Expense ", Style::default().fg(Color::White)),
        Span::styled(
            format_money(summary.expense, settings),
            Style::default().fg(Color::Red).add_modifier(bold),
        ),
        Span::raw("   │   "),
        Span::styled("Balance ", Style::default().fg(Color::White)),
        Span::styled(
            format_money(summary.balance, settings),
            Style::default().fg(balance_color).add_modifier(bold),
        ),
    ]);

    let block = Block::default()
        .title(" Pocket Ledger ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(bold))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(line).block(block).alignment(Alignment::Center),
        area,
    );
}
