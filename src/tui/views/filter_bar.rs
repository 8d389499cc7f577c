//! Filter bar
//!
//! Shows the type and category filters and the search box.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::filter::ALL;
use crate::tui::app::{App, InputMode};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let searching = app.input_mode == InputMode::Search;
    let border_color = if searching { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(46), Constraint::Min(10)])
        .split(inner);

    let kind = app.filter.kind.map(|k| k.as_str()).unwrap_or(ALL);
    let category = app.filter.category.as_deref().unwrap_or(ALL);

    let controls = Line::from(vec![
        Span::styled("[t] ", Style::default().fg(Color::DarkGray)),
        Span::styled("Type: ", Style::default().fg(Color::Cyan)),
        Span::styled(kind, active_style(app.filter.kind.is_some())),
        Span::raw("  "),
        Span::styled("[c] ", Style::default().fg(Color::DarkGray)),
        Span::styled("Category: ", Style::default().fg(Color::Cyan)),
        Span::styled(category.to_string(), active_style(app.filter.category.is_some())),
    ]);
    frame.render_widget(Paragraph::new(controls), chunks[0]);
    frame.render_widget(&app.search_input, chunks[1]);
}

fn active_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}
