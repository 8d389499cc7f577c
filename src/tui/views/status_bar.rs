//! Status bar view
//!
//! Shows the current notification, or key hints when there is none.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if let Some(ref notification) = app.notification {
        spans.push(notification.span());
        spans.push(Span::raw(" │ "));
    }

    let hints = match app.input_mode {
        InputMode::Search => "Type to search  Enter/Esc:Done",
        InputMode::Normal => "a:Add  d:Delete  C:Clear  t:Type  c:Category  /:Search  ?:Help  q:Quit",
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
