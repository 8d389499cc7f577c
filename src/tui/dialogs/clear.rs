//! Clear-all confirmation
//!
//! Drawn over the ledger while `C` waits for a yes or no. Shows how many
//! records the clear would remove, counting rows hidden by the filters too.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Line stating what a confirmed clear removes
pub fn removal_notice(count: usize) -> String {
    match count {
        0 => "The ledger is already empty.".to_string(),
        1 => "This removes 1 transaction.".to_string(),
        n => format!("This removes all {} transactions.", n),
    }
}

/// Render the clear confirmation over the ledger
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(48, 8, frame.area());
    frame.render_widget(Clear, area);

    let count = app.storage.transactions.len();
    let hidden = count.saturating_sub(app.visible_rows().len());

    let mut lines = vec![
        Line::from(Span::styled(
            app.clear_prompt(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(removal_notice(count)),
    ];
    if hidden > 0 {
        lines.push(Line::from(Span::styled(
            format!("({} not shown by the current filters)", hidden),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[y]", Style::default().fg(Color::Red)),
        Span::raw(" Clear   "),
        Span::styled("[n/Esc]", Style::default().fg(Color::Green)),
        Span::raw(" Keep"),
    ]));

    let block = Block::default()
        .title(" Clear Ledger ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_notice() {
        assert_eq!(removal_notice(0), "The ledger is already empty.");
        assert_eq!(removal_notice(1), "This removes 1 transaction.");
        assert_eq!(removal_notice(12), "This removes all 12 transactions.");
    }
}
