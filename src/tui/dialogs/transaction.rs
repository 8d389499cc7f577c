//! Add-transaction dialog
//!
//! Modal form with a type toggle, a category picker, and description and
//! amount inputs. Tab moves between fields; Enter submits.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::TransactionType;
use crate::services::CreateTransactionInput;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Type,
    Category,
    Description,
    Amount,
}

impl TransactionField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Type => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::Type,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Type => Self::Amount,
            Self::Category => Self::Type,
            Self::Description => Self::Category,
            Self::Amount => Self::Description,
        }
    }
}

/// State for the transaction form dialog
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    pub focused_field: TransactionField,
    pub kind: TransactionType,
    /// Index into the configured category list
    pub category_index: usize,
    pub description_input: TextInput,
    pub amount_input: TextInput,
    /// Validation message from the last failed submit
    pub error_message: Option<String>,
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionFormState {
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: TransactionField::Type,
            kind: TransactionType::Income,
            category_index: 0,
            description_input: TextInput::new().placeholder("What was it for?"),
            amount_input: TextInput::new().placeholder("e.g. 1,200.50"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.description_input.focused = self.focused_field == TransactionField::Description;
        self.amount_input.focused = self.focused_field == TransactionField::Amount;
    }

    /// Text input behind the focused field, if it is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Description => Some(&mut self.description_input),
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Type | TransactionField::Category => None,
        }
    }

    /// Step the category picker forwards or backwards, wrapping around
    pub fn cycle_category(&mut self, count: usize, forward: bool) {
        if count == 0 {
            self.category_index = 0;
            return;
        }
        let current = self.category_index.min(count - 1);
        self.category_index = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
    }

    /// Selected category, or an empty string when none are configured
    pub fn category<'c>(&self, categories: &'c [String]) -> &'c str {
        categories
            .get(self.category_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Collect the form into service input
    pub fn to_input(&self, categories: &[String]) -> CreateTransactionInput {
        CreateTransactionInput {
            kind: self.kind,
            category: self.category(categories).to_string(),
            description: self.description_input.value().to_string(),
            amount: self.amount_input.value().to_string(),
        }
    }

    /// Clear description and amount after a successful add
    ///
    /// Type and category stay selected so repeated entries are quick.
    pub fn reset_after_submit(&mut self) {
        self.description_input.clear();
        self.amount_input.clear();
        self.error_message = None;
        self.focused_field = TransactionField::Description;
        self.update_focus();
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the transaction dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 13, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Transaction ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Type
            Constraint::Length(1), // Category
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1),
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.transaction_form;
    let categories = &app.settings.categories;

    let kind_color = match form.kind {
        TransactionType::Income => Color::Green,
        TransactionType::Expense => Color::Red,
    };
    render_choice(
        frame,
        chunks[0],
        "Type",
        form.kind.as_str(),
        kind_color,
        form.focused_field == TransactionField::Type,
    );

    let category = form.category(categories);
    render_choice(
        frame,
        chunks[1],
        "Category",
        if category.is_empty() { "(none configured)" } else { category },
        Color::Yellow,
        form.focused_field == TransactionField::Category,
    );

    render_text_field(frame, chunks[2], "Description", &form.description_input);
    render_text_field(frame, chunks[3], "Amount", &form.amount_input);

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[5]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Change  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

fn label_span(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("{:>12}: ", label), style)
}

/// Render a field whose value is picked rather than typed
fn render_choice(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    color: Color,
    focused: bool,
) {
    let mut value_style = Style::default().fg(color);
    if focused {
        value_style = value_style.add_modifier(Modifier::REVERSED);
    }

    let line = Line::from(vec![
        label_span(label, focused),
        Span::styled(if focused { "◀ " } else { "  " }, Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), value_style),
        Span::styled(if focused { " ▶" } else { "" }, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_text_field(frame: &mut Frame, area: Rect, label: &str, input: &TextInput) {
    let label_width = 14;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(label_width), Constraint::Min(1)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(label_span(label, input.focused))),
        chunks[0],
    );
    frame.render_widget(input, chunks[1]);
}

/// Handle key input for the transaction dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => return app.close_dialog(),
        KeyCode::Enter => return app.submit_transaction(),
        _ => {}
    }

    let category_count = app.settings.categories.len();
    let form = &mut app.transaction_form;

    match key.code {
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),

        code => match form.focused_field {
            TransactionField::Type => {
                if matches!(code, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) {
                    form.kind = form.kind.toggled();
                    form.clear_error();
                }
            }
            TransactionField::Category => match code {
                KeyCode::Right | KeyCode::Char(' ') => form.cycle_category(category_count, true),
                KeyCode::Left => form.cycle_category(category_count, false),
                _ => {}
            },
            TransactionField::Description | TransactionField::Amount => {
                form.clear_error();
                if let Some(input) = form.focused_input() {
                    match code {
                        KeyCode::Char(c) => input.insert(c),
                        KeyCode::Backspace => input.backspace(),
                        KeyCode::Delete => input.delete(),
                        KeyCode::Left => input.move_left(),
                        KeyCode::Right => input.move_right(),
                        KeyCode::Home => input.move_start(),
                        KeyCode::End => input.move_end(),
                        _ => {}
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<String> {
        vec!["Salary".into(), "Food".into(), "Rent".into()]
    }

    #[test]
    fn test_field_cycle() {
        let mut form = TransactionFormState::new();
        assert_eq!(form.focused_field, TransactionField::Type);
        form.next_field();
        form.next_field();
        assert_eq!(form.focused_field, TransactionField::Description);
        assert!(form.description_input.focused);
        form.next_field();
        form.next_field();
        assert_eq!(form.focused_field, TransactionField::Type);
        form.prev_field();
        assert_eq!(form.focused_field, TransactionField::Amount);
        assert!(form.amount_input.focused);
        assert!(!form.description_input.focused);
    }

    #[test]
    fn test_category_wraps() {
        let cats = categories();
        let mut form = TransactionFormState::new();
        assert_eq!(form.category(&cats), "Salary");

        form.cycle_category(cats.len(), false);
        assert_eq!(form.category(&cats), "Rent");
        form.cycle_category(cats.len(), true);
        assert_eq!(form.category(&cats), "Salary");
    }

    #[test]
    fn test_no_categories_yields_empty() {
        let mut form = TransactionFormState::new();
        form.cycle_category(0, true);
        assert_eq!(form.category(&[]), "");
    }

    #[test]
    fn test_to_input_and_reset() {
        let cats = categories();
        let mut form = TransactionFormState::new();
        form.kind = TransactionType::Expense;
        form.cycle_category(cats.len(), true);
        form.description_input = TextInput::new().content("Lunch");
        form.amount_input = TextInput::new().content("250");

        let input = form.to_input(&cats);
        assert_eq!(input.kind, TransactionType::Expense);
        assert_eq!(input.category, "Food");
        assert_eq!(input.description, "Lunch");
        assert_eq!(input.amount, "250");

        form.set_error("boom");
        form.reset_after_submit();
        assert!(form.description_input.value().is_empty());
        assert!(form.amount_input.value().is_empty());
        assert!(form.error_message.is_none());
        assert_eq!(form.kind, TransactionType::Expense);
        assert_eq!(form.category(&cats), "Food");
    }
}
