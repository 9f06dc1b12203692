//! Text field that switches between plain text and an input box

use super::form_field::form_field;
use crate::state::{FieldState, FormState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Marker appended to the label of a modified field
pub const MODIFIED_MARKER: &str = "*";

/// Rows a text field needs in either mode (border/label + value + border)
pub const TEXT_FIELD_HEIGHT: u16 = 3;

/// Draw a string field.
///
/// In view mode (or with no form) the label and value are painted as plain
/// text. In edit mode the value sits in a bordered box titled with the label,
/// with a cursor when `is_active`.
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldState<String>,
    label: &str,
    form: Option<&FormState>,
    is_active: bool,
) {
    let title = if field.is_modified() {
        format!("{label} {MODIFIED_MARKER}")
    } else {
        label.to_string()
    };

    let paragraph = form_field(
        field,
        form,
        |value| view_paragraph(&title, value),
        |state| state.with_current(|value| edit_paragraph(&title, value, is_active)),
    );

    frame.render_widget(paragraph, area);
}

fn view_paragraph(title: &str, value: String) -> Paragraph<'static> {
    let value = if value.is_empty() {
        Span::styled("(empty)", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value)
    };

    Paragraph::new(vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(value),
    ])
    .wrap(Wrap { trim: false })
}

fn edit_paragraph(title: &str, value: &str, is_active: bool) -> Paragraph<'static> {
    let color = if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let cursor = if is_active { "▌" } else { "" };

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    Paragraph::new(Line::from(vec![
        Span::raw(value.to_string()),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .block(block)
}
