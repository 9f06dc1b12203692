//! Demo screen rendering

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use switchkraft::ui::{draw_text_field, render_button, BUTTON_HEIGHT, TEXT_FIELD_HEIGHT};
use switchkraft::FormMode;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let mut constraints = vec![
        Constraint::Length(1),             // Header
        Constraint::Length(BUTTON_HEIGHT), // Buttons
    ];
    constraints.extend(app.fields.iter().map(|_| Constraint::Length(TEXT_FIELD_HEIGHT)));
    constraints.push(Constraint::Min(0)); // Padding
    constraints.push(Constraint::Length(1)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    draw_header(frame, chunks[0], app);
    draw_buttons(frame, chunks[1], app);

    let editing = app.is_editing();
    for (idx, field) in app.fields.iter().enumerate() {
        draw_text_field(
            frame,
            chunks[2 + idx],
            &field.state,
            field.label,
            Some(&app.form),
            editing && idx == app.active_field,
        );
    }

    draw_status_bar(frame, chunks[chunks.len() - 1], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mode_color = match app.form.mode() {
        FormMode::View => Color::Green,
        FormMode::Edit => Color::Yellow,
    };

    let mut spans = vec![
        Span::styled(" Profile ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("[{}]", app.form.mode()),
            Style::default().fg(mode_color),
        ),
    ];
    if app.form.is_modified() {
        spans.push(Span::styled(
            " unsaved changes",
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Edit / Done
            Constraint::Length(28), // Revert field
            Constraint::Length(20), // Revert all
            Constraint::Min(0),
        ])
        .split(area);

    if app.is_editing() {
        render_button(frame, chunks[0], "↵", "Done", true);

        if let Some(field) = app.active().filter(|f| f.state.is_modified()) {
            render_button(frame, chunks[1], "^R", &format!("Revert {}", field.label), true);
        }

        render_button(frame, chunks[2], "^Z", "Revert All", app.form.is_modified());
    } else {
        render_button(frame, chunks[0], "e", "Edit", true);
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let help = match app.form.mode() {
        FormMode::View => "e: edit | q: quit",
        FormMode::Edit => "Tab: next | Enter: done | Esc: cancel | ^R: revert field | ^Z: revert all",
    };

    let mut spans = vec![Span::styled(help, Style::default().fg(Color::DarkGray))];
    if let Some(message) = &app.status_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Cyan),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
