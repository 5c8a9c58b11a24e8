//! Layout components (form area and status bar)

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT, TOGGLE_KEY};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into form area and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Keyboard hints for the focused field
fn get_field_hints(is_choice: bool) -> String {
    if is_choice {
        format!(
            "←/→:option  {TOGGLE_KEY}:pick  Tab:next  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset"
        )
    } else {
        format!("Tab:next  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset  Esc:quit")
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let state = if app.host.is_submitting() {
        Span::styled(" ● ", Style::default().fg(Color::Yellow))
    } else if app.host.is_dirty() {
        Span::styled(" ● ", Style::default().fg(Color::Cyan))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Green))
    };
    spans.push(state);

    let is_choice = app
        .active()
        .is_some_and(|f| schema_form::resolve(&f.kind).requires_options);
    spans.push(Span::styled(
        get_field_hints(is_choice),
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(status, area);
}
