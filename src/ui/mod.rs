//! UI module for rendering the demo form

mod field_renderer;
mod layout;

use crate::app::App;
use field_renderer::{draw_choice_field, draw_text_field, field_height};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use schema_form::{resolve, Widget};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, status_area) = layout::create_layout(frame.area());

    let block = Block::default()
        .title(" Formulário dinâmico ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let fields = app.host.fields();
    let errors: Vec<_> = fields.iter().map(|f| app.host.error_state(&f.name)).collect();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .zip(&errors)
        .map(|(f, e)| Constraint::Length(field_height(f, resolve(&f.kind).widget, e)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, (field, error)) in fields.iter().zip(&errors).enumerate() {
        let is_active = idx == app.active_field;
        let widget = resolve(&field.kind).widget;
        match widget {
            Widget::TextInput => draw_text_field(
                frame,
                chunks[idx],
                &field.label,
                &app.host.display(field),
                is_active,
                error,
            ),
            _ => draw_choice_field(
                frame,
                chunks[idx],
                field,
                widget,
                &app.host.value(&field.name),
                is_active,
                app.option_cursor,
                error,
            ),
        }
    }

    layout::draw_status_bar(frame, status_area, app);
}
