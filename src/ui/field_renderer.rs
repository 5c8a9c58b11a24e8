//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use schema_form::{FieldErrorState, FieldSchema, FieldValue, Widget};

/// Rows needed to draw a field
pub fn field_height(field: &FieldSchema, widget: Widget, error: &FieldErrorState) -> u16 {
    let body = match widget {
        Widget::TextInput | Widget::Select => 1,
        Widget::CheckboxGroup | Widget::RadioGroup if field.horizontal => 1,
        Widget::CheckboxGroup | Widget::RadioGroup => field.options.len().max(1) as u16,
    };
    let helper = u16::from(error.message.is_some());
    body + helper + 2
}

fn border_style(is_active: bool, error: &FieldErrorState) -> Style {
    if error.invalid {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn helper_line(error: &FieldErrorState) -> Option<Line<'static>> {
    error
        .message
        .as_ref()
        .map(|msg| Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Red))))
}

fn field_block(label: &str, is_active: bool, error: &FieldErrorState) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error))
}

/// Draw a text input with its display value
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    display: &str,
    is_active: bool,
    error: &FieldErrorState,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if display.is_empty() && !is_active {
        "(empty)"
    } else {
        display
    };

    let cursor = if is_active { "▌" } else { "" };

    let mut lines = vec![Line::from(vec![
        Span::styled(display_value.to_string(), style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ])];
    lines.extend(helper_line(error));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(field_block(label, is_active, error));
    frame.render_widget(paragraph, area);
}

/// Draw a select, checkbox group or radio group
#[allow(clippy::too_many_arguments)]
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldSchema,
    widget: Widget,
    value: &FieldValue,
    is_active: bool,
    cursor: usize,
    error: &FieldErrorState,
) {
    if widget == Widget::Select && !is_active {
        let display = field
            .option_label(value.as_text())
            .unwrap_or("Nenhum registro");
        draw_text_field(frame, area, &field.label, display, false, error);
        return;
    }

    let spans: Vec<Span> = field
        .options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let key = option.value.coerce();
            let selected = match widget {
                Widget::CheckboxGroup => value.contains(&key),
                _ => value.as_text() == key,
            };
            let marker = match (widget, selected) {
                (Widget::CheckboxGroup, true) => "[x]",
                (Widget::CheckboxGroup, false) => "[ ]",
                (_, true) => "(•)",
                (_, false) => "( )",
            };
            let mut style = if selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            if is_active && idx == cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Span::styled(format!("{marker} {}  ", option.label), style)
        })
        .collect();

    let mut lines: Vec<Line> = if field.horizontal || widget == Widget::Select {
        vec![Line::from(spans)]
    } else {
        spans.into_iter().map(Line::from).collect()
    };
    lines.extend(helper_line(error));

    let paragraph = Paragraph::new(lines).block(field_block(&field.label, is_active, error));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema_form::{FieldKind, OptionRecord};

    fn radio(horizontal: bool) -> FieldSchema {
        let field = FieldSchema::new("plan", FieldKind::RadioChoice, "Plano").with_options(vec![
            OptionRecord::new("Free", "free"),
            OptionRecord::new("Pro", "pro"),
            OptionRecord::new("Team", "team"),
        ]);
        if horizontal {
            field.horizontal()
        } else {
            field
        }
    }

    #[test]
    fn test_text_field_height() {
        let field = FieldSchema::new("a", FieldKind::PlainText, "A");
        assert_eq!(field_height(&field, Widget::TextInput, &FieldErrorState::default()), 3);
        let error = FieldErrorState {
            invalid: true,
            message: Some("bad".to_string()),
        };
        assert_eq!(field_height(&field, Widget::TextInput, &error), 4);
    }

    #[test]
    fn test_vertical_group_height_follows_options() {
        assert_eq!(field_height(&radio(false), Widget::RadioGroup, &FieldErrorState::default()), 5);
        assert_eq!(field_height(&radio(true), Widget::RadioGroup, &FieldErrorState::default()), 3);
    }
}
