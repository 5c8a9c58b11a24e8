//! Field-type dispatch table

use super::transform::Transform;
use crate::schema::FieldKind;

/// Presentation widget a field kind calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    TextInput,
    Select,
    CheckboxGroup,
    RadioGroup,
}

/// Everything the rendering layer needs to know about a field kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDispatch {
    pub transform: Transform,
    pub widget: Widget,
    pub requires_options: bool,
    pub multi_value: bool,
}

impl FieldDispatch {
    const fn text(transform: Transform) -> Self {
        Self {
            transform,
            widget: Widget::TextInput,
            requires_options: false,
            multi_value: false,
        }
    }

    const fn choice(widget: Widget, multi_value: bool) -> Self {
        Self {
            transform: if multi_value {
                Transform::ToggleMembership
            } else {
                Transform::PassThrough
            },
            widget,
            requires_options: true,
            multi_value,
        }
    }
}

/// Look up the dispatch for a kind. Unknown kinds render as plain text.
pub fn resolve(kind: &FieldKind) -> FieldDispatch {
    match kind {
        FieldKind::PlainText | FieldKind::Email => FieldDispatch::text(Transform::PassThrough),
        FieldKind::LettersOnly => FieldDispatch::text(Transform::StripDigits),
        FieldKind::DigitsOnly => FieldDispatch::text(Transform::DigitsOnly),
        FieldKind::Currency => FieldDispatch::text(Transform::Currency),
        FieldKind::SingleSelect => FieldDispatch::choice(Widget::Select, false),
        FieldKind::RadioChoice => FieldDispatch::choice(Widget::RadioGroup, false),
        FieldKind::MultiSelectCheckbox => FieldDispatch::choice(Widget::CheckboxGroup, true),
        FieldKind::Other(tag) => {
            tracing::debug!(tag = %tag, "unknown field type, using plain text");
            FieldDispatch::text(Transform::PassThrough)
        }
    }
}
