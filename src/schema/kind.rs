//! Field type tags

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Canonical field kinds understood by the engine
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "String")]
pub enum FieldKind {
    #[default]
    PlainText,
    LettersOnly,
    DigitsOnly,
    Email,
    Currency,
    SingleSelect,
    MultiSelectCheckbox,
    RadioChoice,
    /// Unrecognized tag, kept verbatim. Behaves like plain text.
    Other(String),
}

impl FieldKind {
    /// Every known kind, in canonical order
    pub const KNOWN: [FieldKind; 8] = [
        FieldKind::PlainText,
        FieldKind::LettersOnly,
        FieldKind::DigitsOnly,
        FieldKind::Email,
        FieldKind::Currency,
        FieldKind::SingleSelect,
        FieldKind::MultiSelectCheckbox,
        FieldKind::RadioChoice,
    ];

    /// Resolve a type tag. Both historical spellings of each tag are accepted.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "" | "text" | "plain-text" => FieldKind::PlainText,
            "letters-only" | "just-letters" | "only-letters" => FieldKind::LettersOnly,
            "digits-only" | "just-numbers" | "only-numbers" => FieldKind::DigitsOnly,
            "email" => FieldKind::Email,
            "currency" | "money" => FieldKind::Currency,
            "single-select" | "select" => FieldKind::SingleSelect,
            "multi-select-checkbox" | "checkbox" => FieldKind::MultiSelectCheckbox,
            "radio-choice" | "radio" => FieldKind::RadioChoice,
            other => FieldKind::Other(other.to_string()),
        }
    }

    /// Canonical tag for this kind
    pub fn tag(&self) -> &str {
        match self {
            FieldKind::PlainText => "plain-text",
            FieldKind::LettersOnly => "letters-only",
            FieldKind::DigitsOnly => "digits-only",
            FieldKind::Email => "email",
            FieldKind::Currency => "currency",
            FieldKind::SingleSelect => "single-select",
            FieldKind::MultiSelectCheckbox => "multi-select-checkbox",
            FieldKind::RadioChoice => "radio-choice",
            FieldKind::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, FieldKind::Other(_))
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        FieldKind::from_tag(&tag)
    }
}

/// Missing or null tags mean plain text; other non-string tags are kept as
/// unknown so they can be reported
impl From<Value> for FieldKind {
    fn from(tag: Value) -> Self {
        match tag {
            Value::Null => FieldKind::PlainText,
            Value::String(tag) => FieldKind::from_tag(&tag),
            other => FieldKind::Other(super::option::stringify(Some(&other))),
        }
    }
}

impl From<&str> for FieldKind {
    fn from(tag: &str) -> Self {
        FieldKind::from_tag(tag)
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Other(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
