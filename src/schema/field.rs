//! Field descriptors and field values

use super::kind::FieldKind;
use super::lenient;
use super::option::OptionRecord;
use crate::engine::rules;
use crate::engine::ValidationRule;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Advisory maximum input length when a field declares none
pub const DEFAULT_MAX_LENGTH: usize = 999;

/// Value held by one field: a string, or a list of strings for
/// multi-select fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for list values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::List(_) => "",
        }
    }

    /// Get the list value (returns an empty slice for text values)
    pub fn as_list(&self) -> &[String] {
        match self {
            FieldValue::List(items) => items,
            FieldValue::Text(_) => &[],
        }
    }

    /// Character count for text, item count for lists
    pub fn len(&self) -> usize {
        match self {
            FieldValue::Text(s) => s.chars().count(),
            FieldValue::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a list value contains `item`
    pub fn contains(&self, item: &str) -> bool {
        self.as_list().iter().any(|v| v == item)
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join(", "),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// One entry of a form schema
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: String,
    #[serde(
        rename = "validation",
        default,
        deserialize_with = "rules::deserialize_rule",
        skip_serializing
    )]
    pub rule: Option<Arc<dyn ValidationRule>>,
    #[serde(
        default,
        deserialize_with = "lenient::value",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<FieldValue>,
    #[serde(
        default,
        deserialize_with = "lenient::length",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_length: Option<usize>,
    #[serde(
        default,
        deserialize_with = "lenient::length",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_length: Option<usize>,
    #[serde(
        default,
        deserialize_with = "lenient::options",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub options: Vec<OptionRecord>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub horizontal: bool,
}

impl fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("has_rule", &self.rule.is_some())
            .field("value", &self.value)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("options", &self.options)
            .field("horizontal", &self.horizontal)
            .finish()
    }
}

impl FieldSchema {
    /// Create a field with no value, rule or options
    pub fn new(name: impl Into<String>, kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rule = Some(Arc::new(rule));
        self
    }

    /// Attach an already shared rule
    pub fn with_shared_rule(mut self, rule: Arc<dyn ValidationRule>) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn with_options(mut self, options: Vec<OptionRecord>) -> Self {
        self.options = options;
        self
    }

    pub fn with_length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn horizontal(mut self) -> Self {
        self.horizontal = true;
        self
    }

    /// Preselect an option while building the schema.
    ///
    /// Checkbox groups mark every option whose coerced value matches as
    /// checked; single-value kinds store `value` as the field value.
    pub fn select_option(mut self, value: &str) -> Self {
        if self.kind == FieldKind::MultiSelectCheckbox {
            for option in &mut self.options {
                if option.value.coerce() == value {
                    option.checked = true;
                }
            }
        } else {
            self.value = Some(FieldValue::Text(value.to_string()));
        }
        self
    }

    /// Advisory (min, max) input length
    pub fn length_bounds(&self) -> (usize, usize) {
        (
            self.min_length.unwrap_or(0),
            self.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
        )
    }

    /// Truncate input to the advisory maximum length
    pub fn clamp_to_max_length(&self, input: &str) -> String {
        let (_, max) = self.length_bounds();
        input.chars().take(max).collect()
    }

    /// Label of the first option whose coerced value equals `value`
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value.coerce() == value)
            .map(|o| o.label.as_str())
    }
}
