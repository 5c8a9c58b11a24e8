//! Option records for selection-style fields

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Value carried by an option
///
/// Options may hold text or a boolean. Records adapted from arbitrary data
/// may lack the value entirely, which is kept as `Undefined` rather than
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum OptionValue {
    Text(String),
    Bool(bool),
    #[default]
    Undefined,
}

impl OptionValue {
    /// String form used as the stored field value
    pub fn coerce(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(s) => f.write_str(s),
            OptionValue::Bool(b) => write!(f, "{b}"),
            OptionValue::Undefined => f.write_str("undefined"),
        }
    }
}

impl From<Value> for OptionValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => OptionValue::Undefined,
            Value::Bool(b) => OptionValue::Bool(b),
            Value::String(s) => OptionValue::Text(s),
            other => OptionValue::Text(stringify(Some(&other))),
        }
    }
}

impl From<OptionValue> for Value {
    fn from(value: OptionValue) -> Self {
        match value {
            OptionValue::Text(s) => Value::String(s),
            OptionValue::Bool(b) => Value::Bool(b),
            OptionValue::Undefined => Value::Null,
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

/// One choice in a select, checkbox group or radio group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    #[serde(default, deserialize_with = "crate::schema::lenient::text")]
    pub label: String,
    #[serde(default)]
    pub value: OptionValue,
    #[serde(default, deserialize_with = "crate::schema::lenient::flag")]
    pub checked: bool,
}

impl OptionRecord {
    /// Create an unchecked option
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            checked: false,
        }
    }

    /// Mark the option as initially checked
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }
}

/// Build options from arbitrary records using the given label and value keys.
///
/// Order and duplicates are preserved. Missing keys are propagated: the label
/// becomes `"undefined"` and the value `OptionValue::Undefined`.
pub fn to_options(label_key: &str, value_key: &str, records: &[Value]) -> Vec<OptionRecord> {
    records
        .iter()
        .map(|record| OptionRecord {
            label: stringify(record.get(label_key)),
            value: record
                .get(value_key)
                .cloned()
                .map(OptionValue::from)
                .unwrap_or_default(),
            checked: record
                .get("checked")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        })
        .collect()
}

/// Typed variant of [`to_options`] for any serializable record.
///
/// A record that fails to serialize is adapted like an empty record.
pub fn to_options_from<T: Serialize>(
    label_key: &str,
    value_key: &str,
    records: &[T],
) -> Vec<OptionRecord> {
    let values: Vec<Value> = records
        .iter()
        .map(|record| match serde_json::to_value(record) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("option record could not be serialized: {err}");
                Value::Null
            }
        })
        .collect();
    to_options(label_key, value_key, &values)
}

/// Display-string coercion for a possibly missing JSON value
pub(super) fn stringify(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => stringify(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_to_options_basic() {
        let records = vec![
            json!({"name": "x", "value": "1"}),
            json!({"name": "y", "value": "2"}),
        ];
        let options = to_options("name", "value", &records);
        assert_eq!(
            options,
            vec![OptionRecord::new("x", "1"), OptionRecord::new("y", "2")]
        );
    }

    #[test]
    fn test_to_options_keeps_checked_flag() {
        let records = vec![json!({"name": "a", "id": "A", "checked": true})];
        let options = to_options("name", "id", &records);
        assert!(options[0].checked);
    }

    #[test]
    fn test_non_boolean_checked_defaults_to_false() {
        let records = vec![json!({"name": "a", "id": "A", "checked": "yes"})];
        assert!(!to_options("name", "id", &records)[0].checked);
    }

    #[test]
    fn test_missing_keys_propagate() {
        let records = vec![json!({"other": 1})];
        let options = to_options("name", "value", &records);
        assert_eq!(options[0].label, "undefined");
        assert_eq!(options[0].value, OptionValue::Undefined);
        assert!(!options[0].checked);
    }

    #[test]
    fn test_non_object_records_degrade() {
        let records = vec![json!(42), json!(null)];
        let options = to_options("name", "value", &records);
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|o| o.label == "undefined"));
    }

    #[test]
    fn test_label_coercion() {
        let records = vec![
            json!({"l": 7, "v": true}),
            json!({"l": null, "v": false}),
            json!({"l": ["a", null, "b"], "v": "x"}),
            json!({"l": {"k": 1}, "v": "y"}),
        ];
        let labels: Vec<String> = to_options("l", "v", &records)
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(labels, vec!["7", "null", "a,,b", "[object Object]"]);
    }

    #[test]
    fn test_numeric_value_coerced_to_text() {
        let records = vec![json!({"l": "one", "v": 1})];
        assert_eq!(
            to_options("l", "v", &records)[0].value,
            OptionValue::Text("1".to_string())
        );
    }

    #[test]
    fn test_duplicate_values_are_preserved() {
        let records = vec![json!({"l": "a", "v": "1"}), json!({"l": "b", "v": "1"})];
        let options = to_options("l", "v", &records);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, options[1].value);
    }

    #[test]
    fn test_to_options_from_typed_records() {
        #[derive(Serialize)]
        struct Role {
            title: &'static str,
            code: &'static str,
        }

        let roles = [
            Role {
                title: "Admin",
                code: "ADMIN",
            },
            Role {
                title: "User",
                code: "USER",
            },
        ];
        let options = to_options_from("title", "code", &roles);
        assert_eq!(options[1], OptionRecord::new("User", "USER"));
    }

    #[test]
    fn test_option_value_coercion() {
        assert_eq!(OptionValue::from("A").coerce(), "A");
        assert_eq!(OptionValue::Bool(true).coerce(), "true");
        assert_eq!(OptionValue::Undefined.coerce(), "undefined");
    }

    #[test]
    fn test_option_record_deserialize_defaults() {
        let option: OptionRecord =
            serde_json::from_str(r#"{"label": "Yes", "value": true}"#).unwrap();
        assert_eq!(option.value, OptionValue::Bool(true));
        assert!(!option.checked);
    }
}
