//! Permissive decoding for schema entries
//!
//! A malformed property falls back to its default instead of rejecting the
//! whole schema. Non-string text is stringified, anything else unusable is
//! dropped with a warning.

use super::field::FieldValue;
use super::option::stringify;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text property: null is empty, other non-strings are stringified
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => {
            tracing::warn!("schema text property is not a string: {other}");
            stringify(Some(&other))
        }
    })
}

/// Initial value: a string, a list, or something stringified into text
pub(crate) fn value<'de, D>(deserializer: D) -> Result<Option<FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(FieldValue::Text(s)),
        Value::Array(items) => Some(FieldValue::List(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => stringify(Some(&other)),
                })
                .collect(),
        )),
        other => Some(FieldValue::Text(stringify(Some(&other)))),
    })
}

/// Length bound: a non-negative integer or a numeric string
pub(crate) fn length<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let bound = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    if bound.is_none() {
        tracing::warn!("schema length bound ignored");
    }
    Ok(bound)
}

/// Boolean flag: anything but `true` is false
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Null => false,
        other => {
            tracing::warn!("schema flag is not a boolean: {other}");
            false
        }
    })
}

/// Option list: entries that are not objects are skipped
pub(crate) fn options<'de, D>(deserializer: D) -> Result<Vec<super::OptionRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(option) => Some(option),
            Err(err) => {
                tracing::warn!("schema option skipped: {err}");
                None
            }
        })
        .collect())
}
