//! Built-in string rules
//!
//! `StringRule` chains the common single-field checks. Checks run in a
//! fixed order (required, min, max, email, pattern) and the first failure
//! wins.

use super::validation::{RuleOutcome, ValidationRule};
use crate::schema::FieldValue;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::{Arc, LazyLock, OnceLock};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A length bound with its failure message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthCheck {
    pub len: usize,
    pub message: String,
}

/// A regular expression with its failure message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternCheck {
    pub pattern: String,
    pub message: String,
    #[serde(skip)]
    compiled: OnceLock<Option<Regex>>,
}

impl PatternCheck {
    fn regex(&self) -> Option<&Regex> {
        self.compiled
            .get_or_init(|| match Regex::new(&self.pattern) {
                Ok(re) => Some(re),
                Err(err) => {
                    tracing::warn!(pattern = %self.pattern, "invalid rule pattern ignored: {err}");
                    None
                }
            })
            .as_ref()
    }
}

/// Chained checks for a single text or list value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<LengthCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<LengthCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<PatternCheck>,
}

impl StringRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject empty text and empty lists
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    pub fn min_len(mut self, len: usize, message: impl Into<String>) -> Self {
        self.min = Some(LengthCheck {
            len,
            message: message.into(),
        });
        self
    }

    pub fn max_len(mut self, len: usize, message: impl Into<String>) -> Self {
        self.max = Some(LengthCheck {
            len,
            message: message.into(),
        });
        self
    }

    /// Require an address shape. Empty text is left to `required`.
    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.email = Some(message.into());
        self
    }

    /// Require a match of `pattern`. Empty text is left to `required`.
    pub fn matches(mut self, pattern: impl Into<String>, message: impl Into<String>) -> Self {
        self.matches = Some(PatternCheck {
            pattern: pattern.into(),
            message: message.into(),
            compiled: OnceLock::new(),
        });
        self
    }
}

impl ValidationRule for StringRule {
    fn evaluate(&self, value: &FieldValue) -> RuleOutcome {
        if let Some(message) = &self.required {
            let empty = match value {
                FieldValue::Text(s) => s.is_empty(),
                FieldValue::List(items) => items.is_empty(),
            };
            if empty {
                return RuleOutcome::fail(message.as_str());
            }
        }

        if let Some(check) = &self.min {
            if value.len() < check.len {
                return RuleOutcome::fail(check.message.as_str());
            }
        }

        if let Some(check) = &self.max {
            if value.len() > check.len {
                return RuleOutcome::fail(check.message.as_str());
            }
        }

        let text = value.as_text();
        if text.is_empty() {
            return RuleOutcome::pass();
        }

        if let Some(message) = &self.email {
            if !EMAIL.is_match(text) {
                return RuleOutcome::fail(message.as_str());
            }
        }

        if let Some(check) = &self.matches {
            if let Some(re) = check.regex() {
                if !re.is_match(text) {
                    return RuleOutcome::fail(check.message.as_str());
                }
            }
        }

        RuleOutcome::pass()
    }
}

/// Deserialize an optional `StringRule` into a shared rule object
pub(crate) fn deserialize_rule<'de, D>(
    deserializer: D,
) -> Result<Option<Arc<dyn ValidationRule>>, D::Error>
where
    D: Deserializer<'de>,
{
    let rule = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => None,
        value => match serde_json::from_value::<StringRule>(value) {
            Ok(rule) => Some(rule),
            Err(err) => {
                tracing::warn!("schema validation rule ignored: {err}");
                None
            }
        },
    };
    Ok(rule.map(|r| Arc::new(r) as Arc<dyn ValidationRule>))
}
