//! Validation rule contract and schema compilation
//!
//! Rules are opaque to the compiler: it only maps field names to rules and
//! evaluates each one independently against the current form values.

use super::FormValues;
use crate::schema::{FieldSchema, FieldValue};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Result of evaluating one rule against one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub valid: bool,
    pub message: Option<String>,
}

impl Default for RuleOutcome {
    fn default() -> Self {
        Self::pass()
    }
}

impl RuleOutcome {
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// A validation rule for a single field value
#[cfg_attr(test, mockall::automock)]
pub trait ValidationRule: Send + Sync {
    fn evaluate(&self, value: &FieldValue) -> RuleOutcome;
}

/// Rule used for fields that declare none
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysValid;

impl ValidationRule for AlwaysValid {
    fn evaluate(&self, _value: &FieldValue) -> RuleOutcome {
        RuleOutcome::pass()
    }
}

/// Per-field rules compiled from a schema
#[derive(Clone, Default)]
pub struct CompiledValidation {
    rules: IndexMap<String, Arc<dyn ValidationRule>>,
}

impl fmt::Debug for CompiledValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledValidation")
            .field("fields", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl CompiledValidation {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Field names in first-seen schema order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Rule compiled for `name`
    pub fn rule(&self, name: &str) -> Option<&Arc<dyn ValidationRule>> {
        self.rules.get(name)
    }

    /// Evaluate one field. Names without a rule pass.
    pub fn validate_field(&self, name: &str, value: &FieldValue) -> RuleOutcome {
        self.rules
            .get(name)
            .map(|rule| rule.evaluate(value))
            .unwrap_or_default()
    }

    /// Evaluate every rule against `values`; missing values count as empty text
    pub fn validate(&self, values: &FormValues) -> ValidationReport {
        let empty = FieldValue::default();
        let outcomes = self
            .rules
            .iter()
            .map(|(name, rule)| {
                let value = values.get(name).unwrap_or(&empty);
                (name.clone(), rule.evaluate(value))
            })
            .collect();
        ValidationReport { outcomes }
    }
}

/// Build the name-to-rule mapping for a schema. Later duplicates win.
pub fn compile_validation(fields: &[FieldSchema]) -> CompiledValidation {
    let mut rules: IndexMap<String, Arc<dyn ValidationRule>> =
        IndexMap::with_capacity(fields.len());
    for field in fields {
        let rule = field
            .rule
            .clone()
            .unwrap_or_else(|| Arc::new(AlwaysValid) as Arc<dyn ValidationRule>);
        if rules.insert(field.name.clone(), rule).is_some() {
            tracing::warn!(field = %field.name, "duplicate field name; last rule wins");
        }
    }
    tracing::debug!(fields = rules.len(), "validation compiled");
    CompiledValidation { rules }
}

/// Outcome of validating a whole form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    outcomes: IndexMap<String, RuleOutcome>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.outcomes.values().all(|o| o.valid)
    }

    pub fn outcome(&self, name: &str) -> Option<&RuleOutcome> {
        self.outcomes.get(name)
    }

    /// Replace the outcome of a single field
    pub fn set(&mut self, name: &str, outcome: RuleOutcome) {
        self.outcomes.insert(name.to_string(), outcome);
    }

    /// Failing fields and their messages
    pub fn errors(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.outcomes
            .iter()
            .filter(|(_, o)| !o.valid)
            .map(|(name, o)| (name.as_str(), o.message.as_deref()))
    }

    /// Error state for one field, given whether it has been touched
    pub fn field_state(&self, name: &str, touched: bool) -> FieldErrorState {
        present_error(self.outcome(name), touched)
    }
}

/// What the presentation layer shows for one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrorState {
    pub invalid: bool,
    pub message: Option<String>,
}

/// Errors stay hidden until the field has been interacted with
pub fn present_error(outcome: Option<&RuleOutcome>, touched: bool) -> FieldErrorState {
    match outcome {
        Some(outcome) if touched && !outcome.valid => FieldErrorState {
            invalid: true,
            message: outcome.message.clone(),
        },
        _ => FieldErrorState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StringRule;
    use crate::schema::FieldKind;
    use mockall::predicate::eq;

    fn required(message: &str) -> StringRule {
        StringRule::new().required(message)
    }

    mod compile {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_keys_are_unique_names_in_order() {
            let fields = vec![
                FieldSchema::new("b", FieldKind::PlainText, "B"),
                FieldSchema::new("a", FieldKind::PlainText, "A"),
                FieldSchema::new("b", FieldKind::PlainText, "B again"),
            ];
            let compiled = compile_validation(&fields);
            assert_eq!(compiled.names().collect::<Vec<_>>(), vec!["b", "a"]);
            assert_eq!(compiled.len(), 2);
        }

        #[test]
        fn test_last_duplicate_rule_wins() {
            let fields = vec![
                FieldSchema::new("x", FieldKind::PlainText, "X").with_rule(required("first")),
                FieldSchema::new("x", FieldKind::PlainText, "X").with_rule(required("second")),
            ];
            let compiled = compile_validation(&fields);
            assert_eq!(
                compiled.validate_field("x", &FieldValue::default()),
                RuleOutcome::fail("second")
            );
        }

        #[test]
        fn test_missing_rule_is_always_valid() {
            let fields = vec![FieldSchema::new("free", FieldKind::PlainText, "Free")];
            let compiled = compile_validation(&fields);
            assert!(compiled.contains("free"));
            assert!(compiled.validate_field("free", &FieldValue::default()).valid);
        }

        #[test]
        fn test_unknown_name_passes() {
            let compiled = compile_validation(&[]);
            assert!(compiled.is_empty());
            assert!(compiled.validate_field("ghost", &FieldValue::default()).valid);
        }

        #[test]
        fn test_rule_is_threaded_through_untouched() {
            let mut mock = MockValidationRule::new();
            mock.expect_evaluate()
                .with(eq(FieldValue::from("42")))
                .times(1)
                .returning(|_| RuleOutcome::fail("mocked"));

            let fields =
                vec![FieldSchema::new("age", FieldKind::DigitsOnly, "Age").with_rule(mock)];
            let compiled = compile_validation(&fields);

            let mut values = FormValues::new();
            values.insert("age".to_string(), FieldValue::from("42"));
            let report = compiled.validate(&values);
            assert_eq!(report.outcome("age"), Some(&RuleOutcome::fail("mocked")));
        }

        #[test]
        fn test_shared_rule_is_the_same_instance() {
            let rule: Arc<dyn ValidationRule> = Arc::new(required("r"));
            let fields = vec![
                FieldSchema::new("a", FieldKind::PlainText, "A").with_shared_rule(rule.clone())
            ];
            let compiled = compile_validation(&fields);
            assert!(Arc::ptr_eq(compiled.rule("a").unwrap(), &rule));
        }
    }

    mod report {
        use super::*;
        use pretty_assertions::assert_eq;

        fn compiled() -> CompiledValidation {
            compile_validation(&[
                FieldSchema::new("name", FieldKind::LettersOnly, "Nome")
                    .with_rule(required("name required")),
                FieldSchema::new("nick", FieldKind::PlainText, "Nick"),
            ])
        }

        #[test]
        fn test_missing_values_evaluate_as_empty() {
            let report = compiled().validate(&FormValues::new());
            assert!(!report.is_valid());
            assert_eq!(
                report.errors().collect::<Vec<_>>(),
                vec![("name", Some("name required"))]
            );
        }

        #[test]
        fn test_each_field_is_evaluated_independently() {
            let mut values = FormValues::new();
            values.insert("name".to_string(), FieldValue::from("Ana"));
            let report = compiled().validate(&values);
            assert!(report.is_valid());
            assert!(report.outcome("nick").unwrap().valid);
        }

        #[test]
        fn test_set_replaces_single_outcome() {
            let mut report = compiled().validate(&FormValues::new());
            report.set("name", RuleOutcome::pass());
            assert!(report.is_valid());
        }
    }

    mod presentation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_untouched_errors_are_hidden() {
            let outcome = RuleOutcome::fail("bad");
            assert_eq!(present_error(Some(&outcome), false), FieldErrorState::default());
        }

        #[test]
        fn test_touched_errors_are_shown() {
            let outcome = RuleOutcome::fail("bad");
            assert_eq!(
                present_error(Some(&outcome), true),
                FieldErrorState {
                    invalid: true,
                    message: Some("bad".to_string()),
                }
            );
        }

        #[test]
        fn test_valid_or_missing_outcome_is_clean() {
            assert_eq!(
                present_error(Some(&RuleOutcome::pass()), true),
                FieldErrorState::default()
            );
            assert_eq!(present_error(None, true), FieldErrorState::default());
        }

        #[test]
        fn test_report_field_state() {
            let compiled = compile_validation(&[
                FieldSchema::new("e", FieldKind::Email, "E")
                    .with_rule(StringRule::new().required("need")),
            ]);
            let report = compiled.validate(&FormValues::new());
            assert!(report.field_state("e", true).invalid);
            assert!(!report.field_state("e", false).invalid);
        }
    }
}
