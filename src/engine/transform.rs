//! Per-kind input transforms
//!
//! Every transform is a total function over strings. Checkbox groups do not
//! transform text; their change handler toggles list membership instead.

use super::currency::CurrencyLocale;
use super::dispatch::resolve;
use crate::schema::{FieldKind, FieldValue, OptionValue};

/// How raw input becomes a stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    PassThrough,
    /// Drop ASCII digits, keep everything else
    StripDigits,
    /// Keep ASCII digits only
    DigitsOnly,
    Currency,
    /// List membership toggle; text passes through unchanged
    ToggleMembership,
}

impl Transform {
    /// Normalize input on change
    pub fn apply(self, raw: &str, locale: &CurrencyLocale) -> String {
        match self {
            Transform::PassThrough | Transform::ToggleMembership => raw.to_string(),
            Transform::StripDigits => raw.chars().filter(|c| !c.is_ascii_digit()).collect(),
            Transform::DigitsOnly => raw.chars().filter(char::is_ascii_digit).collect(),
            Transform::Currency => locale.normalize(raw),
        }
    }

    /// Normalize input on blur
    pub fn on_blur(self, raw: &str, locale: &CurrencyLocale) -> BlurOutcome {
        match self {
            Transform::Currency if locale.clears_on_blur(raw) => BlurOutcome::Clear,
            _ => BlurOutcome::Keep(raw.to_string()),
        }
    }
}

/// Result of blur normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlurOutcome {
    /// Leave the value as it is
    Keep(String),
    /// Reset the field to the empty string
    Clear,
}

impl BlurOutcome {
    pub fn into_value(self) -> String {
        match self {
            BlurOutcome::Keep(value) => value,
            BlurOutcome::Clear => String::new(),
        }
    }
}

/// Add `value` when absent, remove it when present.
///
/// Surviving entries keep their order; additions go to the end.
pub fn toggle_membership(current: &[String], value: &OptionValue) -> Vec<String> {
    let key = value.coerce();
    if current.iter().any(|v| *v == key) {
        current.iter().filter(|v| **v != key).cloned().collect()
    } else {
        let mut next = current.to_vec();
        next.push(key);
        next
    }
}

/// Transforms keyed by field kind, parameterized by a currency locale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformRegistry {
    locale: CurrencyLocale,
}

impl TransformRegistry {
    pub fn new(locale: CurrencyLocale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &CurrencyLocale {
        &self.locale
    }

    /// Change-time normalization for a field kind
    pub fn transform(&self, kind: &FieldKind, raw: &str) -> String {
        resolve(kind).transform.apply(raw, &self.locale)
    }

    /// Blur-time normalization for a field kind
    pub fn on_blur(&self, kind: &FieldKind, raw: &str) -> BlurOutcome {
        resolve(kind).transform.on_blur(raw, &self.locale)
    }

    /// Checkbox change handler
    pub fn toggle(&self, current: &FieldValue, value: &OptionValue) -> FieldValue {
        FieldValue::List(toggle_membership(current.as_list(), value))
    }

    /// Display text for a stored value
    pub fn display(&self, kind: &FieldKind, stored: &FieldValue) -> String {
        match resolve(kind).transform {
            Transform::Currency => self.locale.display(stored.as_text()),
            _ => stored.display_value(),
        }
    }
}

/// Change-time normalization with the default locale
pub fn transform(kind: &FieldKind, raw: &str) -> String {
    TransformRegistry::default().transform(kind, raw)
}

/// Blur-time normalization with the default locale
pub fn on_blur_normalize(kind: &FieldKind, raw: &str) -> BlurOutcome {
    TransformRegistry::default().on_blur(kind, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    mod change {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_digits_only() {
            assert_eq!(transform(&FieldKind::DigitsOnly, "1a2b3"), "123");
            assert_eq!(transform(&FieldKind::DigitsOnly, "(11) 9 8765-4321"), "11987654321");
            assert_eq!(transform(&FieldKind::DigitsOnly, "٣"), "");
        }

        #[test]
        fn test_letters_only() {
            assert_eq!(transform(&FieldKind::LettersOnly, "Ana 2 Maria!"), "Ana  Maria!");
            assert_eq!(transform(&FieldKind::LettersOnly, "João"), "João");
        }

        #[test]
        fn test_pass_through_kinds() {
            for kind in [
                FieldKind::PlainText,
                FieldKind::Email,
                FieldKind::SingleSelect,
                FieldKind::RadioChoice,
                FieldKind::from_tag("mystery"),
            ] {
                assert_eq!(transform(&kind, "a1 @b"), "a1 @b");
            }
        }

        #[test]
        fn test_currency() {
            assert_eq!(transform(&FieldKind::Currency, "12,50"), "12,50");
            assert_eq!(transform(&FieldKind::Currency, "1234"), "1.234,00");
            assert_eq!(transform(&FieldKind::Currency, "abc"), "");
        }

        #[test]
        fn test_registry_uses_its_locale() {
            let registry = TransformRegistry::new(CurrencyLocale {
                symbol: "$".to_string(),
                decimal_separator: '.',
                grouping_separator: ',',
                precision: 2,
            });
            assert_eq!(registry.transform(&FieldKind::Currency, "1234.5"), "1,234.50");
        }
    }

    mod blur {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_currency_blank_or_zero_clears() {
            assert_eq!(on_blur_normalize(&FieldKind::Currency, ""), BlurOutcome::Clear);
            assert_eq!(on_blur_normalize(&FieldKind::Currency, "R$"), BlurOutcome::Clear);
            assert_eq!(on_blur_normalize(&FieldKind::Currency, "0,00"), BlurOutcome::Clear);
        }

        #[test]
        fn test_currency_amount_is_kept() {
            assert_eq!(
                on_blur_normalize(&FieldKind::Currency, "12,50"),
                BlurOutcome::Keep("12,50".to_string())
            );
        }

        #[test]
        fn test_other_kinds_are_kept() {
            assert_eq!(
                on_blur_normalize(&FieldKind::PlainText, ""),
                BlurOutcome::Keep(String::new())
            );
            assert_eq!(
                on_blur_normalize(&FieldKind::DigitsOnly, "0"),
                BlurOutcome::Keep("0".to_string())
            );
        }

        #[test]
        fn test_into_value() {
            assert_eq!(BlurOutcome::Clear.into_value(), "");
            assert_eq!(BlurOutcome::Keep("x".to_string()).into_value(), "x");
        }
    }

    mod toggle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_adds_at_end() {
            let next = toggle_membership(&strings(&["a", "b"]), &OptionValue::from("c"));
            assert_eq!(next, strings(&["a", "b", "c"]));
        }

        #[test]
        fn test_removes_preserving_order() {
            let next = toggle_membership(&strings(&["a", "b", "c"]), &OptionValue::from("b"));
            assert_eq!(next, strings(&["a", "c"]));
        }

        #[test]
        fn test_boolean_values_are_coerced() {
            let next = toggle_membership(&[], &OptionValue::Bool(true));
            assert_eq!(next, strings(&["true"]));
        }

        #[test]
        fn test_registry_toggle_on_text_value_starts_a_list() {
            let registry = TransformRegistry::default();
            let next = registry.toggle(&FieldValue::from(""), &OptionValue::from("x"));
            assert_eq!(next, FieldValue::List(strings(&["x"])));
        }
    }

    #[test]
    fn test_display() {
        let registry = TransformRegistry::default();
        assert_eq!(
            registry.display(&FieldKind::Currency, &FieldValue::from("12,50")),
            "R$ 12,50"
        );
        assert_eq!(registry.display(&FieldKind::Currency, &FieldValue::from("")), "");
        assert_eq!(
            registry.display(&FieldKind::PlainText, &FieldValue::from("hi")),
            "hi"
        );
    }

    proptest! {
        #[test]
        fn prop_digits_only_keeps_only_digits_in_order(raw in ".{0,40}") {
            let out = transform(&FieldKind::DigitsOnly, &raw);
            prop_assert!(out.chars().all(|c| c.is_ascii_digit()));
            let expected: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
            prop_assert_eq!(out, expected);
        }

        #[test]
        fn prop_letters_only_drops_exactly_the_digits(raw in ".{0,40}") {
            let out = transform(&FieldKind::LettersOnly, &raw);
            prop_assert!(!out.chars().any(|c| c.is_ascii_digit()));
            let expected: Vec<char> = raw.chars().filter(|c| !c.is_ascii_digit()).collect();
            prop_assert_eq!(out.chars().collect::<Vec<_>>(), expected);
        }

        #[test]
        fn prop_currency_change_is_idempotent(raw in "[0-9.,R$ -]{0,20}") {
            let once = transform(&FieldKind::Currency, &raw);
            prop_assert_eq!(transform(&FieldKind::Currency, &once), once);
        }

        #[test]
        fn prop_double_toggle_restores_membership(
            current in proptest::collection::vec("[a-d]", 0..6),
            value in "[a-e]",
        ) {
            let option = OptionValue::from(value.as_str());
            let twice = toggle_membership(&toggle_membership(&current, &option), &option);
            let mut before: Vec<String> = current.iter().filter(|v| **v != value).cloned().collect();
            let mut after: Vec<String> = twice.iter().filter(|v| **v != value).cloned().collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
            prop_assert_eq!(current.contains(&value), twice.contains(&value));
        }
    }
}
