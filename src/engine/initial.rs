//! Initial form values derived from a schema

use crate::schema::{FieldKind, FieldSchema, FieldValue};
use indexmap::IndexMap;

/// Field values keyed by name, in first-seen schema order
pub type FormValues = IndexMap<String, FieldValue>;

/// Derive the starting value of every field.
///
/// Checkbox groups start with the values of their checked options; every
/// other kind starts with its declared value, or empty text. Later duplicate
/// names overwrite earlier ones.
pub fn derive_initial_values(fields: &[FieldSchema]) -> FormValues {
    let mut values = FormValues::with_capacity(fields.len());
    for field in fields {
        let value = match field.kind {
            FieldKind::MultiSelectCheckbox => FieldValue::List(
                field
                    .options
                    .iter()
                    .filter(|o| o.checked)
                    .map(|o| o.value.coerce())
                    .collect(),
            ),
            _ => field.value.clone().unwrap_or_default(),
        };
        if values.insert(field.name.clone(), value).is_some() {
            tracing::warn!(field = %field.name, "duplicate field name; last value wins");
        }
    }
    values
}
