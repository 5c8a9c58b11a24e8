//! Schema model
//!
//! This module provides the field descriptor types and schema loading:
//! - `field`: field descriptors and values
//! - `kind`: type tags
//! - `option`: option records and the option-list adapter

mod field;
mod kind;
mod lenient;
mod option;

pub use field::{FieldSchema, FieldValue, DEFAULT_MAX_LENGTH};
pub use kind::FieldKind;
pub use option::{to_options, to_options_from, OptionRecord, OptionValue};

use crate::config::EngineConfig;
use crate::error::{FormError, Result};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Parse a JSON field list, resolving configured type aliases
pub fn load_schema(json: &str, config: &EngineConfig) -> Result<Vec<FieldSchema>> {
    let mut fields: Vec<FieldSchema> = serde_json::from_str(json)?;
    for field in &mut fields {
        let resolved = match &field.kind {
            FieldKind::Other(tag) => config.resolve_kind(tag),
            _ => continue,
        };
        field.kind = resolved;
    }
    tracing::debug!(fields = fields.len(), "schema loaded");
    Ok(fields)
}

/// Read and parse a JSON schema file
pub fn load_schema_file(path: &Path, config: &EngineConfig) -> Result<Vec<FieldSchema>> {
    let content = std::fs::read_to_string(path).map_err(|source| FormError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_schema(&content, config)
}

/// Tolerated schema irregularities
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaWarning {
    /// Field at this position has an empty name
    EmptyName { index: usize },
    /// Field has no label to show
    EmptyLabel { field: String },
    /// Name used more than once; the last entry wins
    DuplicateName { name: String },
    /// Type tag not recognized; rendered as plain text
    UnknownType { field: String, tag: String },
    /// Selection field without options
    MissingOptions { field: String },
    /// Two options of one field share a value
    DuplicateOptionValue { field: String, value: String },
    /// Option at this position has no label to show
    EmptyOptionLabel { field: String, index: usize },
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaWarning::EmptyName { index } => write!(f, "field #{index} has no name"),
            SchemaWarning::EmptyLabel { field } => write!(f, "field '{field}' has no label"),
            SchemaWarning::DuplicateName { name } => {
                write!(f, "field name '{name}' is used more than once; the last entry wins")
            }
            SchemaWarning::UnknownType { field, tag } => {
                write!(f, "field '{field}' has unknown type '{tag}'; using plain text")
            }
            SchemaWarning::MissingOptions { field } => {
                write!(f, "field '{field}' is a selection field without options")
            }
            SchemaWarning::DuplicateOptionValue { field, value } => {
                write!(f, "field '{field}' has several options with value '{value}'")
            }
            SchemaWarning::EmptyOptionLabel { field, index } => {
                write!(f, "option #{index} of field '{field}' has no label")
            }
        }
    }
}

/// Report tolerated irregularities without changing how the schema is used
pub fn diagnose(fields: &[FieldSchema]) -> Vec<SchemaWarning> {
    let mut warnings = Vec::new();
    let mut seen_names = HashSet::new();
    let mut reported_names = HashSet::new();

    for (index, field) in fields.iter().enumerate() {
        if field.name.is_empty() {
            warnings.push(SchemaWarning::EmptyName { index });
        } else if !seen_names.insert(field.name.as_str())
            && reported_names.insert(field.name.as_str())
        {
            warnings.push(SchemaWarning::DuplicateName {
                name: field.name.clone(),
            });
        }

        if field.label.is_empty() {
            warnings.push(SchemaWarning::EmptyLabel {
                field: field.name.clone(),
            });
        }

        if let FieldKind::Other(tag) = &field.kind {
            warnings.push(SchemaWarning::UnknownType {
                field: field.name.clone(),
                tag: tag.clone(),
            });
        }

        if crate::engine::resolve(&field.kind).requires_options {
            if field.options.is_empty() {
                warnings.push(SchemaWarning::MissingOptions {
                    field: field.name.clone(),
                });
            }
            let mut seen_values = HashSet::new();
            let mut reported_values = HashSet::new();
            for (index, option) in field.options.iter().enumerate() {
                if option.label.is_empty() {
                    warnings.push(SchemaWarning::EmptyOptionLabel {
                        field: field.name.clone(),
                        index,
                    });
                }
                let value = option.value.coerce();
                if !seen_values.insert(value.clone()) && reported_values.insert(value.clone()) {
                    warnings.push(SchemaWarning::DuplicateOptionValue {
                        field: field.name.clone(),
                        value,
                    });
                }
            }
        }
    }

    warnings
}
