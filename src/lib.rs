//! schema-form - declarative schema-driven form engine
//!
//! Turns an ordered list of field descriptors into initial form values, a
//! composite validation rule and a per-field dispatch that decides how raw
//! input is normalized before it is stored. Rendering and live form state
//! belong to the caller.

pub mod config;
pub mod engine;
pub mod error;
pub mod schema;

pub use config::EngineConfig;
pub use engine::{
    compile_validation, derive_initial_values, on_blur_normalize, present_error, resolve,
    toggle_membership, transform, AlwaysValid, BlurOutcome, CompiledValidation, CurrencyLocale,
    FieldDispatch, FieldErrorState, FormValues, RuleOutcome, StringRule, Transform,
    TransformRegistry, ValidationReport, ValidationRule, Widget,
};
pub use error::{FormError, Result};
pub use schema::{
    diagnose, load_schema, load_schema_file, to_options, to_options_from, FieldKind, FieldSchema,
    FieldValue, OptionRecord, OptionValue, SchemaWarning,
};
