//! Schema interpretation and value transformation
//!
//! - `initial`: initial values derived from a schema
//! - `validation`: rule contract, compilation and error presentation
//! - `rules`: built-in string rules
//! - `transform` / `currency`: per-kind input normalization
//! - `dispatch`: kind to transform and widget table

mod currency;
mod dispatch;
mod initial;
pub(crate) mod rules;
mod transform;
mod validation;

pub use currency::CurrencyLocale;
pub use dispatch::{resolve, FieldDispatch, Widget};
pub use initial::{derive_initial_values, FormValues};
pub use rules::{LengthCheck, PatternCheck, StringRule};
pub use transform::{
    on_blur_normalize, toggle_membership, transform, BlurOutcome, Transform, TransformRegistry,
};
pub use validation::{
    compile_validation, present_error, AlwaysValid, CompiledValidation, FieldErrorState,
    RuleOutcome, ValidationReport, ValidationRule,
};
