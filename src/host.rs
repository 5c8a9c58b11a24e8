//! Minimal form-state host for the demo
//!
//! Tracks live values, touched fields and the submitting flag, and calls
//! into the engine for every change, blur, toggle and validation pass.

use schema_form::{
    compile_validation, derive_initial_values, resolve, CompiledValidation, EngineConfig,
    FieldErrorState, FieldKind, FieldSchema, FieldValue, FormValues, OptionValue,
    TransformRegistry, ValidationReport,
};
use std::collections::HashSet;

pub struct FormHost {
    fields: Vec<FieldSchema>,
    transforms: TransformRegistry,
    validation: CompiledValidation,
    initial: FormValues,
    values: FormValues,
    touched: HashSet<String>,
    report: ValidationReport,
    submitting: bool,
}

impl FormHost {
    pub fn new(fields: Vec<FieldSchema>, config: &EngineConfig) -> Self {
        for warning in schema_form::diagnose(&fields) {
            tracing::warn!("{warning}");
        }
        let initial = derive_initial_values(&fields);
        let validation = compile_validation(&fields);
        let report = validation.validate(&initial);
        Self {
            fields,
            transforms: config.transforms(),
            validation,
            values: initial.clone(),
            initial,
            touched: HashSet::new(),
            report,
            submitting: false,
        }
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn transforms(&self) -> &TransformRegistry {
        &self.transforms
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> FieldValue {
        self.values.get(name).cloned().unwrap_or_default()
    }

    /// Schema entry that owns `name`; the last duplicate wins like the values do
    fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().rev().find(|f| f.name == name)
    }

    fn kind(&self, name: &str) -> FieldKind {
        self.field(name).map(|f| f.kind.clone()).unwrap_or_default()
    }

    /// Text input changed
    pub fn change(&mut self, name: &str, raw: &str) {
        let Some(field) = self.field(name) else {
            return;
        };
        if resolve(&field.kind).multi_value {
            return;
        }
        let clamped = field.clamp_to_max_length(raw);
        let value = self.transforms.transform(&field.kind, &clamped);
        self.set_value(name, FieldValue::Text(value));
    }

    /// Field lost focus
    pub fn blur(&mut self, name: &str) {
        if self.field(name).is_none() {
            return;
        }
        self.touched.insert(name.to_string());
        let kind = self.kind(name);
        if !resolve(&kind).multi_value {
            let current = self.value(name);
            let normalized = self
                .transforms
                .on_blur(&kind, current.as_text())
                .into_value();
            self.set_value(name, FieldValue::Text(normalized));
        } else {
            self.revalidate(name);
        }
    }

    /// Option picked in a choice field
    pub fn choose(&mut self, name: &str, option: &OptionValue) {
        let kind = self.kind(name);
        let next = if resolve(&kind).multi_value {
            self.transforms.toggle(&self.value(name), option)
        } else {
            FieldValue::Text(option.coerce())
        };
        self.touched.insert(name.to_string());
        self.set_value(name, next);
    }

    /// Clear a single-value field
    pub fn clear(&mut self, name: &str) {
        if !resolve(&self.kind(name)).multi_value {
            self.set_value(name, FieldValue::default());
        }
    }

    fn set_value(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_string(), value);
        self.revalidate(name);
    }

    fn revalidate(&mut self, name: &str) {
        let outcome = self.validation.validate_field(name, &self.value(name));
        self.report.set(name, outcome);
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error_state(&self, name: &str) -> FieldErrorState {
        self.report.field_state(name, self.is_touched(name))
    }

    /// Number of fields currently failing validation
    pub fn error_count(&self) -> usize {
        self.report.errors().count()
    }

    /// Display text for a field's current value
    pub fn display(&self, field: &FieldSchema) -> String {
        self.transforms.display(&field.kind, &self.value(&field.name))
    }

    /// Touch every field and validate. Returns the values to submit when the
    /// form is valid and no submission is already running.
    pub fn begin_submit(&mut self) -> Option<FormValues> {
        if self.submitting {
            return None;
        }
        self.touched
            .extend(self.fields.iter().map(|f| f.name.clone()));
        self.report = self.validation.validate(&self.values);
        if !self.report.is_valid() {
            tracing::debug!(errors = self.error_count(), "submit blocked by validation");
            return None;
        }
        self.submitting = true;
        Some(self.values.clone())
    }

    /// Submission completed: clear the flag and start over
    pub fn finish_submit(&mut self) {
        self.submitting = false;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.touched.clear();
        self.report = self.validation.validate(&self.values);
    }
}
