//! Core validation engine
//!
//! Walks a record's fields in declaration order, runs each field's directive
//! and collects every failure. One failing field never stops the others.

use crate::config::ValidatorConfig;
use crate::directive::parse_directive;
use crate::dispatch::dispatch;
use crate::errors::{DirectiveError, ErrorKind, ValidateError, ValidationErrors, ValidationResult};
use crate::types::{Field, Record, Value};

// ============================================================================
// Public API
// ============================================================================

/// Validate a struct value against its field directives
///
/// This is the main entry point for validation. Non-struct values fail with
/// [`ValidateError::NotStruct`]; otherwise every annotated field is checked
/// and all failures are returned together.
///
/// # Example
///
/// ```
/// use ouroboros_directives::{validate, ErrorKind, Field, Record, Value};
///
/// let user = Record::named("User")
///     .field(Field::new("Name", "Al").directive("min:3"))
///     .field(Field::new("Age", 150).directive("max:120"));
///
/// let err = validate(&Value::from(user)).unwrap_err();
/// assert_eq!(err.field_errors().len(), 2);
/// assert!(err.is(ErrorKind::MinFailed));
/// assert!(err.is(ErrorKind::MaxFailed));
///
/// assert!(validate(&Value::Int(1)).unwrap_err().is(ErrorKind::NotStruct));
/// ```
pub fn validate(value: &Value) -> ValidationResult<()> {
    validate_with_config(value, &ValidatorConfig::default())
}

/// Validate a struct value with custom configuration
pub fn validate_with_config(value: &Value, config: &ValidatorConfig) -> ValidationResult<()> {
    match value.as_record() {
        Some(record) => validate_record_with_config(record, config),
        None => Err(ValidateError::NotStruct {
            kind: value.type_name(),
        }),
    }
}

/// Validate a record with default configuration
pub fn validate_record(record: &Record) -> ValidationResult<()> {
    validate_record_with_config(record, &ValidatorConfig::default())
}

/// Validate a record with custom configuration
pub fn validate_record_with_config(record: &Record, config: &ValidatorConfig) -> ValidationResult<()> {
    let mut errors = ValidationErrors::new();
    let mut checked = 0usize;

    for field in &record.fields {
        if validate_field(field, config, &mut errors) {
            checked += 1;
        }
    }

    tracing::debug!(
        record = record.name.as_deref().unwrap_or("<anonymous>"),
        fields = record.fields.len(),
        checked,
        errors = errors.len(),
        "validated record"
    );

    errors.into_result()
}

/// Check one field, appending any failures; returns whether it carried a directive
fn validate_field(field: &Field, config: &ValidatorConfig, errors: &mut ValidationErrors) -> bool {
    let Some(raw) = field.resolve_directive(&config.tag_key) else {
        return false;
    };

    if !field.exported {
        errors.add_cause(
            &field.name,
            DirectiveError::new(
                ErrorKind::UnexportedFieldNotAllowed,
                format!("field \"{}\"", field.name),
            ),
        );
    }

    let result = parse_directive(&raw).and_then(|directive| dispatch(&field.value, &directive, config));
    if let Err(cause) = result {
        errors.add_cause(&field.name, cause);
    }
    true
}

// ============================================================================
// Validate Trait
// ============================================================================

/// Types that describe themselves as a record of annotated fields
///
/// # Example
///
/// ```
/// use ouroboros_directives::{Field, Record, Validate};
///
/// struct Token {
///     code: String,
/// }
///
/// impl Validate for Token {
///     fn record(&self) -> Record {
///         Record::named("Token").field(Field::new("Code", self.code.as_str()).directive("len:6"))
///     }
/// }
///
/// assert!(Token { code: "abc123".into() }.validate().is_ok());
/// assert!(Token { code: "abc".into() }.validate().is_err());
/// ```
pub trait Validate {
    /// Describe this value's fields, directives and runtime values
    fn record(&self) -> Record;

    /// Validate with default configuration
    fn validate(&self) -> ValidationResult<()> {
        validate_record(&self.record())
    }

    /// Validate with custom configuration
    fn validate_with_config(&self, config: &ValidatorConfig) -> ValidationResult<()> {
        validate_record_with_config(&self.record(), config)
    }
}

impl Validate for Record {
    fn record(&self) -> Record {
        self.clone()
    }

    fn validate(&self) -> ValidationResult<()> {
        validate_record(self)
    }

    fn validate_with_config(&self, config: &ValidatorConfig) -> ValidationResult<()> {
        validate_record_with_config(self, config)
    }
}
