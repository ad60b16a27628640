//! Validation error types
//!
//! This module defines the error taxonomy for directive validation and the
//! aggregate that collects per-field failures across a whole record.

use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

// ============================================================================
// Validation Result
// ============================================================================

/// Result of validating a whole record
pub type ValidationResult<T> = Result<T, ValidateError>;

/// Result of a single directive against a single value
pub type DirectiveResult<T> = Result<T, DirectiveError>;

// ============================================================================
// Error Kind Classification
// ============================================================================

/// Classification of validation errors
///
/// Every failure surfaced by this crate carries exactly one kind, so callers
/// can match on it without inspecting message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// The validated value is not a record with named fields
    NotStruct,
    /// Malformed directive text or an argument that does not parse
    InvalidSyntax,
    /// A directive is attached to a field that is not exported
    UnexportedFieldNotAllowed,
    /// `len` check failed
    LengthFailed,
    /// `in` check failed
    InFailed,
    /// `max` check failed
    MaxFailed,
    /// `min` check failed
    MinFailed,
    /// The runtime value has a kind no strategy handles
    UnsupportedType,
    /// The directive names an operation outside `in`, `len`, `min`, `max`
    UnsupportedOperation,
    /// The operation is known but undefined for the value's type
    UnsupportedOperationForType,
}

impl ErrorKind {
    /// Stable base message for this kind
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotStruct => "wrong argument given, should be a struct",
            Self::InvalidSyntax => "invalid validator syntax",
            Self::UnexportedFieldNotAllowed => "validation for unexported field is not allowed",
            Self::LengthFailed => "len validation failed",
            Self::InFailed => "in validation failed",
            Self::MaxFailed => "max validation failed",
            Self::MinFailed => "min validation failed",
            Self::UnsupportedType => "unsupported type to validate",
            Self::UnsupportedOperation => "unsupported validation operation",
            Self::UnsupportedOperationForType => "this operation is not supported for this type",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ============================================================================
// Directive Error
// ============================================================================

/// Failure of one directive (parse or check) against one value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {detail}")]
pub struct DirectiveError {
    kind: ErrorKind,
    detail: String,
    #[source]
    source: Option<ParseIntError>,
}

impl DirectiveError {
    /// Create a new directive error
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
            source: None,
        }
    }

    /// Create an `InvalidSyntax` error wrapping an integer parse failure
    pub fn parse_int(detail: impl Into<String>, source: ParseIntError) -> Self {
        Self {
            kind: ErrorKind::InvalidSyntax,
            detail: format!("{} ({})", detail.into(), source),
            source: Some(source),
        }
    }

    /// Create an `InvalidSyntax` error
    pub fn syntax(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSyntax, detail)
    }

    /// Error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Detail text (without the kind prefix)
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Check the error against a taxonomy kind
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

// ============================================================================
// Field Error
// ============================================================================

/// A validation failure attributed to one named field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as declared on the record
    pub field: String,

    /// What went wrong
    pub cause: DirectiveError,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, cause: DirectiveError) -> Self {
        Self {
            field: field.into(),
            cause,
        }
    }

    /// Error kind of the cause
    pub fn kind(&self) -> ErrorKind {
        self.cause.kind()
    }

    /// Check the cause against a taxonomy kind
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.cause.is(kind)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.cause)
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FieldError", 3)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("kind", &self.cause.kind())?;
        state.serialize_field("message", &self.cause.to_string())?;
        state.end()
    }
}

// ============================================================================
// Validation Errors Collection
// ============================================================================

/// Ordered collection of field errors from one validation pass
///
/// Errors keep field-declaration order. A field may appear more than once,
/// e.g. an unexported field whose directive also fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationErrors {
    /// List of individual field errors
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Add a field error to the collection
    pub fn add(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Attribute `cause` to `field` and add it
    pub fn add_cause(&mut self, field: &str, cause: DirectiveError) {
        self.add(FieldError::new(field, cause));
    }

    /// Iterate over errors in order
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Get errors as a slice
    pub fn as_slice(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether any error has the given kind
    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.is(kind))
    }

    /// Errors attributed to one field
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Convert to Result - Ok if no errors, Err if there are errors
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidateError::Fields(self))
        }
    }

    /// Render as a JSON error report
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

// ============================================================================
// Top-level Error
// ============================================================================

/// Outcome of a failed validation call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// Precondition failure: the value has no named fields
    #[error("wrong argument given, should be a struct: got {kind}")]
    NotStruct {
        /// Observed runtime kind
        kind: &'static str,
    },

    /// One or more fields failed
    #[error("{0}")]
    Fields(ValidationErrors),
}

impl ValidateError {
    /// Whether this error is, or contains, the given kind
    pub fn is(&self, kind: ErrorKind) -> bool {
        match self {
            Self::NotStruct { .. } => kind == ErrorKind::NotStruct,
            Self::Fields(errors) => errors.contains(kind),
        }
    }

    /// Field errors, empty for `NotStruct`
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::NotStruct { .. } => &[],
            Self::Fields(errors) => errors.as_slice(),
        }
    }
}
