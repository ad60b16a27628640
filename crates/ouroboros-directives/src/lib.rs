//! Ouroboros Directives
//!
//! Directive-driven field validation for Ouroboros records.
//!
//! Each field of a record may carry a short directive such as `min:3`,
//! `len:6` or `in:red,green`. Validation parses every directive, picks the
//! checking strategy from the field's runtime type and returns all failures
//! at once, each attributed to its field.
//!
//! # Directive Grammar
//!
//! ```text
//! <op>:<arg>[,<arg>]*        <op> ∈ { in, len, min, max }
//! ```
//!
//! | Op    | Integer            | String               |
//! |-------|--------------------|----------------------|
//! | `len` | always fails       | length == bound      |
//! | `min` | value >= bound     | length >= bound      |
//! | `max` | value <= bound     | length <= bound      |
//! | `in`  | value in set       | value in set         |
//!
//! Lists of integers or strings are checked element by element and stop at
//! the first failing element.
//!
//! # Example
//!
//! ```rust
//! use ouroboros_directives::{validate, ErrorKind, Field, Record, Value};
//!
//! let user = Record::named("User")
//!     .field(Field::new("Name", "Al").tag(r#"json:"name" validate:"min:3""#))
//!     .field(Field::new("Role", "admin").directive("in:admin,user"))
//!     .field(Field::new("Scores", vec![1_i64, 10, 3]).directive("max:5"));
//!
//! let err = validate(&Value::from(user)).unwrap_err();
//! assert_eq!(err.field_errors().len(), 2);
//! assert!(err.is(ErrorKind::MinFailed));
//! assert!(err.is(ErrorKind::MaxFailed));
//! ```

// Public modules
pub mod config;
pub mod directive;
pub mod dispatch;
pub mod errors;
pub mod strategies;
pub mod tags;
pub mod types;
pub mod validators;

// Re-export commonly used types
pub use config::{LengthUnit, ValidatorConfig};
pub use directive::{parse_directive, Directive, Operation, SUPPORTED_OPERATIONS};
pub use errors::{
    DirectiveError, DirectiveResult, ErrorKind, FieldError, ValidateError, ValidationErrors,
    ValidationResult,
};
pub use strategies::{IntValidating, StrValidating, Validating};
pub use tags::StructTag;
pub use types::{Field, Record, Value};
pub use validators::{
    validate, validate_record, validate_record_with_config, validate_with_config, Validate,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
