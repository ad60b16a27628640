//! Runtime values and records
//!
//! This module defines the values handed to the validator: a closed set of
//! runtime kinds, and records made of named, annotated fields.

use crate::tags::StructTag;

// ============================================================================
// Value Enum - Runtime values to be validated
// ============================================================================

/// Runtime value that can be validated
///
/// Only `Int`, `String` and `List` of those are checked by directives. The
/// other kinds exist so a host record can be described faithfully; a
/// directive on them fails with `UnsupportedType`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (i64)
    Int(i64),
    /// Float value (f64)
    Float(f64),
    /// String value
    String(String),
    /// Binary data
    Bytes(Vec<u8>),
    /// Homogeneous sequence
    List(Vec<Value>),
    /// Record with named fields
    Struct(Record),
}

impl Value {
    /// Get human-readable type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "array",
            Self::Struct(_) => "struct",
        }
    }

    /// Borrow the record if this is a struct value
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Struct(record) => Some(record),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Self::Null)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Struct(record)
    }
}

// ============================================================================
// Field
// ============================================================================

/// One named field of a record
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name
    pub name: String,
    /// Whether the field is visible outside its defining type
    pub exported: bool,
    /// Directive text set directly on the field
    pub directive: Option<String>,
    /// Raw annotation string (`key:"value" ...`)
    pub tag: Option<StructTag>,
    /// Runtime value
    pub value: Value,
}

impl Field {
    /// Create an exported field without annotations
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            directive: None,
            tag: None,
            value: value.into(),
        }
    }

    /// Attach directive text
    pub fn directive(mut self, directive: impl Into<String>) -> Self {
        self.directive = Some(directive.into());
        self
    }

    /// Attach a raw annotation string
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(StructTag::new(tag));
        self
    }

    /// Mark the field as not exported
    pub fn unexported(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Directive text for this field: the explicit directive, else the tag
    /// value under `tag_key`
    pub fn resolve_directive(&self, tag_key: &str) -> Option<String> {
        self.directive
            .clone()
            .or_else(|| self.tag.as_ref().and_then(|tag| tag.lookup(tag_key)))
    }
}

// ============================================================================
// Record
// ============================================================================

/// Ordered set of named fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// Optional type name, used in log output
    pub name: Option<String>,
    /// Fields in declaration order
    pub fields: Vec<Field>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record with a type name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            fields: Vec::new(),
        }
    }

    /// Append a field
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Append a field in place
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<Field> for Record {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            name: None,
            fields: iter.into_iter().collect(),
        }
    }
}
