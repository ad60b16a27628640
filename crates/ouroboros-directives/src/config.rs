//! Configuration options for validation behavior

/// Default annotation key holding a field's directive
pub const DEFAULT_TAG_KEY: &str = "validate";

// ============================================================================
// Length Unit
// ============================================================================

/// How text length is counted by `len`, `min` and `max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    /// Unicode scalar values (default)
    #[default]
    Chars,
    /// UTF-8 bytes
    Bytes,
}

impl LengthUnit {
    /// Length of `s` in this unit
    pub fn measure(&self, s: &str) -> usize {
        match self {
            Self::Chars => s.chars().count(),
            Self::Bytes => s.len(),
        }
    }
}

// ============================================================================
// Validator Config
// ============================================================================

/// Configuration options for validation behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Annotation key looked up in a field's tag when no explicit directive is set
    pub tag_key: String,

    /// Unit for text length checks
    pub length_unit: LengthUnit,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            tag_key: DEFAULT_TAG_KEY.to_string(),
            length_unit: LengthUnit::default(),
        }
    }
}

impl ValidatorConfig {
    /// Create a config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the annotation key
    pub fn with_tag_key(mut self, key: impl Into<String>) -> Self {
        self.tag_key = key.into();
        self
    }

    /// Set the text length unit
    pub fn with_length_unit(mut self, unit: LengthUnit) -> Self {
        self.length_unit = unit;
        self
    }
}
