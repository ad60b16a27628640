//! Directive grammar
//!
//! A directive is the text attached to a field, `"<op>:<arg>[,<arg>]*"` with
//! `<op>` one of `in`, `len`, `min`, `max`. Only `in` accepts more than one
//! argument. Tokens are kept verbatim, whitespace included.

use crate::errors::{DirectiveError, DirectiveResult, ErrorKind};
use std::fmt;
use std::str::FromStr;

/// Separator between the operation name and its arguments
pub const OPERATION_SEPARATOR: char = ':';

/// Separator between arguments
pub const ARGUMENT_SEPARATOR: char = ',';

// ============================================================================
// Operation
// ============================================================================

/// Validation operation named by a directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `in`: value must be a member of the argument set
    In,
    /// `len`: text length must equal the bound
    Len,
    /// `min`: integer (or text length) must be at least the bound
    Min,
    /// `max`: integer (or text length) must be at most the bound
    Max,
}

/// Every operation the parser accepts
pub const SUPPORTED_OPERATIONS: [Operation; 4] =
    [Operation::In, Operation::Len, Operation::Min, Operation::Max];

impl Operation {
    /// Name as written in directive text
    pub fn name(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Len => "len",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    /// Look up an operation by its directive name
    pub fn from_name(name: &str) -> Option<Self> {
        SUPPORTED_OPERATIONS.into_iter().find(|op| op.name() == name)
    }

    /// Whether the operation takes a set of arguments rather than one bound
    pub fn is_membership(&self) -> bool {
        matches!(self, Self::In)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Directive
// ============================================================================

/// Parsed directive: an operation plus its ordered argument tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Operation to run
    pub operation: Operation,
    /// Raw argument tokens (at least one; exactly one unless `in`)
    pub args: Vec<String>,
}

impl Directive {
    /// First argument, the bound of `len`/`min`/`max`
    pub fn bound(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.operation,
            OPERATION_SEPARATOR,
            self.args.join(",")
        )
    }
}

impl FromStr for Directive {
    type Err = DirectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_directive(s)
    }
}

/// Parse directive text into a [`Directive`]
///
/// # Example
///
/// ```
/// use ouroboros_directives::directive::{parse_directive, Operation};
///
/// let directive = parse_directive("in:a,b").unwrap();
/// assert_eq!(directive.operation, Operation::In);
/// assert_eq!(directive.args, vec!["a", "b"]);
///
/// assert!(parse_directive("min:5:6").is_err());
/// ```
pub fn parse_directive(raw: &str) -> DirectiveResult<Directive> {
    let parts: Vec<&str> = raw.split(OPERATION_SEPARATOR).collect();
    if parts.len() != 2 {
        return Err(DirectiveError::syntax(format!(
            "expected exactly one '{}' separator, found {}",
            OPERATION_SEPARATOR,
            parts.len() - 1
        )));
    }
    let (name, blob) = (parts[0], parts[1]);

    let operation = Operation::from_name(name).ok_or_else(|| {
        DirectiveError::new(
            ErrorKind::UnsupportedOperation,
            format!("unsupported operation ({})", name),
        )
    })?;

    if blob.is_empty() {
        return Err(DirectiveError::syntax(format!(
            "zero arguments provided for operation \"{}\"",
            operation
        )));
    }

    let args: Vec<String> = blob.split(ARGUMENT_SEPARATOR).map(str::to_string).collect();
    if !operation.is_membership() && args.len() != 1 {
        return Err(DirectiveError::syntax(format!(
            "too many arguments ({}) for operation \"{}\"",
            args.len(),
            operation
        )));
    }

    Ok(Directive { operation, args })
}
