//! Typed validation strategies
//!
//! Each supported scalar type implements [`Validating`], the same set of
//! checks for every type. Dispatch picks the strategy once and never branches
//! on type again; `len` on integers is a guaranteed failure instead of a
//! special case in the caller.

use crate::config::LengthUnit;
use crate::errors::{DirectiveError, DirectiveResult, ErrorKind};
use std::collections::BTreeSet;
use std::fmt::Debug;

// ============================================================================
// Strategy Trait
// ============================================================================

/// Checks available on a value bound to a scalar type
pub trait Validating {
    /// Element type of membership sets
    type Item: Ord + Debug;

    /// Human-readable type name for error messages
    fn type_name(&self) -> &'static str;

    /// Length must equal `bound`
    fn len(&self, bound: usize) -> DirectiveResult<()>;

    /// Value (or length) must be at least `bound`
    fn min(&self, bound: i64) -> DirectiveResult<()>;

    /// Value (or length) must be at most `bound`
    fn max(&self, bound: i64) -> DirectiveResult<()>;

    /// Value must be a member of `set`
    fn is_in(&self, set: &BTreeSet<Self::Item>) -> DirectiveResult<()>;

    /// Parse a directive argument into a set element
    fn parse(&self, token: &str) -> DirectiveResult<Self::Item>;
}

/// Parse a base-10 integer argument
pub fn parse_int(token: &str) -> DirectiveResult<i64> {
    token
        .parse::<i64>()
        .map_err(|e| DirectiveError::parse_int(format!("can't parse int argument \"{}\"", token), e))
}

// ============================================================================
// Integer Strategy
// ============================================================================

/// Strategy for integer values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntValidating(pub i64);

impl Validating for IntValidating {
    type Item = i64;

    fn type_name(&self) -> &'static str {
        "integer"
    }

    fn len(&self, _bound: usize) -> DirectiveResult<()> {
        Err(DirectiveError::new(
            ErrorKind::UnsupportedOperationForType,
            format!("operation \"len\" on type {}", self.type_name()),
        ))
    }

    fn min(&self, bound: i64) -> DirectiveResult<()> {
        if self.0 < bound {
            return Err(DirectiveError::new(
                ErrorKind::MinFailed,
                format!("{} < {}", self.0, bound),
            ));
        }
        Ok(())
    }

    fn max(&self, bound: i64) -> DirectiveResult<()> {
        if self.0 > bound {
            return Err(DirectiveError::new(
                ErrorKind::MaxFailed,
                format!("{} > {}", self.0, bound),
            ));
        }
        Ok(())
    }

    fn is_in(&self, set: &BTreeSet<i64>) -> DirectiveResult<()> {
        if !set.contains(&self.0) {
            return Err(DirectiveError::new(
                ErrorKind::InFailed,
                format!("{} is not in {:?}", self.0, set),
            ));
        }
        Ok(())
    }

    fn parse(&self, token: &str) -> DirectiveResult<i64> {
        parse_int(token)
    }
}

// ============================================================================
// String Strategy
// ============================================================================

/// Strategy for text values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrValidating<'a> {
    value: &'a str,
    unit: LengthUnit,
}

impl<'a> StrValidating<'a> {
    /// Bind a text value, counting length in `unit`
    pub fn new(value: &'a str, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    fn length(&self) -> usize {
        self.unit.measure(self.value)
    }
}

impl Validating for StrValidating<'_> {
    type Item = String;

    fn type_name(&self) -> &'static str {
        "string"
    }

    fn len(&self, bound: usize) -> DirectiveResult<()> {
        let length = self.length();
        if length != bound {
            return Err(DirectiveError::new(
                ErrorKind::LengthFailed,
                format!("len({}) == {} != {}", self.value, length, bound),
            ));
        }
        Ok(())
    }

    fn min(&self, bound: i64) -> DirectiveResult<()> {
        let length = self.length();
        // Lengths beyond i64::MAX cannot occur for in-memory strings
        if (length as i64) < bound {
            return Err(DirectiveError::new(
                ErrorKind::MinFailed,
                format!("len({}) == {} < {}", self.value, length, bound),
            ));
        }
        Ok(())
    }

    fn max(&self, bound: i64) -> DirectiveResult<()> {
        let length = self.length();
        if (length as i64) > bound {
            return Err(DirectiveError::new(
                ErrorKind::MaxFailed,
                format!("len({}) == {} > {}", self.value, length, bound),
            ));
        }
        Ok(())
    }

    fn is_in(&self, set: &BTreeSet<String>) -> DirectiveResult<()> {
        if !set.contains(self.value) {
            return Err(DirectiveError::new(
                ErrorKind::InFailed,
                format!("{:?} is not in {:?}", self.value, set),
            ));
        }
        Ok(())
    }

    fn parse(&self, token: &str) -> DirectiveResult<String> {
        Ok(token.to_string())
    }
}
