//! Directive dispatch
//!
//! Selects a [`Validating`] strategy from the runtime kind of a value and
//! applies a parsed directive to it. Lists are checked element by element
//! and stop at the first failing element.

use crate::config::ValidatorConfig;
use crate::directive::{Directive, Operation};
use crate::errors::{DirectiveError, DirectiveResult, ErrorKind};
use crate::strategies::{parse_int, IntValidating, StrValidating, Validating};
use crate::types::Value;
use std::collections::BTreeSet;

/// Apply `directive` to `value`
///
/// # Example
///
/// ```
/// use ouroboros_directives::dispatch::dispatch;
/// use ouroboros_directives::{parse_directive, ErrorKind, Value, ValidatorConfig};
///
/// let directive = parse_directive("max:5").unwrap();
/// let config = ValidatorConfig::default();
///
/// let value = Value::from(vec![1_i64, 10, 3]);
/// let err = dispatch(&value, &directive, &config).unwrap_err();
/// assert!(err.is(ErrorKind::MaxFailed));
/// ```
pub fn dispatch(value: &Value, directive: &Directive, config: &ValidatorConfig) -> DirectiveResult<()> {
    match value {
        Value::Int(n) => execute(&IntValidating(*n), directive),
        Value::String(s) => execute(&StrValidating::new(s, config.length_unit), directive),
        Value::List(items) => {
            for (index, item) in items.iter().enumerate() {
                if let Err(e) = dispatch(item, directive, config) {
                    tracing::trace!(index, operation = %directive.operation, "list element failed");
                    return Err(e);
                }
            }
            Ok(())
        }
        Value::Null | Value::Bool(_) | Value::Float(_) | Value::Bytes(_) | Value::Struct(_) => {
            Err(DirectiveError::new(
                ErrorKind::UnsupportedType,
                format!("({})", value.type_name()),
            ))
        }
    }
}

/// Run one directive through a strategy
pub fn execute<V: Validating>(strategy: &V, directive: &Directive) -> DirectiveResult<()> {
    tracing::trace!(
        type_name = strategy.type_name(),
        %directive,
        "executing directive"
    );

    match directive.operation {
        Operation::In => {
            let set = membership_set(strategy, &directive.args)?;
            strategy.is_in(&set)
        }
        Operation::Len => {
            let bound = parse_int(directive.bound())?;
            let bound = usize::try_from(bound).map_err(|_| {
                DirectiveError::syntax(format!("negative value for len operation ({})", bound))
            })?;
            strategy.len(bound)
        }
        Operation::Min => strategy.min(parse_int(directive.bound())?),
        Operation::Max => strategy.max(parse_int(directive.bound())?),
    }
}

/// Parse argument tokens into a deduplicated set
fn membership_set<V: Validating>(strategy: &V, args: &[String]) -> DirectiveResult<BTreeSet<V::Item>> {
    args.iter().map(|token| strategy.parse(token)).collect()
}
