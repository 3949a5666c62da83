//! Scale resolution for raw prop values.

use serde_json::Value;

use crate::theme::{PathSegment, Scale};
use crate::util::{magnitude, negative_magnitude};

/// Maps raw prop values through a scale.
///
/// - Lists are used as lookup paths (`["gray", 2]`).
/// - Strings are split on `.` into a path (`"gray.2"`).
/// - Numbers index the scale by their magnitude.
///
/// A miss falls back to the raw value. A negative numeric input negates the
/// output: numbers become `-|v|`, anything else is prefixed with `-`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stylefn::{Resolver, Scale};
///
/// let scale = Scale::list([0, 4, 8, 16]);
/// let resolver = Resolver::new(&scale);
///
/// assert_eq!(resolver.resolve(&json!(2)), json!(8));
/// assert_eq!(resolver.resolve(&json!(-2)), json!(-8));
/// assert_eq!(resolver.resolve(&json!(7)), json!(7));
/// assert_eq!(resolver.resolve(&json!("auto")), json!("auto"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    scale: Option<&'a Scale>,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over `scale`.
    pub fn new(scale: &'a Scale) -> Self {
        Self { scale: Some(scale) }
    }

    /// Creates a resolver without a scale: identity plus sign handling.
    pub fn identity() -> Self {
        Self { scale: None }
    }

    /// Resolves a raw value to a concrete one.
    pub fn resolve(&self, raw: &Value) -> Value {
        let negative = matches!(raw, Value::Number(n) if n.as_f64().is_some_and(|f| f < 0.0));
        let path = match raw {
            Value::Array(items) => items.iter().map(PathSegment::from_value).collect(),
            Value::String(s) => PathSegment::parse_dotted(s),
            Value::Number(n) => vec![PathSegment::from_number(&magnitude(n))],
            _ => Vec::new(),
        };

        let value = match self.scale.and_then(|scale| scale.lookup(&path)) {
            Some(found) => found.clone(),
            None => {
                log::trace!("no scale entry for {}, using it verbatim", raw);
                raw.clone()
            }
        };

        if negative {
            negate(value)
        } else {
            value
        }
    }
}

impl Default for Resolver<'_> {
    fn default() -> Self {
        Self::identity()
    }
}

fn negate(value: Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(negative_magnitude(&n)),
        Value::String(s) => Value::String(format!("-{}", s)),
        other => Value::String(format!("-{}", other)),
    }
}
