//! Value transforms and small predicates shared by style functions.
//!
//! Transforms are plain `fn(Value) -> Value` so they can live inside
//! immutable, shareable style configurations. Every transform passes values it
//! does not understand through unchanged.

use serde_json::{Number, Value};

/// A value transform applied after scale resolution.
pub type Transform = fn(Value) -> Value;

/// Returns the value unchanged.
pub fn identity(value: Value) -> Value {
    value
}

/// Returns `true` for numeric values.
pub fn is_num(value: &Value) -> bool {
    value.is_number()
}

/// Returns `true` for anything other than `null`.
///
/// `0`, `""`, `false`, and empty collections are all present values.
pub fn is_present(value: &Value) -> bool {
    !value.is_null()
}

/// Appends `px` to numbers.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stylefn::add_px;
///
/// assert_eq!(add_px(json!(1)), json!("1px"));
/// assert_eq!(add_px(json!("2em")), json!("2em"));
/// ```
pub fn add_px(value: Value) -> Value {
    match &value {
        Value::Number(n) => Value::String(format!("{}px", format_number(n))),
        _ => value,
    }
}

/// Turns positive numbers into a solid border shorthand (`1` → `"1px solid"`).
pub fn get_border(value: Value) -> Value {
    match &value {
        Value::Number(n) if as_f64(n) > 0.0 => {
            Value::String(format!("{}px solid", format_number(n)))
        }
        _ => value,
    }
}

/// Width transform: fractions up to `1` become percentages, larger numbers
/// become pixels, and everything else passes through.
///
/// ```rust
/// use serde_json::json;
/// use stylefn::get_width;
///
/// assert_eq!(get_width(json!(0.5)), json!("50%"));
/// assert_eq!(get_width(json!(1)), json!("100%"));
/// assert_eq!(get_width(json!(256)), json!("256px"));
/// assert_eq!(get_width(json!("auto")), json!("auto"));
/// ```
pub fn get_width(value: Value) -> Value {
    match &value {
        Value::Number(n) if as_f64(n) <= 1.0 => percent(value),
        _ => add_px(value),
    }
}

/// Scales numbers by 100 and appends `%`. Numeric strings (`"0.5"`) are
/// scaled too; other values pass through.
pub fn percent(value: Value) -> Value {
    let scaled = match &value {
        Value::Number(n) => Some(as_f64(n)),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    };
    match scaled {
        Some(f) => Value::String(format!("{}%", format_f64(f * 100.0))),
        None => value,
    }
}

/// Formats a number the way it reads in a style declaration.
///
/// Integers print as integers, integral floats drop their fraction, other
/// floats use the shortest representation that round-trips.
pub fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        format_f64(as_f64(n))
    }
}

pub(crate) fn format_f64(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

pub(crate) fn as_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

/// Returns the number with its sign flipped to negative (`-|n|`), keeping
/// integers as integers.
pub(crate) fn negative_magnitude(n: &Number) -> Number {
    if let Some(neg) = n.as_i64().and_then(i64::checked_abs).map(|abs| -abs) {
        return Number::from(neg);
    }
    if let Some(neg) = n.as_u64().and_then(|u| i64::try_from(u).ok()).map(|i| -i) {
        return Number::from(neg);
    }
    Number::from_f64(-as_f64(n).abs()).unwrap_or_else(|| n.clone())
}

/// Returns `|n|`, keeping integers as integers.
pub(crate) fn magnitude(n: &Number) -> Number {
    if n.is_u64() {
        return n.clone();
    }
    if let Some(abs) = n.as_i64().and_then(i64::checked_abs) {
        return Number::from(abs);
    }
    Number::from_f64(as_f64(n).abs()).unwrap_or_else(|| n.clone())
}

/// Returns `true` for values a loose truthiness check would reject.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => as_f64(n) == 0.0 || as_f64(n).is_nan(),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
