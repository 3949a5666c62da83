//! Responsive (array-valued) props.

use serde_json::Value;

use super::Style;

/// Breakpoints used when the theme does not set any.
pub const DEFAULT_BREAKPOINTS: [&str; 3] = ["40em", "52em", "64em"];

/// Returns the media query key for a breakpoint.
pub fn media_query(breakpoint: &str) -> String {
    format!("@media screen and (min-width: {})", breakpoint)
}

/// Expands a responsive value into a style object.
///
/// Index 0 is the base style and lands at the top level. Index `i` lands under
/// the media query for `breakpoints[i - 1]`. `null` slots are skipped without
/// shifting later slots, and values beyond the last breakpoint are dropped.
///
/// ```rust
/// use serde_json::{json, Value};
/// use stylefn::{add_px, create_responsive_styles, create_style, Resolver, DEFAULT_BREAKPOINTS};
///
/// let resolver = Resolver::identity();
/// let style = create_responsive_styles(&[json!(13), Value::Null, json!(21)], &DEFAULT_BREAKPOINTS, |v| {
///     create_style(&"fontSize".into(), v, add_px, &resolver)
/// });
/// assert_eq!(
///     Value::Object(style),
///     json!({
///         "fontSize": "13px",
///         "@media screen and (min-width: 52em)": { "fontSize": "21px" }
///     })
/// );
/// ```
pub fn create_responsive_styles<B, F>(values: &[Value], breakpoints: &[B], mut build: F) -> Style
where
    B: AsRef<str>,
    F: FnMut(&Value) -> Style,
{
    let mut result = Style::new();
    for (i, value) in values.iter().enumerate() {
        if value.is_null() {
            continue;
        }
        if i == 0 {
            result.extend(build(value));
            continue;
        }
        match breakpoints.get(i - 1) {
            Some(breakpoint) => {
                result.insert(media_query(breakpoint.as_ref()), Value::Object(build(value)));
            }
            None => break,
        }
    }
    result
}
