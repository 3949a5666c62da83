//! Variant lookups: whole style objects picked from the theme by name.

use super::compose::StyleProducer;
use super::Style;
use crate::attrs::Attrs;
use crate::theme::{PathSegment, Theme};

/// Looks up `theme[theme_key][attrs[prop]]` and returns it as a style.
///
/// Returns `None` when there is no theme, the prop is absent, the entry is
/// missing, or the entry is not an object.
///
/// ```rust
/// use serde_json::{json, Value};
/// use stylefn::{Attrs, Theme, VariantFn};
///
/// let theme = Theme::from_value(json!({
///     "buttons": { "primary": { "color": "white", "backgroundColor": "tomato" } }
/// }))
/// .unwrap();
///
/// let button = VariantFn::new("buttons");
/// let style = button.apply(&Attrs::new().set("variant", "primary"), Some(&theme));
/// assert_eq!(
///     style.map(Value::Object),
///     Some(json!({ "color": "white", "backgroundColor": "tomato" }))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantFn {
    prop: String,
    theme_key: String,
}

impl VariantFn {
    /// Creates a variant lookup reading the `variant` prop.
    pub fn new(theme_key: impl Into<String>) -> Self {
        Self {
            prop: "variant".to_string(),
            theme_key: theme_key.into(),
        }
    }

    /// Reads the variant name from `prop` instead of `variant`.
    pub fn with_prop(mut self, prop: impl Into<String>) -> Self {
        self.prop = prop.into();
        self
    }

    pub fn prop(&self) -> &str {
        &self.prop
    }

    pub fn theme_key(&self) -> &str {
        &self.theme_key
    }

    pub fn apply(&self, attrs: &Attrs, theme: Option<&Theme>) -> Option<Style> {
        let theme = attrs.theme().or(theme)?;
        let name = attrs.value(&self.prop)?;
        let entry = theme
            .scale(&self.theme_key)?
            .lookup(&[PathSegment::from_value(name)])?;
        entry.as_object().cloned()
    }
}

impl StyleProducer for VariantFn {
    fn produce(&self, attrs: &Attrs, theme: Option<&Theme>) -> Option<Style> {
        self.apply(attrs, theme)
    }

    fn props(&self) -> Vec<String> {
        vec![self.prop.clone()]
    }
}
