//! The attribute bag passed to style functions.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::theme::{Theme, ThemeError};

/// Error returned when an attribute bag cannot be built from JSON.
#[derive(Debug, Error)]
pub enum AttrsError {
    /// Attributes must be a JSON object.
    #[error("attributes must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    /// The embedded `theme` entry is not a valid theme.
    #[error("invalid embedded theme: {0}")]
    Theme(#[from] ThemeError),
}

/// Style props keyed by abstract property name, plus an optional theme.
///
/// An embedded theme takes precedence over a theme passed next to the
/// attributes when a style function is applied. `null` values count as absent.
///
/// The `theme` key is never an ordinary prop: every constructor and setter
/// routes it to the embedded theme. Only [`Attrs::from_value`] reports a
/// malformed theme; the infallible paths log it and drop it.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stylefn::Attrs;
///
/// let attrs = Attrs::new().set("margin", 1).set("color", "tomato");
/// assert_eq!(attrs.get("margin"), Some(&json!(1)));
///
/// let attrs = Attrs::from_value(json!({
///     "padding": [0, 2],
///     "theme": { "space": [0, 6, 12] }
/// }))
/// .unwrap();
/// assert!(attrs.theme().is_some());
/// assert!(attrs.get("theme").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    props: Map<String, Value>,
    theme: Option<Theme>,
}

impl Attrs {
    /// Creates an empty attribute bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a prop, returning the updated bag for chaining.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a prop in place. Setting `theme` replaces the embedded theme.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        if name == THEME_KEY {
            self.theme = parse_theme_lossy(value);
        } else {
            self.props.insert(name, value);
        }
    }

    /// Embeds a theme, returning the updated bag for chaining.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Returns the raw value of a prop, `null` included.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }

    /// Returns the value of a prop if it is present and not `null`.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.props.get(name).filter(|v| !v.is_null())
    }

    /// Returns the embedded theme.
    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    /// Returns the props in insertion order.
    pub fn props(&self) -> &Map<String, Value> {
        &self.props
    }

    /// Iterates prop names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    /// Returns `true` when the bag holds no props. The embedded theme is not a
    /// prop and does not count.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Builds an attribute bag from a JSON object.
    ///
    /// The `theme` key, when present and not `null`, is parsed as a [`Theme`]
    /// and removed from the props.
    pub fn from_value(value: Value) -> Result<Self, AttrsError> {
        let mut props = match value {
            Value::Object(map) => map,
            other => {
                return Err(AttrsError::NotAnObject {
                    found: kind_of(&other),
                })
            }
        };
        let theme = match props.remove(THEME_KEY) {
            Some(Value::Null) | None => None,
            Some(theme) => Some(Theme::from_value(theme)?),
        };
        Ok(Self { props, theme })
    }

    fn from_props_lossy(mut props: Map<String, Value>) -> Self {
        let theme = props.remove(THEME_KEY).and_then(parse_theme_lossy);
        Self { props, theme }
    }
}

const THEME_KEY: &str = "theme";

fn parse_theme_lossy(value: Value) -> Option<Theme> {
    if value.is_null() {
        return None;
    }
    match Theme::from_value(value) {
        Ok(theme) => Some(theme),
        Err(err) => {
            log::warn!("ignoring embedded theme: {}", err);
            None
        }
    }
}

impl TryFrom<Value> for Attrs {
    type Error = AttrsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Map<String, Value>> for Attrs {
    fn from(props: Map<String, Value>) -> Self {
        Self::from_props_lossy(props)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_props_lossy(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
