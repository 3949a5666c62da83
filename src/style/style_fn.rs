//! Style function configuration and the style function itself.

use std::sync::Arc;

use serde_json::{Map, Value};

use super::builder::{create_style, OutputKeys};
use super::error::ConfigError;
use super::merge::merge_into;
use super::resolver::Resolver;
use super::responsive::{create_responsive_styles, DEFAULT_BREAKPOINTS};
use super::Style;
use crate::attrs::Attrs;
use crate::theme::{Scale, Theme};
use crate::util::{identity, Transform};

/// The abstract prop name(s) a style function reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertySpec {
    Single(String),
    Multiple(Vec<String>),
}

/// The output keys paired with a [`PropertySpec`], in the same shape.
///
/// For `Multiple` props, entry `i` holds the output keys of prop `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputKeySpec {
    Single(OutputKeys),
    Multiple(Vec<OutputKeys>),
}

/// Immutable description of a style function.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use stylefn::{add_px, Attrs, Scale, StyleConfig};
///
/// let font_size = StyleConfig::new("fontSize")
///     .with_theme_key("fontSizes")
///     .with_transform(add_px)
///     .with_scale(Scale::list([12, 14, 16, 20]))
///     .build();
///
/// let style = font_size.apply(&Attrs::new().set("fontSize", 2), None).unwrap();
/// assert_eq!(Value::Object(style), json!({ "fontSize": "16px" }));
/// ```
#[derive(Debug, Clone)]
pub struct StyleConfig {
    props: PropertySpec,
    output: Option<OutputKeySpec>,
    theme_key: Option<String>,
    transform: Transform,
    scale: Scale,
}

impl StyleConfig {
    /// Configures a style function for one prop.
    pub fn new(prop: impl Into<String>) -> Self {
        Self::from_spec(PropertySpec::Single(prop.into()))
    }

    /// Configures a style function for several props at once.
    pub fn multiple<I, S>(props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_spec(PropertySpec::Multiple(
            props.into_iter().map(Into::into).collect(),
        ))
    }

    fn from_spec(props: PropertySpec) -> Self {
        Self {
            props,
            output: None,
            theme_key: None,
            transform: identity,
            scale: Scale::new(),
        }
    }

    /// Sets the output key(s) of a single-prop config. Defaults to the prop name.
    pub fn with_css_property(mut self, keys: impl Into<OutputKeys>) -> Self {
        self.output = Some(OutputKeySpec::Single(keys.into()));
        self
    }

    /// Sets the position-aligned output keys of a multi-prop config. Defaults
    /// to the prop names.
    pub fn with_css_properties<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<OutputKeys>,
    {
        self.output = Some(OutputKeySpec::Multiple(
            keys.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Sets the theme key whose scale values are resolved against.
    pub fn with_theme_key(mut self, key: impl Into<String>) -> Self {
        self.theme_key = Some(key.into());
        self
    }

    /// Sets the transform applied after scale resolution.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the scale used when the theme has none under the theme key.
    pub fn with_scale(mut self, scale: impl Into<Scale>) -> Self {
        self.scale = scale.into();
        self
    }

    pub fn props(&self) -> &PropertySpec {
        &self.props
    }

    pub fn output(&self) -> Option<&OutputKeySpec> {
        self.output.as_ref()
    }

    pub fn theme_key(&self) -> Option<&str> {
        self.theme_key.as_deref()
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Returns the abstract prop names in configuration order.
    pub fn prop_names(&self) -> Vec<&str> {
        match &self.props {
            PropertySpec::Single(name) => vec![name.as_str()],
            PropertySpec::Multiple(names) => names.iter().map(String::as_str).collect(),
        }
    }

    /// Checks that props and output keys line up.
    ///
    /// Building never requires a valid config; this is for catching mistakes
    /// early.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (&self.props, &self.output) {
            (PropertySpec::Multiple(names), _) if names.is_empty() => Err(ConfigError::NoProps),
            (PropertySpec::Single(prop), Some(OutputKeySpec::Multiple(_))) => {
                Err(ConfigError::ShapeMismatch { prop: prop.clone() })
            }
            (PropertySpec::Single(prop), Some(OutputKeySpec::Single(keys))) => {
                check_not_empty(prop, keys)
            }
            (PropertySpec::Multiple(names), Some(OutputKeySpec::Single(keys))) => {
                if names.len() != 1 {
                    return Err(ConfigError::LengthMismatch {
                        props: names.len(),
                        keys: 1,
                    });
                }
                check_not_empty(&names[0], keys)
            }
            (PropertySpec::Multiple(names), Some(OutputKeySpec::Multiple(list))) => {
                if names.len() != list.len() {
                    return Err(ConfigError::LengthMismatch {
                        props: names.len(),
                        keys: list.len(),
                    });
                }
                names
                    .iter()
                    .zip(list)
                    .try_for_each(|(prop, keys)| check_not_empty(prop, keys))
            }
            (_, None) => Ok(()),
        }
    }

    /// Builds the style function.
    pub fn build(self) -> StyleFn {
        StyleFn::new(self)
    }

    fn bindings(&self) -> Vec<Binding> {
        match &self.props {
            PropertySpec::Single(name) => {
                let keys = match &self.output {
                    None => OutputKeys::One(name.clone()),
                    Some(OutputKeySpec::Single(keys)) => keys.clone(),
                    Some(OutputKeySpec::Multiple(list)) => OutputKeys::Many(
                        list.iter()
                            .flat_map(|keys| keys.iter().map(str::to_string))
                            .collect(),
                    ),
                };
                vec![Binding {
                    prop: name.clone(),
                    keys: Some(keys),
                }]
            }
            PropertySpec::Multiple(names) => names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let keys = match &self.output {
                        None => Some(OutputKeys::One(name.clone())),
                        Some(OutputKeySpec::Single(keys)) => (i == 0).then(|| keys.clone()),
                        Some(OutputKeySpec::Multiple(list)) => list.get(i).cloned(),
                    };
                    Binding {
                        prop: name.clone(),
                        keys,
                    }
                })
                .collect(),
        }
    }
}

fn check_not_empty(prop: &str, keys: &OutputKeys) -> Result<(), ConfigError> {
    if keys.is_empty() {
        Err(ConfigError::EmptyOutputKeys {
            prop: prop.to_string(),
        })
    } else {
        Ok(())
    }
}

/// A prop paired with its output keys. `None` marks a prop with no aligned
/// output key.
#[derive(Debug, Clone)]
struct Binding {
    prop: String,
    keys: Option<OutputKeys>,
}

#[derive(Debug)]
struct Inner {
    config: StyleConfig,
    bindings: Vec<Binding>,
}

/// A reusable style function: attributes (plus an optional theme) in, style
/// object out.
///
/// Cloning is cheap and clones share their configuration. A style function
/// holds no mutable state, so it can be called from any number of threads.
///
/// # Single and multiple props
///
/// A single-prop function returns `None` when the prop (and its default) is
/// absent. A multi-prop function walks the props present in the attributes,
/// ignores names it does not know, and merges the per-prop results; it returns
/// an empty style rather than `None` when nothing matches.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use stylefn::{get_border, Attrs, StyleConfig};
///
/// let borders = StyleConfig::multiple(["border", "borderTop", "borderBottom"])
///     .with_theme_key("borders")
///     .with_transform(get_border)
///     .build();
///
/// let style = borders
///     .apply(&Attrs::new().set("borderTop", 1).set("borderBottom", 2), None)
///     .unwrap();
/// assert_eq!(
///     Value::Object(style),
///     json!({ "borderTop": "1px solid", "borderBottom": "2px solid" })
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StyleFn {
    inner: Arc<Inner>,
    defaults: Map<String, Value>,
}

/// Builds a style function from its configuration.
pub fn create_style_fn(config: StyleConfig) -> StyleFn {
    StyleFn::new(config)
}

impl StyleFn {
    /// Builds a style function. Malformed configurations are logged, not
    /// rejected.
    pub fn new(config: StyleConfig) -> Self {
        if let Err(err) = config.validate() {
            log::warn!(
                "style function for {:?} is misconfigured: {}",
                config.prop_names(),
                err
            );
        }
        let bindings = config.bindings();
        Self {
            inner: Arc::new(Inner { config, bindings }),
            defaults: Map::new(),
        }
    }

    /// Returns a style function with the same configuration and new default
    /// prop values. Defaults fill in props the attributes leave out.
    pub fn with_defaults<I, K, V>(&self, defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            inner: Arc::clone(&self.inner),
            defaults: defaults
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn defaults(&self) -> &Map<String, Value> {
        &self.defaults
    }

    pub fn config(&self) -> &StyleConfig {
        &self.inner.config
    }

    /// Returns the abstract prop names this function reads.
    pub fn props(&self) -> Vec<&str> {
        self.inner.config.prop_names()
    }

    /// Returns `true` if both functions were derived from the same build.
    pub fn shares_config(&self, other: &StyleFn) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Resolves the attributes into a style object.
    ///
    /// The theme embedded in `attrs` wins over `theme`. Scale values come from
    /// the theme's scale under the configured theme key, else from the
    /// configured default scale. Breakpoints come from the theme, else
    /// [`DEFAULT_BREAKPOINTS`].
    pub fn apply(&self, attrs: &Attrs, theme: Option<&Theme>) -> Option<Style> {
        let theme = attrs.theme().or(theme);
        let config = &self.inner.config;
        let scale = config
            .theme_key
            .as_deref()
            .and_then(|key| theme?.scale(key))
            .unwrap_or(&config.scale);
        let breakpoints: Vec<&str> = match theme.and_then(Theme::breakpoints) {
            Some(list) => list.iter().map(String::as_str).collect(),
            None => DEFAULT_BREAKPOINTS.to_vec(),
        };
        let context = Context {
            resolver: Resolver::new(scale),
            breakpoints: &breakpoints,
            transform: config.transform,
        };

        match &config.props {
            PropertySpec::Single(name) => {
                let value = attrs.value(name).or_else(|| self.default_value(name))?;
                let binding = self.inner.bindings.first()?;
                Some(context.render(binding, value))
            }
            PropertySpec::Multiple(_) => {
                let mut styles = self.entries(attrs).into_iter().filter_map(|(key, value)| {
                    let binding = self.inner.bindings.iter().find(|b| b.prop == key)?;
                    Some(context.render(binding, value))
                });
                let first = styles.next().unwrap_or_default();
                Some(styles.fold(first, |mut acc, next| {
                    merge_into(&mut acc, next);
                    acc
                }))
            }
        }
    }

    fn default_value(&self, name: &str) -> Option<&Value> {
        self.defaults.get(name).filter(|v| !v.is_null())
    }

    /// Present props in attribute order, `null`s replaced by defaults, then
    /// defaults for props the attributes do not mention.
    fn entries<'a>(&'a self, attrs: &'a Attrs) -> Vec<(&'a str, &'a Value)> {
        let mut entries: Vec<(&str, &Value)> = attrs
            .props()
            .iter()
            .filter_map(|(key, value)| {
                let value = Some(value)
                    .filter(|v| !v.is_null())
                    .or_else(|| self.default_value(key))?;
                Some((key.as_str(), value))
            })
            .collect();
        entries.extend(
            self.defaults
                .iter()
                .filter(|(key, value)| !value.is_null() && !attrs.contains(key))
                .map(|(key, value)| (key.as_str(), value)),
        );
        entries
    }
}

/// Per-call resolution state.
struct Context<'a> {
    resolver: Resolver<'a>,
    breakpoints: &'a [&'a str],
    transform: Transform,
}

impl Context<'_> {
    fn render(&self, binding: &Binding, value: &Value) -> Style {
        let Some(keys) = &binding.keys else {
            return Style::new();
        };
        match value {
            Value::Array(values) => create_responsive_styles(values, self.breakpoints, |v| {
                create_style(keys, v, self.transform, &self.resolver)
            }),
            _ => create_style(keys, value, self.transform, &self.resolver),
        }
    }
}
