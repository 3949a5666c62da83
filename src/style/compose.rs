//! Combining several style producers into one.

use super::merge::merge_into;
use super::style_fn::StyleFn;
use super::Style;
use crate::attrs::Attrs;
use crate::theme::Theme;

/// Anything that turns attributes into an optional style object.
///
/// Implemented by [`StyleFn`], [`VariantFn`](super::VariantFn), [`Composed`],
/// and plain functions or closures with the matching signature.
pub trait StyleProducer: Send + Sync {
    /// Produces a style, or `None` when the attributes say nothing to it.
    fn produce(&self, attrs: &Attrs, theme: Option<&Theme>) -> Option<Style>;

    /// Abstract prop names this producer consumes.
    fn props(&self) -> Vec<String> {
        Vec::new()
    }
}

impl StyleProducer for StyleFn {
    fn produce(&self, attrs: &Attrs, theme: Option<&Theme>) -> Option<Style> {
        self.apply(attrs, theme)
    }

    fn props(&self) -> Vec<String> {
        StyleFn::props(self).into_iter().map(str::to_string).collect()
    }
}

impl<F> StyleProducer for F
where
    F: Fn(&Attrs, Option<&Theme>) -> Option<Style> + Send + Sync,
{
    fn produce(&self, attrs: &Attrs, theme: Option<&Theme>) -> Option<Style> {
        self(attrs, theme)
    }
}

/// Several producers applied to the same attributes, merged in order.
///
/// Producers returning `None` are skipped; later results merge over earlier
/// ones with [`merge_styles`](super::merge_styles) semantics.
///
/// ```rust
/// use serde_json::{json, Value};
/// use stylefn::{compose, get_width, Attrs, StyleConfig};
///
/// let display = StyleConfig::new("display").build();
/// let width = StyleConfig::new("width").with_transform(get_width).build();
/// let combo = compose().with(display).with(width);
///
/// let attrs = Attrs::new().set("display", "inline-block").set("width", 0.5);
/// assert_eq!(
///     Value::Object(combo.apply(&attrs, None)),
///     json!({ "display": "inline-block", "width": "50%" })
/// );
/// ```
#[derive(Default)]
pub struct Composed {
    producers: Vec<Box<dyn StyleProducer>>,
}

/// Starts an empty composition.
pub fn compose() -> Composed {
    Composed::new()
}

impl Composed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a producer, returning the updated composition for chaining.
    pub fn with(mut self, producer: impl StyleProducer + 'static) -> Self {
        self.producers.push(Box::new(producer));
        self
    }

    /// Appends an already boxed producer.
    pub fn push(&mut self, producer: Box<dyn StyleProducer>) {
        self.producers.push(producer);
    }

    pub fn len(&self) -> usize {
        self.producers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    /// Runs every producer and merges the results. Always returns a style,
    /// empty when nothing produced anything.
    pub fn apply(&self, attrs: &Attrs, theme: Option<&Theme>) -> Style {
        self.apply_onto(Style::new(), attrs, theme)
    }

    /// Like [`apply`](Self::apply), merging on top of `base`.
    pub fn apply_onto(&self, base: Style, attrs: &Attrs, theme: Option<&Theme>) -> Style {
        self.producers
            .iter()
            .filter_map(|producer| producer.produce(attrs, theme))
            .fold(base, |mut acc, style| {
                merge_into(&mut acc, style);
                acc
            })
    }
}

impl StyleProducer for Composed {
    fn produce(&self, attrs: &Attrs, theme: Option<&Theme>) -> Option<Style> {
        Some(self.apply(attrs, theme))
    }

    fn props(&self) -> Vec<String> {
        let mut props: Vec<String> = Vec::new();
        for name in self.producers.iter().flat_map(|p| p.props()) {
            if !props.contains(&name) {
                props.push(name);
            }
        }
        props
    }
}

impl FromIterator<Box<dyn StyleProducer>> for Composed {
    fn from_iter<I: IntoIterator<Item = Box<dyn StyleProducer>>>(iter: I) -> Self {
        Self {
            producers: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for Composed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composed")
            .field("producers", &self.producers.len())
            .field("props", &self.props())
            .finish()
    }
}
