use once_cell::sync::Lazy;

use super::*;
use crate::attrs::Attrs;
use crate::style::{merge_into, Style, StyleProducer};
use crate::theme::Theme;

static CATALOG: Lazy<Vec<&'static dyn StyleProducer>> = Lazy::new(|| {
    let producers: Vec<&'static dyn StyleProducer> = vec![
        &*SPACE,
        &WIDTH,
        &*FONT_SIZE,
        &*TEXT_COLOR,
        &*BG_COLOR,
        &*COLOR,
        &*FONT_FAMILY,
        &*TEXT_ALIGN,
        &*LINE_HEIGHT,
        &*FONT_WEIGHT,
        &*FONT_STYLE,
        &*LETTER_SPACING,
        &*DISPLAY,
        &*MAX_WIDTH,
        &*MIN_WIDTH,
        &*HEIGHT,
        &*MAX_HEIGHT,
        &*MIN_HEIGHT,
        &*SIZE_WIDTH,
        &*SIZE_HEIGHT,
        &*SIZE,
        &*RATIO_PADDING,
        &RATIO,
        &*VERTICAL_ALIGN,
        &*ALIGN_ITEMS,
        &*ALIGN_CONTENT,
        &*JUSTIFY_ITEMS,
        &*JUSTIFY_CONTENT,
        &*FLEX_WRAP,
        &*FLEX_BASIS,
        &*FLEX_DIRECTION,
        &*FLEX,
        &*JUSTIFY_SELF,
        &*ALIGN_SELF,
        &*ORDER,
        &*GRID_GAP,
        &*GRID_COLUMN_GAP,
        &*GRID_ROW_GAP,
        &*GRID_COLUMN,
        &*GRID_ROW,
        &*GRID_AUTO_FLOW,
        &*GRID_AUTO_COLUMNS,
        &*GRID_AUTO_ROWS,
        &*GRID_TEMPLATE_COLUMNS,
        &*GRID_TEMPLATE_ROWS,
        &*GRID_TEMPLATE_AREAS,
        &*GRID_AREA,
        &*BORDER,
        &*BORDER_TOP,
        &*BORDER_RIGHT,
        &*BORDER_BOTTOM,
        &*BORDER_LEFT,
        &*BORDERS,
        &*BORDER_COLOR,
        &*BORDER_RADIUS,
        &*BOX_SHADOW,
        &*OPACITY,
        &*OVERFLOW,
        &*BACKGROUND,
        &*BACKGROUND_IMAGE,
        &*BACKGROUND_POSITION,
        &*BACKGROUND_REPEAT,
        &*BACKGROUND_SIZE,
        &*POSITION,
        &*Z_INDEX,
        &*TOP,
        &*RIGHT,
        &*BOTTOM,
        &*LEFT,
        &*TEXT_STYLE,
        &*COLOR_STYLE,
        &*BUTTON_STYLE,
    ];
    producers
});

static BLACKLIST: Lazy<Vec<String>> = Lazy::new(|| {
    let mut names: Vec<String> = vec!["theme".to_string()];
    for name in CATALOG.iter().flat_map(|producer| producer.props()) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
});

/// Every catalog producer, in the order [`mixed`] applies them.
pub fn catalog() -> &'static [&'static dyn StyleProducer] {
    &CATALOG
}

/// Prop names some catalog producer consumes, plus `theme`. [`mixed`] does
/// not pass these through.
pub fn passthrough_blacklist() -> &'static [String] {
    &BLACKLIST
}

/// Applies the whole catalog and merges the results over the props no catalog
/// producer consumes.
///
/// Unconsumed props are copied verbatim, so raw style keys (`cursor`,
/// `transition`) survive next to the resolved ones. `null` props are dropped.
///
/// ```rust
/// use serde_json::{json, Value};
/// use stylefn::system::mixed;
/// use stylefn::Attrs;
///
/// let attrs = Attrs::new().set("cursor", "pointer").set("mx", 2).set("color", "red");
/// assert_eq!(
///     Value::Object(mixed(&attrs, None)),
///     json!({
///         "cursor": "pointer",
///         "marginRight": "8px",
///         "marginLeft": "8px",
///         "color": "red"
///     })
/// );
/// ```
pub fn mixed(attrs: &Attrs, theme: Option<&Theme>) -> Style {
    let blacklist = passthrough_blacklist();
    let base: Style = attrs
        .props()
        .iter()
        .filter(|(key, value)| !value.is_null() && !blacklist.iter().any(|b| b == *key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    CATALOG
        .iter()
        .filter_map(|producer| producer.produce(attrs, theme))
        .fold(base, |mut acc, style| {
            merge_into(&mut acc, style);
            acc
        })
}
