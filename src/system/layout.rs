use once_cell::sync::Lazy;
use serde_json::Value;

use super::plain;
use crate::attrs::Attrs;
use crate::style::{merge_optional, Style, StyleConfig, StyleFn, StyleProducer};
use crate::theme::Theme;
use crate::util::{add_px, get_width, is_falsy, percent};

pub static DISPLAY: Lazy<StyleFn> = Lazy::new(|| plain("display"));

/// `width` through [`get_width`], without the `fit`/`fill` rewrite.
pub static WIDTH_SIMPLE: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::new("width")
        .with_transform(get_width)
        .build()
});

/// Width with `fit` and `fill` keywords rewritten to flex declarations.
pub static WIDTH: Width = Width;

pub static MAX_WIDTH: Lazy<StyleFn> = Lazy::new(|| sized("maxWidth", "maxWidths"));
pub static MIN_WIDTH: Lazy<StyleFn> = Lazy::new(|| sized("minWidth", "minWidths"));
pub static HEIGHT: Lazy<StyleFn> = Lazy::new(|| sized("height", "heights"));
pub static MAX_HEIGHT: Lazy<StyleFn> = Lazy::new(|| sized("maxHeight", "maxHeights"));
pub static MIN_HEIGHT: Lazy<StyleFn> = Lazy::new(|| sized("minHeight", "minHeights"));

/// `size` written to both `width` and `height`.
pub static SIZE: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::new("size")
        .with_css_property(["width", "height"])
        .with_transform(add_px)
        .build()
});

pub static SIZE_WIDTH: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::new("size")
        .with_css_property("width")
        .with_transform(add_px)
        .build()
});

pub static SIZE_HEIGHT: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::new("size")
        .with_css_property("height")
        .with_transform(add_px)
        .build()
});

/// `ratio` as a percentage `paddingBottom`.
pub static RATIO_PADDING: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::new("ratio")
        .with_css_property("paddingBottom")
        .with_transform(percent)
        .build()
});

/// Aspect-ratio box: [`RATIO_PADDING`] plus `height: 0`.
pub static RATIO: Ratio = Ratio;

pub static VERTICAL_ALIGN: Lazy<StyleFn> = Lazy::new(|| plain("verticalAlign"));

fn sized(prop: &str, theme_key: &str) -> StyleFn {
    StyleConfig::new(prop)
        .with_theme_key(theme_key)
        .with_transform(add_px)
        .build()
}

/// Width producer behind [`WIDTH`].
///
/// `fill` becomes `flex: 1 1 0%` with `flexBasis: 0%`, `fit` becomes
/// `flexBasis: auto`, and in both cases the `width` key itself is dropped.
/// The rewrite runs inside media-query blocks too, and only when the value
/// (or an entry of a responsive list) is one of the keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct Width;

impl Width {
    pub fn apply(&self, attrs: &Attrs, theme: Option<&Theme>) -> Option<Style> {
        let style = WIDTH_SIMPLE.apply(attrs, theme)?;
        let flexible = match attrs.value("width") {
            Some(Value::Array(items)) => items.iter().any(is_flex_keyword),
            Some(value) => is_flex_keyword(value),
            None => false,
        };
        Some(if flexible { rewrite_flex(style) } else { style })
    }
}

impl StyleProducer for Width {
    fn produce(&self, attrs: &Attrs, theme: Option<&Theme>) -> Option<Style> {
        self.apply(attrs, theme)
    }

    fn props(&self) -> Vec<String> {
        vec!["width".to_string()]
    }
}

fn is_flex_keyword(value: &Value) -> bool {
    matches!(value.as_str(), Some("fit") | Some("fill"))
}

fn rewrite_flex(style: Style) -> Style {
    let mut out = Style::new();
    for (key, value) in style {
        match value {
            Value::String(s) if s == "fill" => {
                out.insert("flex".to_string(), Value::from("1 1 0%"));
                out.insert("flexBasis".to_string(), Value::from("0%"));
            }
            Value::String(s) if s == "fit" => {
                out.insert("flexBasis".to_string(), Value::from("auto"));
            }
            Value::Object(nested) => {
                out.insert(key, Value::Object(rewrite_flex(nested)));
            }
            other => {
                out.insert(key, other);
            }
        }
    }
    out
}

/// Ratio producer behind [`RATIO`]. Produces nothing for falsy ratios.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ratio;

impl Ratio {
    pub fn apply(&self, attrs: &Attrs, theme: Option<&Theme>) -> Option<Style> {
        let ratio = attrs.value("ratio")?;
        if is_falsy(ratio) {
            return None;
        }
        let mut base = Style::new();
        base.insert("height".to_string(), Value::from(0));
        let padding = RATIO_PADDING.apply(attrs, theme);
        Some(merge_optional(Some(&base), padding.as_ref()))
    }
}

impl StyleProducer for Ratio {
    fn produce(&self, attrs: &Attrs, theme: Option<&Theme>) -> Option<Style> {
        self.apply(attrs, theme)
    }

    fn props(&self) -> Vec<String> {
        vec!["ratio".to_string()]
    }
}
