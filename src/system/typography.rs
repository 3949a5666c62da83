use once_cell::sync::Lazy;

use super::plain;
use crate::style::{StyleConfig, StyleFn};
use crate::theme::Scale;
use crate::util::add_px;

/// Font size from `fontSizes`, with a built-in type scale.
pub static FONT_SIZE: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::new("fontSize")
        .with_theme_key("fontSizes")
        .with_transform(add_px)
        .with_scale(Scale::list([12, 14, 16, 20, 24, 32, 48, 64, 72]))
        .build()
});

pub static FONT_FAMILY: Lazy<StyleFn> =
    Lazy::new(|| StyleConfig::new("fontFamily").with_theme_key("fonts").build());

pub static FONT_WEIGHT: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::new("fontWeight")
        .with_theme_key("fontWeights")
        .build()
});

pub static LETTER_SPACING: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::new("letterSpacing")
        .with_theme_key("letterSpacings")
        .with_transform(add_px)
        .build()
});

pub static LINE_HEIGHT: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::new("lineHeight")
        .with_theme_key("lineHeights")
        .build()
});

pub static FONT_STYLE: Lazy<StyleFn> = Lazy::new(|| plain("fontStyle"));

pub static TEXT_ALIGN: Lazy<StyleFn> = Lazy::new(|| plain("textAlign"));
