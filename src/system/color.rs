use once_cell::sync::Lazy;

use crate::style::{StyleConfig, StyleFn};

/// Text color from the `colors` scale.
pub static TEXT_COLOR: Lazy<StyleFn> =
    Lazy::new(|| StyleConfig::new("color").with_theme_key("colors").build());

/// Background color from the `colors` scale.
pub static BG_COLOR: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::new("backgroundColor")
        .with_theme_key("colors")
        .build()
});

/// Text and background color together.
pub static COLOR: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::multiple(["color", "backgroundColor"])
        .with_theme_key("colors")
        .build()
});
