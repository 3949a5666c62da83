use once_cell::sync::Lazy;

use crate::style::{OutputKeys, StyleConfig, StyleFn};
use crate::util::add_px;

/// Margin and padding, including the `mx`/`my`/`px`/`py` axis shorthands.
///
/// Theme key `space`; numbers that miss the scale become pixels.
pub static SPACE: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::multiple([
        "margin",
        "marginTop",
        "marginRight",
        "marginBottom",
        "marginLeft",
        "mx",
        "my",
        "padding",
        "paddingTop",
        "paddingRight",
        "paddingBottom",
        "paddingLeft",
        "px",
        "py",
    ])
    .with_css_properties([
        OutputKeys::one("margin"),
        OutputKeys::one("marginTop"),
        OutputKeys::one("marginRight"),
        OutputKeys::one("marginBottom"),
        OutputKeys::one("marginLeft"),
        OutputKeys::many(["marginRight", "marginLeft"]),
        OutputKeys::many(["marginTop", "marginBottom"]),
        OutputKeys::one("padding"),
        OutputKeys::one("paddingTop"),
        OutputKeys::one("paddingRight"),
        OutputKeys::one("paddingBottom"),
        OutputKeys::one("paddingLeft"),
        OutputKeys::many(["paddingRight", "paddingLeft"]),
        OutputKeys::many(["paddingTop", "paddingBottom"]),
    ])
    .with_theme_key("space")
    .with_transform(add_px)
    .with_scale(crate::theme::Scale::list([0, 4, 8, 16, 32, 64, 128, 256, 512]))
    .build()
});
