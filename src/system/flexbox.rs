use once_cell::sync::Lazy;

use super::plain;
use crate::style::{StyleConfig, StyleFn};
use crate::util::get_width;

pub static ALIGN_CONTENT: Lazy<StyleFn> = Lazy::new(|| plain("alignContent"));
pub static ALIGN_ITEMS: Lazy<StyleFn> = Lazy::new(|| plain("alignItems"));
pub static ALIGN_SELF: Lazy<StyleFn> = Lazy::new(|| plain("alignSelf"));
pub static JUSTIFY_CONTENT: Lazy<StyleFn> = Lazy::new(|| plain("justifyContent"));
pub static JUSTIFY_ITEMS: Lazy<StyleFn> = Lazy::new(|| plain("justifyItems"));
pub static JUSTIFY_SELF: Lazy<StyleFn> = Lazy::new(|| plain("justifySelf"));
pub static FLEX: Lazy<StyleFn> = Lazy::new(|| plain("flex"));
pub static FLEX_DIRECTION: Lazy<StyleFn> = Lazy::new(|| plain("flexDirection"));
pub static FLEX_WRAP: Lazy<StyleFn> = Lazy::new(|| plain("flexWrap"));
pub static ORDER: Lazy<StyleFn> = Lazy::new(|| plain("order"));

/// `flexBasis` with the same fraction/pixel handling as width.
pub static FLEX_BASIS: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::new("flexBasis")
        .with_transform(get_width)
        .build()
});

/// Display plus every flexbox prop, values passed through verbatim.
pub static FLEXBOX: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::multiple([
        "display",
        "alignContent",
        "alignItems",
        "alignSelf",
        "justifyContent",
        "justifyItems",
        "justifySelf",
        "flex",
        "flexBasis",
        "flexDirection",
        "flexWrap",
        "order",
    ])
    .build()
});
