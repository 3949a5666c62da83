use once_cell::sync::Lazy;

use super::plain;
use crate::style::{StyleConfig, StyleFn};
use crate::util::add_px;

pub static POSITION: Lazy<StyleFn> = Lazy::new(|| plain("position"));
pub static Z_INDEX: Lazy<StyleFn> = Lazy::new(|| plain("zIndex"));
pub static TOP: Lazy<StyleFn> = Lazy::new(|| offset("top"));
pub static RIGHT: Lazy<StyleFn> = Lazy::new(|| offset("right"));
pub static BOTTOM: Lazy<StyleFn> = Lazy::new(|| offset("bottom"));
pub static LEFT: Lazy<StyleFn> = Lazy::new(|| offset("left"));

/// The four offsets at once.
pub static DIRECTION: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::multiple(["top", "right", "bottom", "left"])
        .with_transform(add_px)
        .build()
});

fn offset(prop: &str) -> StyleFn {
    StyleConfig::new(prop).with_transform(add_px).build()
}
