use once_cell::sync::Lazy;

use super::plain;
use crate::style::{StyleConfig, StyleFn};

pub static BACKGROUND: Lazy<StyleFn> = Lazy::new(|| plain("background"));
pub static BACKGROUND_IMAGE: Lazy<StyleFn> = Lazy::new(|| plain("backgroundImage"));
pub static BACKGROUND_POSITION: Lazy<StyleFn> = Lazy::new(|| plain("backgroundPosition"));
pub static BACKGROUND_REPEAT: Lazy<StyleFn> = Lazy::new(|| plain("backgroundRepeat"));
pub static BACKGROUND_SIZE: Lazy<StyleFn> = Lazy::new(|| plain("backgroundSize"));

/// Every background prop at once.
pub static BACKGROUNDS: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::multiple([
        "background",
        "backgroundImage",
        "backgroundPosition",
        "backgroundRepeat",
        "backgroundSize",
    ])
    .build()
});
