use once_cell::sync::Lazy;

use super::plain;
use crate::style::{StyleConfig, StyleFn};
use crate::util::add_px;

pub static GRID_AREA: Lazy<StyleFn> = Lazy::new(|| plain("gridArea"));
pub static GRID_AUTO_COLUMNS: Lazy<StyleFn> = Lazy::new(|| plain("gridAutoColumns"));
pub static GRID_AUTO_FLOW: Lazy<StyleFn> = Lazy::new(|| plain("gridAutoFlow"));
pub static GRID_AUTO_ROWS: Lazy<StyleFn> = Lazy::new(|| plain("gridAutoRows"));
pub static GRID_COLUMN: Lazy<StyleFn> = Lazy::new(|| plain("gridColumn"));
pub static GRID_ROW: Lazy<StyleFn> = Lazy::new(|| plain("gridRow"));
pub static GRID_TEMPLATE_AREAS: Lazy<StyleFn> = Lazy::new(|| plain("gridTemplateAreas"));
pub static GRID_TEMPLATE_COLUMNS: Lazy<StyleFn> = Lazy::new(|| plain("gridTemplateColumns"));
pub static GRID_TEMPLATE_ROWS: Lazy<StyleFn> = Lazy::new(|| plain("gridTemplateRows"));

// Gaps share the space scale.
pub static GRID_GAP: Lazy<StyleFn> = Lazy::new(|| gap("gridGap"));
pub static GRID_COLUMN_GAP: Lazy<StyleFn> = Lazy::new(|| gap("gridColumnGap"));
pub static GRID_ROW_GAP: Lazy<StyleFn> = Lazy::new(|| gap("gridRowGap"));

fn gap(prop: &str) -> StyleFn {
    StyleConfig::new(prop)
        .with_theme_key("space")
        .with_transform(add_px)
        .build()
}
