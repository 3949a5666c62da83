//! Theme-aware, responsive style functions.
//!
//! A style function takes a bag of abstract style props (`margin: 2`,
//! `color: "primary"`) and produces a style object keyed by concrete style
//! properties (`{"margin": "8px"}`). Prop values are looked up in a theme
//! scale, transformed (adding `px`, turning fractions into percentages), and
//! may be arrays, which expand into media-query keyed nested styles.
//!
//! # Modules
//!
//! - [`theme`]: Scales, themes, and theme loading from JSON or YAML
//! - [`attrs`]: The attribute bag passed to style functions
//! - [`style`]: The engine: resolution, building, responsive expansion, merging
//! - [`system`]: A ready-made catalog of style functions
//!
//! # Example
//!
//! ```rust
//! use serde_json::{json, Value};
//! use stylefn::{add_px, Attrs, Scale, StyleConfig, Theme};
//!
//! let space = StyleConfig::multiple(["margin", "padding"])
//!     .with_theme_key("space")
//!     .with_transform(add_px)
//!     .build();
//!
//! let theme = Theme::new()
//!     .with_breakpoints(["32em", "48em"])
//!     .add("space", Scale::list([0, 4, 8, 16]));
//!
//! let style = space
//!     .apply(&Attrs::new().set("margin", json!([1, 2])), Some(&theme))
//!     .unwrap();
//! assert_eq!(
//!     Value::Object(style),
//!     json!({
//!         "margin": "4px",
//!         "@media screen and (min-width: 32em)": { "margin": "8px" }
//!     })
//! );
//! ```

pub mod attrs;
pub mod style;
pub mod system;
pub mod theme;
mod util;

pub use attrs::{Attrs, AttrsError};
pub use style::{
    compose, create_responsive_styles, create_style, create_style_fn, media_query, merge_into,
    merge_optional, merge_styles, Composed, ConfigError, OutputKeySpec, OutputKeys,
    PropertySpec, Resolver, Style, StyleConfig, StyleFn, StyleProducer, VariantFn,
    DEFAULT_BREAKPOINTS,
};
pub use theme::{theme_get, PathSegment, Scale, Theme, ThemeError};
pub use util::{
    add_px, format_number, get_border, get_width, identity, is_num, is_present, percent,
    Transform,
};
