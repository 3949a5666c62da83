//! The style-function engine.
//!
//! This module provides:
//!
//! - [`Resolver`]: Maps raw prop values through a theme scale
//! - [`create_style`]: Builds a flat style object for one value
//! - [`create_responsive_styles`]: Expands array values into media-query keyed styles
//! - [`merge_styles`]: Deep-merges style objects
//! - [`StyleConfig`] / [`StyleFn`]: Configurable, reusable style functions
//! - [`Composed`] / [`StyleProducer`]: Composition of several producers
//! - [`VariantFn`]: Whole-style lookups from the theme
//! - [`ConfigError`]: Style configuration validation errors
//!
//! Everything here is a pure function of its inputs.

mod builder;
mod compose;
mod error;
mod merge;
mod resolver;
mod responsive;
mod style_fn;
mod variant;

use serde_json::{Map, Value};

pub use builder::{create_style, OutputKeys};
pub use compose::{compose, Composed, StyleProducer};
pub use error::ConfigError;
pub use merge::{merge_into, merge_optional, merge_styles};
pub use resolver::Resolver;
pub use responsive::{create_responsive_styles, media_query, DEFAULT_BREAKPOINTS};
pub use style_fn::{create_style_fn, OutputKeySpec, PropertySpec, StyleConfig, StyleFn};
pub use variant::VariantFn;

/// A style object: style keys (or media queries) to values or nested styles.
pub type Style = Map<String, Value>;
