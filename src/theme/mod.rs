//! Theme data consumed by style functions.
//!
//! This module provides:
//!
//! - [`Theme`]: Scales keyed by theme key, plus optional breakpoints
//! - [`Scale`]: An ordered list (with optional named aliases) or a nested mapping
//! - [`PathSegment`]: One step of a scale lookup path
//! - [`ThemeError`]: Errors from loading themes out of JSON or YAML
//!
//! Themes are read-only inputs. Nothing in the engine mutates a theme or
//! keeps it beyond a single call.

mod error;
mod scale;
#[allow(clippy::module_inception)]
mod theme;

pub use error::ThemeError;
pub use scale::{PathSegment, Scale};
pub use theme::{theme_get, Theme};
