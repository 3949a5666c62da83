//! A ready-made catalog of style functions.
//!
//! Each family lives in its own module and is exposed as lazily built
//! statics, so the catalog costs nothing until a function is first used:
//!
//! - [`space`](SPACE), [`WIDTH`], [`FONT_SIZE`] and the color functions
//! - typography, layout, flexbox, grid, background, border, misc, position
//! - variants: [`TEXT_STYLE`], [`COLOR_STYLE`], [`BUTTON_STYLE`]
//! - [`mixed`]: every function at once, with unknown props passed through
//!
//! ```rust
//! use serde_json::{json, Value};
//! use stylefn::system::SPACE;
//! use stylefn::Attrs;
//!
//! let style = SPACE.apply(&Attrs::new().set("mx", 1), None).unwrap();
//! assert_eq!(
//!     Value::Object(style),
//!     json!({ "marginRight": "4px", "marginLeft": "4px" })
//! );
//! ```

mod background;
mod border;
mod color;
mod flexbox;
mod grid;
mod layout;
mod misc;
mod mixed;
mod position;
mod space;
mod typography;
mod variants;

pub use background::*;
pub use border::*;
pub use color::*;
pub use flexbox::*;
pub use grid::*;
pub use layout::*;
pub use misc::*;
pub use mixed::{catalog, mixed, passthrough_blacklist};
pub use position::*;
pub use space::*;
pub use typography::*;
pub use variants::*;

use crate::style::{StyleConfig, StyleFn};

/// A style function reading `prop` and writing it under the same name.
pub(crate) fn plain(prop: &str) -> StyleFn {
    StyleConfig::new(prop).build()
}
