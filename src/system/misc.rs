use once_cell::sync::Lazy;

use super::plain;
use crate::style::{StyleConfig, StyleFn};

pub static BOX_SHADOW: Lazy<StyleFn> =
    Lazy::new(|| StyleConfig::new("boxShadow").with_theme_key("shadows").build());
pub static OPACITY: Lazy<StyleFn> = Lazy::new(|| plain("opacity"));
pub static OVERFLOW: Lazy<StyleFn> = Lazy::new(|| plain("overflow"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::Attrs;
    use crate::theme::{Scale, Theme};
    use serde_json::{json, Value};

    #[test]
    fn test_box_shadow() {
        let raw = "0 0 8px rgba(0, 0, 0, .125)";
        assert_eq!(
            BOX_SHADOW.apply(&Attrs::new().set("boxShadow", raw), None).map(Value::Object),
            Some(json!({ "boxShadow": raw }))
        );
        let theme = Theme::new().add(
            "shadows",
            Scale::list(["0 0 4px rgba(0, 0, 0, .125)", raw]),
        );
        assert_eq!(
            BOX_SHADOW
                .apply(&Attrs::new().set("boxShadow", 1), Some(&theme))
                .map(Value::Object),
            Some(json!({ "boxShadow": raw }))
        );
    }

    #[test]
    fn test_opacity_and_overflow() {
        assert_eq!(
            OPACITY.apply(&Attrs::new().set("opacity", 0.5), None).map(Value::Object),
            Some(json!({ "opacity": 0.5 }))
        );
        assert_eq!(
            OVERFLOW.apply(&Attrs::new().set("overflow", "hidden"), None).map(Value::Object),
            Some(json!({ "overflow": "hidden" }))
        );
    }
}
