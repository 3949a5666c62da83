use once_cell::sync::Lazy;

use crate::style::VariantFn;

/// Text style presets from `textStyles`, selected by `textStyle`.
pub static TEXT_STYLE: Lazy<VariantFn> =
    Lazy::new(|| VariantFn::new("textStyles").with_prop("textStyle"));

/// Color presets from `colorStyles`, selected by `colors`.
pub static COLOR_STYLE: Lazy<VariantFn> =
    Lazy::new(|| VariantFn::new("colorStyles").with_prop("colors"));

/// Button presets from `buttons`, selected by `variant`.
pub static BUTTON_STYLE: Lazy<VariantFn> = Lazy::new(|| VariantFn::new("buttons"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::Attrs;
    use crate::theme::Theme;
    use serde_json::{json, Value};

    #[test]
    fn test_text_style() {
        let caps = json!({ "fontSize": "12px", "textTransform": "uppercase", "letterSpacing": "0.2em" });
        let attrs = Attrs::from_value(json!({
            "textStyle": "caps",
            "theme": { "textStyles": { "caps": caps.clone() } }
        }))
        .unwrap();
        assert_eq!(TEXT_STYLE.apply(&attrs, None).map(Value::Object), Some(caps));
    }

    #[test]
    fn test_color_style_with_theme_argument() {
        let primary = json!({ "color": "white", "backgroundColor": "tomato" });
        let theme = Theme::from_value(json!({ "colorStyles": { "primary": primary.clone() } })).unwrap();
        let attrs = Attrs::new().set("colors", "primary");
        assert_eq!(COLOR_STYLE.apply(&attrs, Some(&theme)).map(Value::Object), Some(primary));
    }

    #[test]
    fn test_button_style_keeps_nested_selectors() {
        let primary = json!({
            "color": "white",
            "backgroundColor": "tomato",
            "&:hover": { "backgroundColor": "black" }
        });
        let attrs = Attrs::from_value(json!({
            "variant": "primary",
            "theme": { "buttons": { "primary": primary.clone() } }
        }))
        .unwrap();
        assert_eq!(BUTTON_STYLE.apply(&attrs, None).map(Value::Object), Some(primary));
    }
}
