use once_cell::sync::Lazy;

use crate::style::{StyleConfig, StyleFn};
use crate::util::{add_px, get_border};

pub static BORDER: Lazy<StyleFn> = Lazy::new(|| side("border"));
pub static BORDER_TOP: Lazy<StyleFn> = Lazy::new(|| side("borderTop"));
pub static BORDER_RIGHT: Lazy<StyleFn> = Lazy::new(|| side("borderRight"));
pub static BORDER_BOTTOM: Lazy<StyleFn> = Lazy::new(|| side("borderBottom"));
pub static BORDER_LEFT: Lazy<StyleFn> = Lazy::new(|| side("borderLeft"));

/// All border shorthands at once; positive numbers become `Npx solid`.
pub static BORDERS: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::multiple([
        "border",
        "borderTop",
        "borderRight",
        "borderBottom",
        "borderLeft",
    ])
    .with_theme_key("borders")
    .with_transform(get_border)
    .build()
});

pub static BORDER_COLOR: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::new("borderColor")
        .with_theme_key("colors")
        .build()
});

pub static BORDER_RADIUS: Lazy<StyleFn> = Lazy::new(|| {
    StyleConfig::new("borderRadius")
        .with_theme_key("radii")
        .with_transform(add_px)
        .build()
});

fn side(prop: &str) -> StyleFn {
    StyleConfig::new(prop)
        .with_theme_key("borders")
        .with_transform(get_border)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::Attrs;
    use crate::theme::{Scale, Theme};
    use serde_json::{json, Value};

    fn theme() -> Theme {
        Theme::new()
            .with_breakpoints(["32em", "48em", "64em"])
            .add("radii", Scale::list([2, 4]))
            .add(
                "colors",
                Scale::from_value(json!({ "blue": "#07c", "gray": ["#ccc", "#555"] })).unwrap(),
            )
    }

    fn borders(attrs: Attrs) -> Value {
        BORDERS.apply(&attrs, None).map(Value::Object).unwrap_or(Value::Null)
    }

    #[test]
    fn test_border_radius() {
        let theme = theme();
        let radius = |v: Value, theme: Option<&Theme>| {
            BORDER_RADIUS
                .apply(&Attrs::new().set("borderRadius", v), theme)
                .map(Value::Object)
        };
        assert_eq!(radius(json!("4px"), None), Some(json!({ "borderRadius": "4px" })));
        assert_eq!(radius(json!(4), None), Some(json!({ "borderRadius": "4px" })));
        assert_eq!(radius(json!(0), Some(&theme)), Some(json!({ "borderRadius": "2px" })));
    }

    #[test]
    fn test_border_color() {
        assert_eq!(
            BORDER_COLOR
                .apply(&Attrs::new().set("borderColor", "blue"), None)
                .map(Value::Object),
            Some(json!({ "borderColor": "blue" }))
        );
        let attrs = Attrs::new().set("borderColor", "gray.0").with_theme(theme());
        assert_eq!(
            BORDER_COLOR.apply(&attrs, None).map(Value::Object),
            Some(json!({ "borderColor": "#ccc" }))
        );
    }

    #[test]
    fn test_borders_shorthand() {
        assert_eq!(borders(Attrs::new().set("border", "1px solid")), json!({ "border": "1px solid" }));
        assert_eq!(borders(Attrs::new().set("border", 1)), json!({ "border": "1px solid" }));
        for side in ["borderTop", "borderRight", "borderBottom", "borderLeft"] {
            assert_eq!(borders(Attrs::new().set(side, 1))[side], json!("1px solid"));
        }
    }

    #[test]
    fn test_borders_responsive() {
        assert_eq!(
            borders(Attrs::new().set("border", json!([0, 1]))),
            json!({
                "border": 0,
                "@media screen and (min-width: 40em)": { "border": "1px solid" }
            })
        );
        assert_eq!(
            borders(
                Attrs::new()
                    .set("borderTop", json!(["1px solid", "2px solid"]))
                    .set("borderBottom", json!(["none", "2px solid"]))
            ),
            json!({
                "borderTop": "1px solid",
                "borderBottom": "none",
                "@media screen and (min-width: 40em)": {
                    "borderTop": "2px solid",
                    "borderBottom": "2px solid"
                }
            })
        );
    }

    #[test]
    fn test_single_sides() {
        let attrs = Attrs::new().set("borderTop", 1).set("borderBottom", 2);
        assert_eq!(BORDER_TOP.apply(&attrs, None).unwrap()["borderTop"], json!("1px solid"));
        assert_eq!(BORDER_BOTTOM.apply(&attrs, None).unwrap()["borderBottom"], json!("2px solid"));
        assert_eq!(BORDER.apply(&attrs, None), None);
        assert_eq!(BORDER_LEFT.apply(&attrs, None), None);
        assert_eq!(BORDER_RIGHT.apply(&attrs, None), None);
    }
}
