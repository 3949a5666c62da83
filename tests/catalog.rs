//! The ready-made catalog, driven through themes loaded from files.

use serde_json::{json, Value};
use stylefn::system::{mixed, BUTTON_STYLE, COLOR, FONT_SIZE, SPACE, WIDTH};
use stylefn::{compose, Attrs, StyleProducer, Theme};

const THEME_YAML: &str = r##"
breakpoints: [32em, 48em, 64em]
space: [0, 6, 12, 18, 24]
fontSizes: [12, 16, 18, 24, 36, 72]
colors:
  blue: "#07c"
  green: "#1c0"
buttons:
  primary:
    color: white
    backgroundColor: tomato
"##;

fn load_theme() -> Theme {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.yaml");
    std::fs::write(&path, THEME_YAML).unwrap();
    Theme::from_path(&path).unwrap()
}

#[test]
fn test_space_against_loaded_theme() {
    let theme = load_theme();
    let style = SPACE
        .apply(&Attrs::new().set("margin", json!([1, 2, 3, 4])), Some(&theme))
        .unwrap();
    assert_eq!(
        Value::Object(style),
        json!({
            "margin": "6px",
            "@media screen and (min-width: 32em)": { "margin": "12px" },
            "@media screen and (min-width: 48em)": { "margin": "18px" },
            "@media screen and (min-width: 64em)": { "margin": "24px" }
        })
    );
}

#[test]
fn test_font_size_and_color_from_theme() {
    let theme = load_theme();
    let attrs = Attrs::new().set("fontSize", 5).set("color", "green");
    assert_eq!(FONT_SIZE.apply(&attrs, Some(&theme)).unwrap()["fontSize"], json!("72px"));
    assert_eq!(COLOR.apply(&attrs, Some(&theme)).unwrap()["color"], json!("#1c0"));
}

#[test]
fn test_composed_catalog_functions() {
    let theme = load_theme();
    let card = compose()
        .with((*SPACE).clone())
        .with(WIDTH)
        .with((*BUTTON_STYLE).clone());

    let attrs = Attrs::new()
        .set("px", 2)
        .set("width", "fill")
        .set("variant", "primary");
    assert_eq!(
        Value::Object(card.apply(&attrs, Some(&theme))),
        json!({
            "paddingRight": "12px",
            "paddingLeft": "12px",
            "flex": "1 1 0%",
            "flexBasis": "0%",
            "color": "white",
            "backgroundColor": "tomato"
        })
    );
    assert!(card.props().contains(&"variant".to_string()));
}

#[test]
fn test_mixed_with_json_theme() {
    let theme = Theme::from_json_str(r#"{ "space": [0, 8], "colors": { "primary": "rebeccapurple" } }"#)
        .unwrap();
    let attrs = Attrs::from_value(json!({
        "m": 1,
        "bg": "nope",
        "backgroundColor": "primary",
        "userSelect": "none"
    }))
    .unwrap();
    assert_eq!(
        Value::Object(mixed(&attrs, Some(&theme))),
        json!({
            "m": 1,
            "bg": "nope",
            "userSelect": "none",
            "backgroundColor": "rebeccapurple"
        })
    );
}
