//! Theme struct and theme loading.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::ThemeError;
use super::scale::{PathSegment, Scale};

/// User-supplied design tokens: scales keyed by theme key, plus breakpoints.
///
/// Style functions read one scale per call (their configured theme key) and
/// the breakpoint list for responsive values. Themes are never mutated by the
/// engine.
///
/// # Example
///
/// ```rust
/// use stylefn::{Scale, Theme};
///
/// let theme = Theme::new()
///     .with_breakpoints(["32em", "48em", "64em"])
///     .add("space", Scale::list([0, 6, 12, 18, 24]).alias("big", 64))
///     .add("colors", Scale::map([("blue", "#07c"), ("green", "#1c0")]));
///
/// assert!(theme.scale("space").is_some());
/// assert_eq!(theme.breakpoints().map(|b| b.len()), Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    scales: HashMap<String, Scale>,
    breakpoints: Option<Vec<String>>,
}

/// On-disk shape of a theme: `breakpoints` plus any number of scales.
#[derive(Debug, Deserialize)]
struct ThemeFile {
    #[serde(default)]
    breakpoints: Option<Vec<Breakpoint>>,
    #[serde(flatten)]
    scales: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Breakpoint {
    Length(String),
    Pixels(serde_json::Number),
}

impl From<Breakpoint> for Value {
    fn from(breakpoint: Breakpoint) -> Self {
        match breakpoint {
            Breakpoint::Length(s) => Value::String(s),
            Breakpoint::Pixels(n) => Value::Number(n),
        }
    }
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scale under a theme key, returning the updated theme for chaining.
    pub fn add(mut self, key: impl Into<String>, scale: impl Into<Scale>) -> Self {
        self.scales.insert(key.into(), scale.into());
        self
    }

    /// Sets the breakpoint list. Numbers are taken as pixels (`40` → `"40px"`).
    pub fn with_breakpoints<I, B>(mut self, breakpoints: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Value>,
    {
        self.breakpoints = Some(
            breakpoints
                .into_iter()
                .map(|b| breakpoint_text(b.into()))
                .collect(),
        );
        self
    }

    /// Returns the scale stored under `key`.
    pub fn scale(&self, key: &str) -> Option<&Scale> {
        self.scales.get(key)
    }

    /// Returns the breakpoint list, if the theme sets one.
    pub fn breakpoints(&self) -> Option<&[String]> {
        self.breakpoints.as_deref()
    }

    /// Looks up a value by path, the first segment naming the scale.
    ///
    /// A one-segment path returns the whole scale as a JSON value.
    /// `["breakpoints", i]` reads the breakpoint list.
    pub fn get(&self, path: &[PathSegment]) -> Option<Value> {
        let (first, rest) = path.split_first()?;
        let key = match first {
            PathSegment::Key(k) => k.clone(),
            PathSegment::Index(i) => i.to_string(),
        };
        if key == "breakpoints" && !self.scales.contains_key(&key) {
            let list = Value::Array(
                self.breakpoints
                    .as_ref()?
                    .iter()
                    .cloned()
                    .map(Value::String)
                    .collect(),
            );
            return rest
                .iter()
                .try_fold(&list, super::scale::step)
                .filter(|v| !v.is_null())
                .cloned();
        }
        let scale = self.scales.get(&key)?;
        if rest.is_empty() {
            Some(scale.to_value())
        } else {
            scale.lookup(rest).cloned()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty() && self.breakpoints.is_none()
    }

    /// Builds a theme from a JSON value.
    ///
    /// `breakpoints` must be a list of strings or numbers. Every other key must
    /// hold a list or a mapping; `null` entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Json`] if the value is not a mapping or the
    /// breakpoints are malformed, and [`ThemeError::InvalidScale`] for scalar
    /// scales.
    pub fn from_value(value: Value) -> Result<Self, ThemeError> {
        let file: ThemeFile = serde_json::from_value(value)?;
        let mut theme = Theme::new();
        for (key, entry) in file.scales {
            if entry.is_null() {
                continue;
            }
            let scale = Scale::from_value(entry)
                .ok_or_else(|| ThemeError::InvalidScale { key: key.clone() })?;
            theme.scales.insert(key, scale);
        }
        if let Some(breakpoints) = file.breakpoints {
            theme = theme.with_breakpoints(breakpoints);
        }
        Ok(theme)
    }

    /// Parses a theme from JSON text.
    pub fn from_json_str(source: &str) -> Result<Self, ThemeError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    /// Parses a theme from YAML text.
    pub fn from_yaml_str(source: &str) -> Result<Self, ThemeError> {
        let value: Value = serde_yaml::from_str(source)?;
        Self::from_value(value)
    }

    /// Loads a theme file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnsupportedFormat`] for extensions other than
    /// `.json`, `.yaml` and `.yml`, [`ThemeError::Read`] if the file cannot be
    /// read, and parse errors otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let is_json = match extension.as_deref() {
            Some("json") => true,
            Some("yaml") | Some("yml") => false,
            _ => {
                return Err(ThemeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = if is_json {
            Self::from_json_str(&source)?
        } else {
            Self::from_yaml_str(&source)?
        };
        log::debug!(
            "loaded theme from {} ({} scales)",
            path.display(),
            theme.scales.len()
        );
        Ok(theme)
    }
}

fn breakpoint_text(value: Value) -> String {
    match crate::util::add_px(value) {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Reads a theme value by path, returning `fallback` when it is missing.
///
/// Declared falsy values such as `0` are returned, not replaced.
///
/// ```rust
/// use serde_json::json;
/// use stylefn::{theme_get, PathSegment, Scale, Theme};
///
/// let theme = Theme::new().add("space", Scale::list([0, 4, 8]));
/// let zero = theme_get(Some(&theme), &["space".into(), PathSegment::Index(0)], json!(99));
/// assert_eq!(zero, json!(0));
/// ```
pub fn theme_get(theme: Option<&Theme>, path: &[PathSegment], fallback: Value) -> Value {
    theme.and_then(|t| t.get(path)).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn sample() -> Theme {
        Theme::new()
            .with_breakpoints(["32em", "48em", "64em"])
            .add("space", Scale::list([0, 6, 12, 18, 24]).alias("big", 64))
            .add(
                "colors",
                Scale::from_value(json!({
                    "blue": "#07c",
                    "gray": ["#ccc", "#555"]
                }))
                .unwrap(),
            )
    }

    #[test]
    fn test_theme_get_nested() {
        let theme = sample();
        let path = ["colors".into(), "gray".into(), PathSegment::Index(0)];
        assert_eq!(theme.get(&path), Some(json!("#ccc")));
    }

    #[test]
    fn test_theme_get_whole_scale() {
        let theme = sample();
        assert_eq!(theme.get(&["space".into()]), Some(json!([0, 6, 12, 18, 24])));
    }

    #[test]
    fn test_theme_get_breakpoint() {
        let theme = sample();
        let path = ["breakpoints".into(), PathSegment::Index(1)];
        assert_eq!(theme.get(&path), Some(json!("48em")));
    }

    #[test]
    fn test_theme_get_fallback() {
        let theme = Theme::new();
        let value = theme_get(Some(&theme), &["colors".into(), "blue".into()], json!("tomato"));
        assert_eq!(value, json!("tomato"));
        assert_eq!(theme_get(None, &["colors".into()], json!(1)), json!(1));
    }

    #[test]
    fn test_theme_get_declared_zero() {
        let theme = sample();
        let value = theme_get(Some(&theme), &["space".into(), PathSegment::Index(0)], json!(5));
        assert_eq!(value, json!(0));
    }

    #[test]
    fn test_numeric_breakpoints_get_px() {
        let theme = Theme::new().with_breakpoints([40, 52]);
        assert_eq!(
            theme.breakpoints(),
            Some(&["40px".to_string(), "52px".to_string()][..])
        );
    }

    #[test]
    fn test_from_value() {
        let theme = Theme::from_value(json!({
            "breakpoints": ["40em", 900],
            "space": [0, 4, 8],
            "colors": { "primary": "tomato" },
            "unused": null
        }))
        .unwrap();

        assert_eq!(
            theme.breakpoints(),
            Some(&["40em".to_string(), "900px".to_string()][..])
        );
        assert_eq!(theme.scale("space"), Some(&Scale::list([0, 4, 8])));
        assert!(theme.scale("colors").is_some());
        assert!(theme.scale("unused").is_none());
    }

    #[test]
    fn test_from_value_rejects_scalar_scale() {
        let err = Theme::from_value(json!({ "space": 4 })).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidScale { ref key } if key == "space"));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        assert!(matches!(
            Theme::from_value(json!([1, 2])),
            Err(ThemeError::Json(_))
        ));
    }

    #[test]
    fn test_from_yaml_str() {
        let theme = Theme::from_yaml_str(
            "breakpoints: [30em, 60em]\nfontSizes: [12, 14, 16]\ncolors:\n  text: '#111'\n",
        )
        .unwrap();
        assert_eq!(theme.breakpoints().map(|b| b.len()), Some(2));
        assert_eq!(
            theme.get(&["colors".into(), "text".into()]),
            Some(json!("#111"))
        );
    }

    #[test]
    fn test_from_json_str_error() {
        assert!(matches!(
            Theme::from_json_str("{ not json"),
            Err(ThemeError::Json(_))
        ));
    }

    #[test]
    fn test_from_path_json_and_yaml() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("theme.json");
        let mut file = std::fs::File::create(&json_path).unwrap();
        write!(file, r#"{{ "space": [0, 2, 4] }}"#).unwrap();
        let theme = Theme::from_path(&json_path).unwrap();
        assert_eq!(
            theme.get(&["space".into(), PathSegment::Index(2)]),
            Some(json!(4))
        );

        let yaml_path = dir.path().join("theme.yml");
        std::fs::write(&yaml_path, "radii: [2, 4]\n").unwrap();
        let theme = Theme::from_path(&yaml_path).unwrap();
        assert_eq!(
            theme.get(&["radii".into(), PathSegment::Index(1)]),
            Some(json!(4))
        );
    }

    #[test]
    fn test_from_path_errors() {
        let dir = tempfile::tempdir().unwrap();

        let toml = dir.path().join("theme.toml");
        std::fs::write(&toml, "").unwrap();
        assert!(matches!(
            Theme::from_path(&toml),
            Err(ThemeError::UnsupportedFormat { .. })
        ));

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            Theme::from_path(&missing),
            Err(ThemeError::Read { .. })
        ));
    }
}
