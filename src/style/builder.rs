//! Flat style objects for one resolved value.

use serde_json::Value;

use super::resolver::Resolver;
use super::Style;
use crate::util::Transform;

/// The concrete style key(s) an abstract prop writes to.
///
/// `Many` fans the same value out to every key (`mx` → `marginLeft` and
/// `marginRight`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputKeys {
    One(String),
    Many(Vec<String>),
}

impl OutputKeys {
    pub fn one(key: impl Into<String>) -> Self {
        OutputKeys::One(key.into())
    }

    pub fn many<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OutputKeys::Many(keys.into_iter().map(Into::into).collect())
    }

    /// Iterates the keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let keys: &[String] = match self {
            OutputKeys::One(key) => std::slice::from_ref(key),
            OutputKeys::Many(keys) => keys,
        };
        keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        match self {
            OutputKeys::One(_) => 1,
            OutputKeys::Many(keys) => keys.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for OutputKeys {
    fn from(key: &str) -> Self {
        OutputKeys::One(key.to_string())
    }
}

impl From<String> for OutputKeys {
    fn from(key: String) -> Self {
        OutputKeys::One(key)
    }
}

impl<const N: usize> From<[&str; N]> for OutputKeys {
    fn from(keys: [&str; N]) -> Self {
        OutputKeys::many(keys)
    }
}

impl From<Vec<String>> for OutputKeys {
    fn from(keys: Vec<String>) -> Self {
        OutputKeys::Many(keys)
    }
}

/// Builds `{ key: transform(resolve(value)) }` for every output key.
///
/// The value is resolved and transformed once and shared by all keys.
///
/// ```rust
/// use serde_json::json;
/// use stylefn::{add_px, create_style, OutputKeys, Resolver};
///
/// let style = create_style(
///     &OutputKeys::many(["marginTop", "marginRight"]),
///     &json!(3),
///     add_px,
///     &Resolver::identity(),
/// );
/// assert_eq!(style["marginTop"], json!("3px"));
/// assert_eq!(style["marginRight"], json!("3px"));
/// ```
pub fn create_style(
    keys: &OutputKeys,
    value: &Value,
    transform: Transform,
    resolver: &Resolver<'_>,
) -> Style {
    let computed = transform(resolver.resolve(value));
    let mut style = Style::new();
    match keys {
        OutputKeys::One(key) => {
            style.insert(key.clone(), computed);
        }
        OutputKeys::Many(keys) => {
            for key in keys {
                style.insert(key.clone(), computed.clone());
            }
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Scale;
    use crate::util::{add_px, identity};
    use serde_json::json;

    #[test]
    fn test_single_key() {
        let style = create_style(&"marginTop".into(), &json!(3), add_px, &Resolver::identity());
        assert_eq!(Value::Object(style), json!({ "marginTop": "3px" }));
    }

    #[test]
    fn test_identity_build_is_passthrough() {
        for value in [json!(0), json!(12), json!("auto"), json!(1.5)] {
            let style = create_style(&"k".into(), &value, identity, &Resolver::identity());
            assert_eq!(style.get("k"), Some(&value));
        }
    }

    #[test]
    fn test_fan_out() {
        let scale = Scale::list([0, 4, 8]);
        let style = create_style(
            &OutputKeys::from(["marginRight", "marginLeft"]),
            &json!(2),
            add_px,
            &Resolver::new(&scale),
        );
        assert_eq!(
            Value::Object(style),
            json!({ "marginRight": "8px", "marginLeft": "8px" })
        );
    }

    #[test]
    fn test_output_keys_iter() {
        let keys = OutputKeys::many(["a", "b"]);
        assert_eq!(keys.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(OutputKeys::one("c").len(), 1);
    }
}
