//! Style object merging.

use serde_json::Value;

use super::Style;

/// Merges `b` over `a` without touching either input.
///
/// Keys holding objects on both sides merge recursively. Everything else,
/// lists included, is overwritten by `b`'s value.
///
/// ```rust
/// use serde_json::{json, Value};
/// use stylefn::{merge_styles, Style};
///
/// let a: Style = serde_json::from_value(json!({ "a": 1, "b": { "x": 1 } })).unwrap();
/// let b: Style = serde_json::from_value(json!({ "b": { "y": 2 } })).unwrap();
///
/// assert_eq!(
///     Value::Object(merge_styles(&a, &b)),
///     json!({ "a": 1, "b": { "x": 1, "y": 2 } })
/// );
/// ```
pub fn merge_styles(a: &Style, b: &Style) -> Style {
    let mut result = a.clone();
    merge_into(&mut result, b.clone());
    result
}

/// Merges styles where either side may be missing. Missing sides count as
/// empty.
pub fn merge_optional(a: Option<&Style>, b: Option<&Style>) -> Style {
    match (a, b) {
        (Some(a), Some(b)) => merge_styles(a, b),
        (Some(only), None) | (None, Some(only)) => only.clone(),
        (None, None) => Style::new(),
    }
}

/// Merges `incoming` into `target` in place, with [`merge_styles`] semantics.
pub fn merge_into(target: &mut Style, incoming: Style) {
    for (key, value) in incoming {
        match value {
            Value::Object(next) => {
                if let Some(Value::Object(existing)) = target.get_mut(&key) {
                    merge_into(existing, next);
                } else {
                    target.insert(key, Value::Object(next));
                }
            }
            other => {
                target.insert(key, other);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn style(value: Value) -> Style {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {}", other),
        }
    }

    #[test]
    fn test_patches_nested_children() {
        let a = style(json!({
            "a": "hello",
            "b": { "beep": "boop" },
            "c": {
                "d": 2,
                "e": "f",
                "g": { "drill": "baby, drill", "even": { "one": "level deeper" } }
            }
        }));
        let b = style(json!({
            "b": { "hello": "hi" },
            "c": { "g": { "number": 3, "even": { "num": 4 } } }
        }));

        assert_eq!(
            Value::Object(merge_styles(&a, &b)),
            json!({
                "a": "hello",
                "b": { "beep": "boop", "hello": "hi" },
                "c": {
                    "d": 2,
                    "e": "f",
                    "g": {
                        "number": 3,
                        "drill": "baby, drill",
                        "even": { "one": "level deeper", "num": 4 }
                    }
                }
            })
        );
    }

    #[test]
    fn test_works_as_fold() {
        let merged = [
            style(json!({ "a": "hello", "b": { "beep": "boop" } })),
            style(json!({ "b": { "hello": "hi" } })),
        ]
        .iter()
        .fold(style(json!({ "accumulator": "initial" })), |acc, s| {
            merge_styles(&acc, s)
        });

        assert_eq!(
            Value::Object(merged),
            json!({
                "accumulator": "initial",
                "a": "hello",
                "b": { "beep": "boop", "hello": "hi" }
            })
        );
    }

    #[test]
    fn test_missing_sides() {
        assert!(merge_optional(None, None).is_empty());
        let a = style(json!({ "x": 1 }));
        assert_eq!(merge_optional(Some(&a), None), a);
        assert_eq!(merge_optional(None, Some(&a)), a);
    }

    #[test]
    fn test_lists_are_overwritten() {
        let a = style(json!({ "array": [1, 2, 3] }));
        let b = style(json!({ "array": "overwritten" }));
        assert_eq!(merge_styles(&a, &b)["array"], json!("overwritten"));

        let b = style(json!({ "array": [9] }));
        assert_eq!(merge_styles(&a, &b)["array"], json!([9]));
    }

    #[test]
    fn test_object_replaces_scalar_and_back() {
        let a = style(json!({ "k": 1, "m": { "x": 1 } }));
        let b = style(json!({ "k": { "y": 2 }, "m": "flat" }));
        assert_eq!(
            Value::Object(merge_styles(&a, &b)),
            json!({ "k": { "y": 2 }, "m": "flat" })
        );
    }

    #[test]
    fn test_existing_keys_keep_their_position() {
        let a = style(json!({ "first": 1, "second": { "x": 1 } }));
        let b = style(json!({ "third": 3, "first": 4 }));
        let keys: Vec<_> = merge_styles(&a, &b).keys().cloned().collect();
        assert_eq!(keys, vec!["first", "second", "third"]);
    }

    fn leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<i32>().prop_map(Value::from),
            "[a-z]{0,6}".prop_map(Value::from),
            prop::collection::vec(any::<u8>(), 0..3).prop_map(Value::from),
        ]
    }

    fn arb_style() -> impl Strategy<Value = Style> {
        let value = leaf().prop_recursive(3, 24, 4, |inner| {
            prop::collection::btree_map("[a-d]", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect()))
        });
        prop::collection::btree_map("[a-f]", value, 0..6).prop_map(|m| m.into_iter().collect())
    }

    proptest! {
        #[test]
        fn merge_with_empty_is_identity(a in arb_style(), b in arb_style()) {
            let ab = merge_styles(&a, &b);
            prop_assert_eq!(merge_styles(&ab, &Style::new()), ab.clone());
            prop_assert_eq!(merge_styles(&Style::new(), &a), a);
        }

        #[test]
        fn merge_does_not_mutate_inputs(a in arb_style(), b in arb_style()) {
            let (a0, b0) = (a.clone(), b.clone());
            let _ = merge_styles(&a, &b);
            prop_assert_eq!(a, a0);
            prop_assert_eq!(b, b0);
        }

        #[test]
        fn merge_keeps_every_key(a in arb_style(), b in arb_style()) {
            let merged = merge_styles(&a, &b);
            for key in a.keys().chain(b.keys()) {
                prop_assert!(merged.contains_key(key));
            }
        }

        #[test]
        fn non_object_values_from_b_win(a in arb_style(), b in arb_style()) {
            let merged = merge_styles(&a, &b);
            for (key, value) in &b {
                if !value.is_object() {
                    prop_assert_eq!(&merged[key], value);
                }
            }
        }
    }
}
