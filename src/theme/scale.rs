//! Scales and path lookups.

use serde_json::{Map, Number, Value};

use crate::util::{as_f64, format_number};

/// One step of a lookup path into a scale.
///
/// Segments are interchangeable the way object keys and list indices are in a
/// JSON document: an index addresses a mapping by its decimal text, and a key
/// made of a canonical decimal index (`"2"`, not `"02"`) addresses a list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl PathSegment {
    /// Builds a segment from a raw value.
    ///
    /// Non-negative integers become indices, strings become keys, and any other
    /// value becomes a key from its textual form.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => Self::from_number(n),
            Value::String(s) => PathSegment::Key(s.clone()),
            other => PathSegment::Key(other.to_string()),
        }
    }

    /// Builds a segment from a number.
    pub fn from_number(n: &Number) -> Self {
        if let Some(index) = n.as_u64().and_then(|u| usize::try_from(u).ok()) {
            return PathSegment::Index(index);
        }
        let f = as_f64(n);
        if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= usize::MAX as f64 {
            PathSegment::Index(f as usize)
        } else {
            PathSegment::Key(format_number(n))
        }
    }

    /// Splits a dotted path (`"gray.2"`) into key segments.
    pub fn parse_dotted(path: &str) -> Vec<PathSegment> {
        path.split('.')
            .map(|part| PathSegment::Key(part.to_string()))
            .collect()
    }

    fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Index(i) => Some(*i),
            PathSegment::Key(k) => canonical_index(k),
        }
    }

    fn as_key(&self) -> std::borrow::Cow<'_, str> {
        match self {
            PathSegment::Key(k) => std::borrow::Cow::Borrowed(k.as_str()),
            PathSegment::Index(i) => std::borrow::Cow::Owned(i.to_string()),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

fn canonical_index(key: &str) -> Option<usize> {
    let index: usize = key.parse().ok()?;
    (index.to_string() == key).then_some(index)
}

/// Walks one segment into a JSON value.
pub(crate) fn step<'a>(value: &'a Value, segment: &PathSegment) -> Option<&'a Value> {
    match value {
        Value::Array(items) => segment.as_index().and_then(|i| items.get(i)),
        Value::Object(map) => map.get(segment.as_key().as_ref()),
        _ => None,
    }
}

/// A theme scale: the set of concrete values an abstract index or name maps to.
///
/// A `List` is index-addressable and may carry named aliases next to its
/// indices (`space[2]` and `space.big` on the same scale). A `Map` is a nested
/// mapping addressed by keys or dotted paths.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stylefn::{PathSegment, Scale};
///
/// let space = Scale::list([0, 4, 8, 16]).alias("big", 64);
///
/// assert_eq!(space.lookup(&[PathSegment::Index(2)]), Some(&json!(8)));
/// assert_eq!(space.lookup(&["big".into()]), Some(&json!(64)));
/// assert_eq!(space.lookup(&[PathSegment::Index(9)]), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Scale {
    List {
        values: Vec<Value>,
        aliases: Map<String, Value>,
    },
    Map(Map<String, Value>),
}

impl Scale {
    /// Creates an empty scale. Every lookup misses.
    pub fn new() -> Self {
        Scale::Map(Map::new())
    }

    /// Creates an ordered scale.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Scale::List {
            values: values.into_iter().map(Into::into).collect(),
            aliases: Map::new(),
        }
    }

    /// Creates a keyed scale.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Scale::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Adds a named entry, returning the updated scale for chaining.
    ///
    /// On a list this attaches an alias next to the indices; on a mapping it
    /// is an ordinary key.
    pub fn alias(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        match &mut self {
            Scale::List { aliases, .. } => {
                aliases.insert(name.into(), value.into());
            }
            Scale::Map(map) => {
                map.insert(name.into(), value.into());
            }
        }
        self
    }

    /// Converts a JSON value into a scale. Only lists and mappings qualify.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Array(values) => Some(Scale::List {
                values,
                aliases: Map::new(),
            }),
            Value::Object(map) => Some(Scale::Map(map)),
            _ => None,
        }
    }

    /// Looks a path up in the scale.
    ///
    /// Returns `None` for an empty path, for any segment that misses, and for
    /// entries holding `null`. Declared falsy entries (`0`, `""`, `false`) are
    /// found like any other value.
    pub fn lookup(&self, path: &[PathSegment]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let head = match self {
            Scale::List { values, aliases } => match first.as_index() {
                Some(index) => values.get(index),
                None => aliases.get(first.as_key().as_ref()),
            },
            Scale::Map(map) => map.get(first.as_key().as_ref()),
        }?;
        rest.iter()
            .try_fold(head, step)
            .filter(|value| !value.is_null())
    }

    /// Returns the scale as a plain JSON value. List aliases are not included.
    pub fn to_value(&self) -> Value {
        match self {
            Scale::List { values, .. } => Value::Array(values.clone()),
            Scale::Map(map) => Value::Object(map.clone()),
        }
    }

    /// Number of entries, aliases included.
    pub fn len(&self) -> usize {
        match self {
            Scale::List { values, aliases } => values.len() + aliases.len(),
            Scale::Map(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Value>> for Scale {
    fn from(values: Vec<Value>) -> Self {
        Scale::List {
            values,
            aliases: Map::new(),
        }
    }
}

impl From<Map<String, Value>> for Scale {
    fn from(map: Map<String, Value>) -> Self {
        Scale::Map(map)
    }
}
