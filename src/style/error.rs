//! Style configuration validation errors.

/// Error returned when a style configuration is malformed.
///
/// Malformed configurations still build and run; positions without an aligned
/// output key simply produce no declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config names no props at all.
    NoProps,
    /// Prop names and output key entries are not position-aligned.
    LengthMismatch { props: usize, keys: usize },
    /// A single prop was given a list of per-prop output keys.
    ShapeMismatch { prop: String },
    /// An output key entry has no keys in it.
    EmptyOutputKeys { prop: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoProps => write!(f, "style config has no props"),
            ConfigError::LengthMismatch { props, keys } => write!(
                f,
                "style config has {} props but {} output key entries",
                props, keys
            ),
            ConfigError::ShapeMismatch { prop } => write!(
                f,
                "style prop '{}' is a single prop but was given per-prop output keys",
                prop
            ),
            ConfigError::EmptyOutputKeys { prop } => {
                write!(f, "style prop '{}' maps to no output keys", prop)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
