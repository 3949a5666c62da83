//! Theme loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a theme cannot be loaded.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A theme entry is neither a list nor a mapping.
    #[error("theme scale '{key}' must be a list or a mapping")]
    InvalidScale { key: String },

    /// The input is not valid JSON, or does not have the shape of a theme.
    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is not valid YAML.
    #[error("invalid theme YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The theme file could not be read.
    #[error("failed to read theme \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme file extension is not one of `.json`, `.yaml`, `.yml`.
    #[error("unsupported theme file \"{}\": expected .json, .yaml or .yml", .path.display())]
    UnsupportedFormat { path: PathBuf },
}
