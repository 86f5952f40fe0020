use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the diagram render pass itself.
///
/// The render core never paints error text onto a canvas; callers decide
/// what a failed render should look like.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The class list was empty; no layout work is attempted.
    #[error("no classes provided")]
    EmptyInput,

    /// A class record is structurally malformed (e.g. missing its name).
    #[error("class #{class_index}: missing required field `{field}`")]
    InvalidSpec {
        class_index: usize,
        field: &'static str,
    },

    /// A styling option carried an unparseable color string.
    #[error("invalid color `{value}`")]
    InvalidColor { value: String },
}

/// Errors loading the optional TOML styling configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    MissingFile(PathBuf),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level error type for the library entry points and the CLI.
#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse class input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}
