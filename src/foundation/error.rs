use std::path::PathBuf;

/// Convenience result type used across cinetrend.
pub type CinetrendResult<T> = Result<T, CinetrendError>;

/// Top-level error taxonomy for the report pipeline.
///
/// Only [`CinetrendError::Decode`] is ever recovered from, and only inside the encoding
/// fallback loop. Every other variant aborts the run.
#[derive(thiserror::Error, Debug)]
pub enum CinetrendError {
    /// No candidate encoding could decode an input file.
    #[error("decode error: none of the encodings [{}] worked for '{}'", tried.join(", "), path.display())]
    Decode {
        /// File that failed to decode.
        path: PathBuf,
        /// Encodings attempted, in priority order.
        tried: Vec<String>,
    },

    /// The input pattern matched no files.
    #[error("no input files match '{pattern}' in '{}'", dir.display())]
    NoInputs {
        /// Glob pattern that was searched.
        pattern: String,
        /// Directory the pattern was resolved against.
        dir: PathBuf,
    },

    /// A column required by the projection is absent from the loaded table.
    #[error("missing column: '{0}'")]
    MissingColumn(String),

    /// A retained cell could not be interpreted (e.g. a non-numeric gross).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Malformed delimited text.
    #[error("csv error: {0}")]
    Csv(String),

    /// A font or intermediate artifact required at runtime is unavailable.
    #[error("resource error: {0}")]
    Resource(String),

    /// Chart construction or rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// Precondition violated by caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid report configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CinetrendError {
    /// Build a [`CinetrendError::InvalidValue`] value.
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Build a [`CinetrendError::Csv`] value.
    pub fn csv(msg: impl Into<String>) -> Self {
        Self::Csv(msg.into())
    }

    /// Build a [`CinetrendError::Resource`] value.
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }

    /// Build a [`CinetrendError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CinetrendError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CinetrendError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
