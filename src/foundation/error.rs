/// Convenience result type used across Maskforge.
pub type MaskforgeResult<T> = Result<T, MaskforgeError>;

/// Top-level error taxonomy used by node and pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum MaskforgeError {
    /// A required input value is missing or carries the wrong type.
    #[error("input error: {0}")]
    Input(String),

    /// Malformed points-string (bad tokenization, non-numeric fields,
    /// unbalanced parentheses).
    #[error("parse error: {0}")]
    Parse(String),

    /// Structurally invalid parameters (frame count, resolution, unknown
    /// node identifier).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MaskforgeError {
    /// Build a [`MaskforgeError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`MaskforgeError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`MaskforgeError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
