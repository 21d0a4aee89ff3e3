/// Convenience result type used across dotswarm.
pub type DotsResult<T> = Result<T, DotsError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only startup configuration can fail. Empty or length-mismatched dot sets and
/// characters missing from the font are handled as no-ops, never as errors.
#[derive(thiserror::Error, Debug)]
pub enum DotsError {
    /// Unusable font atlas, surface or scene configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid user-provided values (indices, sizes, colors).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or reading back a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DotsError {
    /// Build a [`DotsError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`DotsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DotsError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DotsError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
