/// Convenience result type used across the crate.
pub type HeartResult<T> = Result<T, HeartError>;

/// Top-level error taxonomy.
#[derive(thiserror::Error, Debug)]
pub enum HeartError {
    /// Inconsistent shapes or out-of-range settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Failures while writing or reading frames and animations.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HeartError {
    /// Build a [`HeartError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HeartError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`HeartError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
