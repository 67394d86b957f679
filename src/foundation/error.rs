/// Convenience result type used across spritecomp.
pub type SpriteCompResult<T> = Result<T, SpriteCompError>;

/// Top-level error taxonomy.
///
/// Compositing arithmetic never fails: degenerate geometry is a no-op, channel overflow
/// saturates and out-of-bounds sampling clamps. Errors are reserved for caller-supplied buffers
/// and spans that would index outside their slices, and for configuration parsing.
#[derive(thiserror::Error, Debug)]
pub enum SpriteCompError {
    /// Invalid descriptor or span geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpriteCompError {
    /// Build a [`SpriteCompError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpriteCompError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
