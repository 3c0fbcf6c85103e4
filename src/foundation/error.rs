/// Convenience result type used across spritereel.
pub type SpriteResult<T> = Result<T, SpriteError>;

/// Top-level error taxonomy used by the render pipeline.
#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    /// Per-frame width is zero or wider than the sheet.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Scale factor is non-positive or not finite.
    #[error("invalid scale: {0}")]
    InvalidScale(String),

    /// The frame selection yields no base frames.
    #[error("empty selection: {0}")]
    EmptySelection(String),

    /// A duration used as a divisor is non-positive, or the derived timeline is degenerate.
    #[error("domain error: {0}")]
    Domain(String),

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing job files and reports.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A single encoder attempt failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Every encoder attempt failed; `source` is the cause reported by the last one.
    #[error("encoding failed ({attempts}): {source}")]
    EncodingFailed {
        /// Summary of every attempt that was made, in order.
        attempts: String,
        /// Error reported by the final attempt.
        #[source]
        source: Box<SpriteError>,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpriteError {
    /// Build a [`SpriteError::InvalidDimension`] value.
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Build a [`SpriteError::InvalidScale`] value.
    pub fn invalid_scale(msg: impl Into<String>) -> Self {
        Self::InvalidScale(msg.into())
    }

    /// Build a [`SpriteError::EmptySelection`] value.
    pub fn empty_selection(msg: impl Into<String>) -> Self {
        Self::EmptySelection(msg.into())
    }

    /// Build a [`SpriteError::Domain`] value.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Build a [`SpriteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpriteError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`SpriteError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SpriteError::EncodingFailed`] value wrapping the final attempt's error.
    pub fn encoding_failed(attempts: impl Into<String>, source: SpriteError) -> Self {
        Self::EncodingFailed {
            attempts: attempts.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
