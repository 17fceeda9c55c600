/// Convenience result type used across stripewalk.
pub type StripewalkResult<T> = Result<T, StripewalkError>;

/// Top-level error taxonomy used by the document, session and synthesizer APIs.
#[derive(thiserror::Error, Debug)]
pub enum StripewalkError {
    /// The sprite has no visible extent along one axis.
    #[error("invalid sprite dimensions: {width}x{height}")]
    InvalidSpriteDimensions {
        /// Width of the offending bounds in pixels.
        width: u32,
        /// Height of the offending bounds in pixels.
        height: u32,
    },

    /// Invalid user-provided data (buffer sizes, canvas dimensions).
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown layer id or an impossible stacking operation.
    #[error("layer error: {0}")]
    Layer(String),

    /// An operation required a selection that was not there.
    #[error("selection error: {0}")]
    Selection(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StripewalkError {
    /// Build a [`StripewalkError::InvalidSpriteDimensions`] value.
    pub fn invalid_dimensions(width: u32, height: u32) -> Self {
        Self::InvalidSpriteDimensions { width, height }
    }

    /// Build a [`StripewalkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StripewalkError::Layer`] value.
    pub fn layer(msg: impl Into<String>) -> Self {
        Self::Layer(msg.into())
    }

    /// Build a [`StripewalkError::Selection`] value.
    pub fn selection(msg: impl Into<String>) -> Self {
        Self::Selection(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
