/// Convenience result type used across coverflow.
pub type CoverflowResult<T> = Result<T, CoverflowError>;

/// Top-level error taxonomy used by carousel APIs.
///
/// Geometry, rendering and animation never fail; errors only surface at the
/// configuration and asset boundaries.
#[derive(thiserror::Error, Debug)]
pub enum CoverflowError {
    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while locating or decoding cover images.
    #[error("asset error: {0}")]
    Asset(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoverflowError {
    /// Build a [`CoverflowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CoverflowError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
