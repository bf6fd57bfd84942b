/// Convenience result type used across Vitrine.
pub type VitrineResult<T> = Result<T, VitrineError>;

/// Top-level error taxonomy used by the generator APIs.
///
/// The generated page itself has no error surface: missing media or links
/// degrade in the browser. These errors only describe bad input to the
/// generator and failed IO while building or previewing.
#[derive(thiserror::Error, Debug)]
pub enum VitrineError {
    /// Invalid user-provided content or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while resolving breakpoint descriptors or scroll geometry.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors while rasterizing or compositing a preview frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VitrineError {
    /// Build a [`VitrineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VitrineError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`VitrineError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<serde_json::Error> for VitrineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
