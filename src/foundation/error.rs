/// Convenience result type used across the crate.
pub type UiResult<T> = Result<T, UiError>;

/// Top-level error taxonomy used by loader APIs.
#[derive(thiserror::Error, Debug)]
pub enum UiError {
    /// Invalid user-provided data that is not tied to the document structure.
    #[error("validation error: {0}")]
    Validation(String),

    /// Structural problems in the exported document (missing root, bad nesting).
    #[error("document error: {0}")]
    Document(String),

    /// Errors while compiling animation timelines.
    #[error("animation error: {0}")]
    Animation(String),

    /// Unrecoverable resource IO or decode failures.
    #[error("resource error: {0}")]
    Resource(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UiError {
    /// Build a [`UiError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`UiError::Document`] value.
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    /// Build a [`UiError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`UiError::Resource`] value.
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }

    /// Build a [`UiError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` when this error must abort a whole build.
    ///
    /// Resource IO failures (and wrapped lower-level errors, which are IO in practice) are fatal;
    /// everything else raised while constructing one widget only removes that widget's subtree.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Resource(_) | Self::Other(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
