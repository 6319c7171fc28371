/// Convenience result type used across folio.
pub type FolioResult<T> = Result<T, FolioError>;

/// Top-level error taxonomy used by catalog and layout APIs.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// Invalid author-provided catalog or config data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while reading or probing catalog sources.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Errors while scheduling or assembling layouts.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Catalog`] value.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`FolioError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`FolioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
