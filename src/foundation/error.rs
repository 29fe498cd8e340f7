/// Convenience result type used across dashgrid.
pub type GridResult<T> = Result<T, GridError>;

/// Error taxonomy for the document and CLI layers.
///
/// The placement and reorder engines never return errors; anomalies in their
/// input are absorbed into a best-effort deterministic result. Errors only
/// arise when loading, validating, or addressing parts of a dashboard
/// document.
#[derive(thiserror::Error, Debug)]
pub enum GridError {
    /// Invalid user-provided or dashboard data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridError {
    /// Build a [`GridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GridError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for GridError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
