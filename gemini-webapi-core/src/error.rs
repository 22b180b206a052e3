//! Error types for the response data model

/// Failures raised while building or reading a [`crate::types::ModelOutput`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelOutputError {
    /// Malformed or missing constructor input
    #[error("Validation error: {0}")]
    Validation(String),
    /// The chosen index does not select a candidate
    #[error("Index error: candidate index {chosen} is out of range for {len} candidate(s)")]
    Index { chosen: i64, len: usize },
}

impl From<serde_json::Error> for ModelOutputError {
    fn from(err: serde_json::Error) -> Self {
        ModelOutputError::Validation(err.to_string())
    }
}

impl ModelOutputError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ModelOutputError::Validation(_))
    }

    pub fn is_index(&self) -> bool {
        matches!(self, ModelOutputError::Index { .. })
    }
}

pub type Result<T> = std::result::Result<T, ModelOutputError>;
