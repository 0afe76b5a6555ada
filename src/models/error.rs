use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Unknown category: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Category {category} does not support {operation}")]
    UnsupportedCategory { category: String, operation: String },

    #[error("Category {0} has no weight score")]
    MissingFormula(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ScoreError {
    /// Errors the front-end reports back to the user as-is, rather than as a
    /// generic computation failure.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ScoreError::NotFound(_)
                | ScoreError::UnsupportedCategory { .. }
                | ScoreError::MissingFormula(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
