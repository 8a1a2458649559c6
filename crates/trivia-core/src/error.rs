use thiserror::Error;

/// Application-wide error types for the trivia API.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or missing input.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing resource or degenerate query.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Well-formed input that cannot be processed.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Returns true if the error was caused by the caller's input rather than
    /// by the server or its storage.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::BadRequest(_)
                | AppError::NotFound(_)
                | AppError::Unprocessable(_)
                | AppError::SerializationError(_)
        )
    }
}
