use thiserror::Error;

/// Application-wide error types for Roster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Request payload failed validation. The message is shown to the client as-is.
    #[error("{0}")]
    Validation(String),

    /// No user exists with the given id.
    #[error("User with ID {0} was not found.")]
    NotFound(i64),

    /// Missing or unknown bearer token.
    #[error("Unauthorized")]
    Unauthorized,

    /// Invalid startup configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Anything else. The message is for the server log only.
    #[error("Internal error: {0}")]
    Internal(String),
}
