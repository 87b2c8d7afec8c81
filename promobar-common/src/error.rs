//! Common error types for promobar

use thiserror::Error;

/// Common result type for promobar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across promobar services
#[derive(Error, Debug)]
pub enum Error {
    /// Remote settings store rejected a query or mutation
    #[error("Store error: {0}")]
    Store(String),

    /// Remote settings store could not be reached
    #[error("Store unreachable: {0}")]
    StoreUnreachable(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
