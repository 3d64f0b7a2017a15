//! Application error types.

use thiserror::Error;

/// Main application error type.
///
/// Registry and validation failures never land here; they are rendered as
/// visible text states. Only configuration and local-store failures abort
/// a command.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Store error: {0}")]
    Store(#[from] submission_store::StoreError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
