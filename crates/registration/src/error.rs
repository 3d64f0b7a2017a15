//! Registration errors.

use thiserror::Error;

/// A form rule failed. Handled locally; no network call is made.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("full name is required")]
    FullNameRequired,

    #[error("e-mail is required")]
    EmailRequired,

    #[error("motivation is required")]
    MotivationRequired,

    #[error("choose at least one bootcamp")]
    NoBootcampSelected,

    #[error("full name must be between 5 and 30 characters")]
    FullNameLength,

    #[error("discord user must be between 2 and 30 characters")]
    DiscordUserLength,

    #[error("e-mail must be at most 50 characters")]
    EmailTooLong,

    #[error("e-mail address is not well-formed")]
    EmailSyntax,

    #[error("motivation must be between 5 and 100 characters")]
    MotivationLength,
}

/// A submit attempt failed.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("this client has already registered")]
    AlreadyRegistered,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Registry error: {0}")]
    Registry(#[from] registry_client::RegistryError),

    #[error("Store error: {0}")]
    Store(#[from] submission_store::StoreError),
}
