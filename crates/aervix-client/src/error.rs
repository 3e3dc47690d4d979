use aervix_shared::error::ValidationError;
use aervix_store::StoreError;
use thiserror::Error;

/// Errors reported to the UI layer.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No user is logged in")]
    NotLoggedIn,

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
