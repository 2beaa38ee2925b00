use thiserror::Error;

use crate::auth::password::PasswordError;

/// Failure taxonomy shared by every service operation.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("This email address is already registered")]
    DuplicateEmail,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email or phone number not recognized")]
    IdentityNotRecognized,
    #[error("This request has already been answered")]
    InvalidTransition,
    #[error("User not found")]
    UserNotFound,
    #[error("Listing not found")]
    ListingNotFound,
    #[error("Request not found")]
    RequestNotFound,
    #[error("Only the owner may perform this action")]
    NotOwner,
    #[error("Password hashing error: {0}")]
    Credential(#[from] PasswordError),
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl CoreError {
    /// Maps a storage fault onto the taxonomy, surfacing uniqueness
    /// violations as [`CoreError::DuplicateEmail`].
    pub(crate) fn from_storage(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return CoreError::DuplicateEmail;
            }
        }
        CoreError::Storage(err)
    }
}
