//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required registration field is empty after trimming.
    #[error("all fields are required")]
    MissingFields,

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] laundrypro_core::EmailError),

    /// Email is already registered.
    #[error("email already exists")]
    EmailTaken,

    /// Invalid credentials (wrong password or user not found).
    ///
    /// Both cases collapse to this one variant so a caller cannot probe
    /// which emails are registered.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
