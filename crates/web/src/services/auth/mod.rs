//! Authentication service.
//!
//! Registers and authenticates customers against the users table. Passwords
//! are hashed with argon2id; the stored digest never leaves this module or
//! the repository layer.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use laundrypro_core::{Email, EmailError};

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::User;

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: Email,
    pub phone: String,
}

/// Authentication service.
///
/// Handles customer registration and login.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new customer.
    ///
    /// Inputs are trimmed and the email normalized before anything is stored.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if any field is empty after trimming.
    /// Returns `AuthError::InvalidEmail` if the email is malformed.
    /// Returns `AuthError::EmailTaken` if the email is already registered.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let registration = validate_registration(name, email, phone, password)?;
        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(
                &registration.name,
                &registration.email,
                &registration.phone,
                &password_hash,
            )
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` whether the email is unknown,
    /// malformed, or the password does not match - the caller cannot tell
    /// which check failed.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let (user, password_hash) = self
            .users
            .get_password_hash(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        Ok(user)
    }
}

/// Trim and validate registration fields.
///
/// # Errors
///
/// Returns `AuthError::MissingFields` if any field is empty after trimming,
/// and `AuthError::InvalidEmail` for a non-empty but malformed email.
pub fn validate_registration(
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
) -> Result<Registration, AuthError> {
    let name = name.trim();
    let phone = phone.trim();

    if name.is_empty() || phone.is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields);
    }

    let email = Email::parse(email).map_err(|e| match e {
        EmailError::Empty => AuthError::MissingFields,
        other => AuthError::InvalidEmail(other),
    })?;

    Ok(Registration {
        name: name.to_owned(),
        email,
        phone: phone.to_owned(),
    })
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored digest.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
