//! User domain types.

use chrono::{DateTime, Utc};

use laundrypro_core::{Email, UserId};

/// A registered customer (domain type).
///
/// The password digest never leaves the repository layer; this type carries
/// only the attributes safe to hand to handlers and templates.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Normalized (lowercased) email address.
    pub email: Email,
    /// Contact phone number.
    pub phone: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}
