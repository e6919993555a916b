//! Session-related types.
//!
//! Types stored in the session for authentication state. Customer identity
//! and the admin marker are independent keys: logging in as admin does not
//! touch a customer login in the same cookie jar, and vice versa.

use serde::{Deserialize, Serialize};

use laundrypro_core::UserId;

/// Session-stored customer identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's display name.
    pub name: String,
}

/// Session-stored admin marker.
///
/// Granted by matching the configured admin credential pair, not by a row in
/// the users table. This is a separate, weaker trust domain from customer
/// identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// The configured admin email that logged in.
    pub email: String,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for storing the admin session marker.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
