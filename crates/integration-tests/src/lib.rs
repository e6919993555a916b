//! Integration tests for LaundryPro.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply migrations
//! docker compose up -d postgres
//! cargo run -p laundrypro-cli -- migrate
//!
//! # Start the server
//! cargo run -p laundrypro-web
//!
//! # Run integration tests (live-service tests are #[ignore]d by default)
//! cargo test -p laundrypro-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `api_auth` - Registration, login, logout over the JSON API
//! - `api_bookings` - Booking creation, validation order, lookup
//! - `admin_console` - Admin login, dashboard guard, status updates

use reqwest::Client;

/// Base URL for the web server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("LAUNDRYPRO_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Admin credentials the server under test was started with.
#[must_use]
pub fn admin_credentials() -> (String, String) {
    (
        std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@laundrypro.com".to_string()),
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
    )
}

/// Create an HTTP client with a cookie store, so the session cookie set by
/// login/register rides along on subsequent requests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn session_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// A unique email per test run, so reruns never trip the unique constraint.
#[must_use]
pub fn unique_email(tag: &str) -> String {
    format!("{tag}-{}@test.laundrypro.dev", uuid::Uuid::new_v4())
}
