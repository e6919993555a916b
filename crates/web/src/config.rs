//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `LAUNDRYPRO_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `LAUNDRYPRO_HOST` - Bind address (default: 127.0.0.1)
//! - `LAUNDRYPRO_PORT` - Listen port (default: 3000)
//! - `LAUNDRYPRO_BASE_URL` - Public URL; https enables secure cookies
//!   (default: http://localhost:3000)
//! - `ADMIN_EMAIL` - Admin console login (default: admin@laundrypro.com)
//! - `ADMIN_PASSWORD` - Admin console password (default: admin123, demo only)
//! - `ORDER_LOG_PATH` - CSV order export file (default: laundry_data.csv)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL (scheme decides the session cookie's secure flag)
    pub base_url: String,
    /// Admin console credentials
    pub admin: AdminConfig,
    /// CSV order export file path
    pub order_log_path: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Admin console credentials.
///
/// A single configured email/password pair, compared by exact string match.
/// This is not backed by the users table and not hashed: the admin console
/// is a separate, operator-facing trust domain.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminConfig {
    /// Admin login email (stored lowercased).
    pub email: String,
    /// Admin login password.
    pub password: SecretString,
}

impl AdminConfig {
    /// Check a submitted credential pair against the configured one.
    ///
    /// The email comparison is case-insensitive (both sides lowercased);
    /// the password comparison is exact.
    #[must_use]
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email.trim().to_lowercase() && self.password.expose_secret() == password
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("LAUNDRYPRO_DATABASE_URL")?;
        let host = get_env_or_default("LAUNDRYPRO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("LAUNDRYPRO_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("LAUNDRYPRO_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("LAUNDRYPRO_PORT".to_string(), e.to_string())
            })?;

        let base_url = get_env_or_default("LAUNDRYPRO_BASE_URL", "http://localhost:3000");

        let admin = AdminConfig {
            email: get_env_or_default("ADMIN_EMAIL", "admin@laundrypro.com").to_lowercase(),
            password: SecretString::from(get_env_or_default("ADMIN_PASSWORD", "admin123")),
        };

        let order_log_path =
            PathBuf::from(get_env_or_default("ORDER_LOG_PATH", "laundry_data.csv"));
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            admin,
            order_log_path,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
