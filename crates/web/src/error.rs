//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. API route handlers return
//! `Result<T, AppError>`; the response body is always a structured
//! `{"message": ...}` object so browser script and API consumers see one
//! shape. Admin form flows do not use this type - they redirect with a
//! flashed notice instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::bookings::BookingError;

/// Application-level error type for API routes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Booking operation failed.
    #[error("Booking error: {0}")]
    Booking(#[from] BookingError),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error payload: `{"message": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl AppError {
    fn is_server_error(&self) -> bool {
        match self {
            Self::Database(_) | Self::Internal(_) => true,
            Self::Auth(err) => matches!(
                err,
                AuthError::PasswordHash | AuthError::Repository(_)
            ),
            Self::Booking(err) => matches!(err, BookingError::Repository(_)),
            Self::NotFound(_) => false,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::MissingFields | AuthError::InvalidEmail(_) | AuthError::EmailTaken => {
                    StatusCode::BAD_REQUEST
                }
                AuthError::PasswordHash | AuthError::Repository(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Booking(err) => match err {
                BookingError::InvalidSchedule
                | BookingError::MissingServiceOrItems
                | BookingError::MissingContactInfo => StatusCode::BAD_REQUEST,
                BookingError::NotFound => StatusCode::NOT_FOUND,
                BookingError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Client-facing message. Internal error details are never exposed.
    fn message(&self) -> String {
        match self {
            Self::Auth(err) => match err {
                AuthError::MissingFields => "All fields are required".to_string(),
                AuthError::InvalidEmail(_) => "Invalid email address".to_string(),
                AuthError::EmailTaken => "Email already exists".to_string(),
                AuthError::InvalidCredentials => "Invalid credentials".to_string(),
                AuthError::PasswordHash | AuthError::Repository(_) => "Server error".to_string(),
            },
            Self::Booking(err) => match err {
                BookingError::InvalidSchedule => "Invalid pickup date or time".to_string(),
                BookingError::MissingServiceOrItems => {
                    "Service type and items are required".to_string()
                }
                BookingError::MissingContactInfo => {
                    "Address, phone and payment method are required".to_string()
                }
                BookingError::NotFound => "Booking not found".to_string(),
                BookingError::Repository(_) => "Server error".to_string(),
            },
            Self::NotFound(_) => "Not found".to_string(),
            Self::Database(_) | Self::Internal(_) => "Server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status();
        let body = ErrorBody {
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            get_status(AppError::Auth(AuthError::MissingFields)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::EmailTaken)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Booking(BookingError::InvalidSchedule)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Booking(BookingError::NotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::NotFound("x".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_messages_match_contract() {
        assert_eq!(
            AppError::Auth(AuthError::MissingFields).message(),
            "All fields are required"
        );
        assert_eq!(
            AppError::Auth(AuthError::EmailTaken).message(),
            "Email already exists"
        );
        assert_eq!(
            AppError::Auth(AuthError::InvalidCredentials).message(),
            "Invalid credentials"
        );
        assert_eq!(
            AppError::Booking(BookingError::InvalidSchedule).message(),
            "Invalid pickup date or time"
        );
        assert_eq!(
            AppError::Booking(BookingError::MissingServiceOrItems).message(),
            "Service type and items are required"
        );
        assert_eq!(
            AppError::Booking(BookingError::MissingContactInfo).message(),
            "Address, phone and payment method are required"
        );
        assert_eq!(
            AppError::Booking(BookingError::NotFound).message(),
            "Booking not found"
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::Internal("connection pool exhausted at 10.0.0.3".to_string());
        assert_eq!(err.message(), "Server error");
    }

    #[test]
    fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        // Both fail with the same status and message so callers cannot
        // enumerate registered emails.
        let a = AppError::Auth(AuthError::InvalidCredentials);
        let b = AppError::Auth(AuthError::InvalidCredentials);
        assert_eq!(a.message(), b.message());
        assert_eq!(a.status(), b.status());
    }
}
