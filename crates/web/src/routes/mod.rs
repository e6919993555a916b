//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Home page
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (DB ping)
//!
//! # Customer API (JSON)
//! POST /api/auth/register       - Register (auto-login)
//! POST /api/auth/login          - Login
//! POST /api/auth/logout         - Logout
//! POST /api/bookings            - Create booking (guests allowed)
//! GET  /api/bookings/{id}       - Booking by order id
//!
//! # Admin console (form flows, redirect + flashed notice)
//! POST /admin/login             - Admin login
//! GET  /admin/dashboard         - Bookings table
//! POST /admin/bookings/{id}/status - Overwrite booking status
//! GET  /admin/logout            - Admin logout
//! ```
//!
//! Unmatched paths fall back to JSON `{"message": "Not found"}` under
//! `/api/`, and to the home page everywhere else.

pub mod admin;
pub mod api;
pub mod home;

use axum::{
    Json,
    Router,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::state::AppState;

/// Create the customer API router (mounted under `/api`).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/logout", post(api::auth::logout))
        .route("/bookings", post(api::bookings::create))
        .route("/bookings/{id}", get(api::bookings::show))
}

/// Create the admin console router (mounted under `/admin`).
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/dashboard", get(admin::dashboard))
        .route("/bookings/{id}/status", post(admin::update_status))
        .route("/logout", get(admin::logout))
}

/// Create the full application router (without layers).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .nest("/api", api_routes())
        .nest("/admin", admin_routes())
        .fallback(fallback)
}

/// Global not-found handler.
///
/// API paths get a structured JSON body; anything else renders the home page
/// (browser deep links land somewhere useful instead of a bare 404).
pub async fn fallback(uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" }))).into_response();
    }
    (StatusCode::NOT_FOUND, home::HomeTemplate::default()).into_response()
}
