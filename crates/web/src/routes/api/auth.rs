//! Customer authentication API handlers.
//!
//! All endpoints speak JSON. Missing payload fields deserialize to empty
//! strings so validation (not the deserializer) decides what is required,
//! and every failure body has the same `{"message": ...}` shape.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use laundrypro_core::UserId;

use crate::error::AppError;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::AuthService;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// `{id, name}` summary returned after register/login.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
}

/// Success body for register/login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub user: UserSummary,
}

/// Body for logout and other message-only responses.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Register a new customer and log them in.
///
/// POST /api/auth/register
///
/// # Errors
///
/// `400 {"message": ...}` on missing fields, malformed email, or duplicate
/// email.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let auth = AuthService::new(state.pool());
    let user = auth
        .register(&payload.name, &payload.email, &payload.phone, &payload.password)
        .await?;

    // Auto-login: bind the fresh identity to this session
    let current = CurrentUser {
        id: user.id,
        name: user.name.clone(),
    };
    set_current_user(&session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("failed to set session: {e}")))?;

    tracing::info!(user_id = %user.id, "customer registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully",
            user: UserSummary {
                id: user.id,
                name: user.name,
            },
        }),
    ))
}

/// Login with email and password.
///
/// POST /api/auth/login
///
/// # Errors
///
/// `401 {"message": "Invalid credentials"}` on any failed check - unknown
/// email and wrong password are indistinguishable.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    let auth = AuthService::new(state.pool());
    let user = auth.login(&payload.email, &payload.password).await?;

    let current = CurrentUser {
        id: user.id,
        name: user.name.clone(),
    };
    set_current_user(&session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("failed to set session: {e}")))?;

    tracing::info!(user_id = %user.id, "customer logged in");

    Ok(Json(AuthResponse {
        message: "Login successful",
        user: UserSummary {
            id: user.id,
            name: user.name,
        },
    }))
}

/// Clear the session's customer identity. Idempotent.
///
/// POST /api/auth/logout
///
/// # Errors
///
/// `500` only if the session store itself fails.
pub async fn logout(session: Session) -> Result<Json<MessageResponse>, AppError> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(format!("failed to clear session: {e}")))?;

    Ok(Json(MessageResponse {
        message: "Logged out successfully",
    }))
}
