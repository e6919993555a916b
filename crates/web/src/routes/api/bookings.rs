//! Booking API handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use laundrypro_core::BookingId;

use crate::error::AppError;
use crate::middleware::OptionalUser;
use crate::models::BookingView;
use crate::services::{BookingDraft, BookingService};
use crate::state::AppState;

/// Success body for booking creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
    pub message: &'static str,
    pub order_id: BookingId,
}

/// Create a booking.
///
/// POST /api/bookings
///
/// Logged-in customers own the booking; without a session identity it is a
/// guest booking, which is equally valid.
///
/// # Errors
///
/// `400 {"message": ...}` - schedule parsing is checked first, then
/// service/items, then the contact fields.
pub async fn create(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Json(draft): Json<BookingDraft>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let owner = user.map(|u| u.id);
    let service = BookingService::new(state.pool());
    let order_id = service.create(owner, draft).await?;

    tracing::info!(%order_id, guest = owner.is_none(), "booking created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Booking created",
            order_id,
        }),
    ))
}

/// Get a booking's canonical representation by order id.
///
/// GET /api/bookings/{id}
///
/// # Errors
///
/// `404 {"message": "Booking not found"}` if the id was never assigned.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<BookingView>, AppError> {
    let service = BookingService::new(state.pool());
    let booking = service.get(BookingId::new(id)).await?;

    Ok(Json(BookingView::from(&booking)))
}
