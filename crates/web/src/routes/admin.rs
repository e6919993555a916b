//! Admin console route handlers.
//!
//! Operator-facing form flows: every outcome is a redirect with a flashed
//! notice in the query string, never a structured error body. Access is
//! granted by the configured credential pair, not by the users table.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::Redirect,
};
use axum::Form;
use serde::Deserialize;
use tower_sessions::Session;

use laundrypro_core::{BookingId, BookingStatus};

use crate::middleware::{RequireAdmin, clear_current_admin, set_current_admin};
use crate::models::{Booking, CurrentAdmin};
use crate::routes::home::FlashQuery;
use crate::services::BookingService;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Admin login form data (field names match the login modal).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminLoginForm {
    #[serde(rename = "adminEmail")]
    pub admin_email: String,
    #[serde(rename = "adminPassword")]
    pub admin_password: String,
}

/// Status update form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatusForm {
    pub status: String,
}

// =============================================================================
// Templates
// =============================================================================

/// One `<option>` in a row's status select.
pub struct StatusOption {
    pub value: &'static str,
    pub selected: bool,
}

/// One booking row on the dashboard.
pub struct BookingRowView {
    pub id: i32,
    pub service_type: String,
    pub items: i32,
    pub express: &'static str,
    pub pickup_date: String,
    pub pickup_time: String,
    pub phone: String,
    pub payment_method: String,
    pub status: &'static str,
    pub options: Vec<StatusOption>,
}

impl From<&Booking> for BookingRowView {
    fn from(booking: &Booking) -> Self {
        let options = BookingStatus::ALL
            .iter()
            .map(|s| StatusOption {
                value: s.as_str(),
                selected: *s == booking.status,
            })
            .collect();

        Self {
            id: booking.id.as_i32(),
            service_type: booking.service_type.clone(),
            items: booking.items,
            express: if booking.express_service { "Yes" } else { "No" },
            pickup_date: booking.pickup_date_display(),
            pickup_time: booking.pickup_time_display(),
            phone: booking.phone.clone(),
            payment_method: booking.payment_method.clone(),
            status: booking.status.as_str(),
            options,
        }
    }
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub admin_email: String,
    pub bookings: Vec<BookingRowView>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Redirect to the dashboard with a flashed message.
fn flash_dashboard(kind: &str, message: &str) -> Redirect {
    Redirect::to(&format!(
        "/admin/dashboard?{kind}={}",
        urlencoding::encode(message)
    ))
}

/// Handle the admin login form.
///
/// POST /admin/login
///
/// Exact match against the configured credential pair grants the admin
/// session marker; anything else bounces back to the home page with a
/// warning.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AdminLoginForm>,
) -> Redirect {
    if !state
        .config()
        .admin
        .matches(&form.admin_email, &form.admin_password)
    {
        tracing::warn!("failed admin login attempt");
        return Redirect::to(&format!(
            "/?error={}",
            urlencoding::encode("Invalid admin credentials!")
        ));
    }

    let admin = CurrentAdmin {
        email: state.config().admin.email.clone(),
    };
    if let Err(e) = set_current_admin(&session, &admin).await {
        tracing::error!("failed to set admin session: {e}");
        return Redirect::to(&format!("/?error={}", urlencoding::encode("Server error")));
    }

    Redirect::to("/admin/dashboard")
}

/// Render the dashboard: all bookings, most recent first.
///
/// GET /admin/dashboard
pub async fn dashboard(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<FlashQuery>,
) -> DashboardTemplate {
    let service = BookingService::new(state.pool());

    let (bookings, mut error) = match service.list_all().await {
        Ok(bookings) => (bookings, None),
        Err(e) => {
            tracing::error!("failed to list bookings: {e}");
            (Vec::new(), Some("Could not load bookings.".to_owned()))
        }
    };
    if error.is_none() {
        error = query.error;
    }

    DashboardTemplate {
        admin_email: admin.email,
        bookings: bookings.iter().map(BookingRowView::from).collect(),
        notice: query.notice,
        error,
    }
}

/// Overwrite a booking's status from the per-row form.
///
/// POST /admin/bookings/{id}/status
///
/// The status string is parsed in exactly one place
/// (`BookingStatus::from_str`); anything outside the four-value set flashes
/// "Invalid status." and changes nothing.
pub async fn update_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<StatusForm>,
) -> Redirect {
    let Ok(status) = form.status.parse::<BookingStatus>() else {
        return flash_dashboard("error", "Invalid status.");
    };

    let service = BookingService::new(state.pool());
    match service.update_status(BookingId::new(id), status).await {
        Ok(()) => {
            tracing::info!(booking_id = id, %status, "booking status updated");
            flash_dashboard(
                "notice",
                &format!("Booking #{id} status updated to {status}."),
            )
        }
        Err(crate::services::BookingError::NotFound) => {
            flash_dashboard("error", "Booking not found.")
        }
        Err(e) => {
            tracing::error!("failed to update booking status: {e}");
            flash_dashboard("error", "Server error.")
        }
    }
}

/// Clear the admin marker and return to the home page. Idempotent.
///
/// GET /admin/logout
pub async fn logout(session: Session) -> Redirect {
    if let Err(e) = clear_current_admin(&session).await {
        tracing::error!("failed to clear admin session: {e}");
    }
    Redirect::to(&format!(
        "/?notice={}",
        urlencoding::encode("Logged out successfully!")
    ))
}
