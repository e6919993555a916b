//! Booking domain types.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use laundrypro_core::{BookingId, BookingStatus, UserId};

/// Date format used on the wire and in the dashboard.
pub const PICKUP_DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format used on the wire and in the dashboard (24-hour, no seconds).
pub const PICKUP_TIME_FORMAT: &str = "%H:%M";

/// A persisted booking (domain type).
#[derive(Debug, Clone)]
pub struct Booking {
    /// Unique booking ID (the customer-facing order id).
    pub id: BookingId,
    /// Owning user, absent for guest bookings.
    pub user_id: Option<UserId>,
    /// Open service tag ("laundry", "ironing", "dry-cleaning", ...).
    pub service_type: String,
    /// Number of items, always positive.
    pub items: i32,
    /// Express turnaround requested.
    pub express_service: bool,
    /// Scheduled pickup date.
    pub pickup_date: NaiveDate,
    /// Scheduled pickup time of day.
    pub pickup_time: NaiveTime,
    /// Pickup address.
    pub address: String,
    /// Contact phone for this booking.
    pub phone: String,
    /// Payment method tag ("cash", "upi", "card", ...).
    pub payment_method: String,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Pickup date formatted for display (`YYYY-MM-DD`).
    #[must_use]
    pub fn pickup_date_display(&self) -> String {
        self.pickup_date.format(PICKUP_DATE_FORMAT).to_string()
    }

    /// Pickup time formatted for display (`HH:MM`).
    #[must_use]
    pub fn pickup_time_display(&self) -> String {
        self.pickup_time.format(PICKUP_TIME_FORMAT).to_string()
    }
}

/// A validated booking ready to be inserted.
///
/// Produced only by `BookingDraft::validate`, which guarantees the field
/// invariants (positive item count, non-empty contact fields, parseable
/// schedule) before anything reaches the store.
#[derive(Debug, Clone)]
pub struct NewBooking {
    /// Owning user, absent for guest bookings.
    pub user_id: Option<UserId>,
    pub service_type: String,
    pub items: i32,
    pub express_service: bool,
    pub pickup_date: NaiveDate,
    pub pickup_time: NaiveTime,
    pub address: String,
    pub phone: String,
    pub payment_method: String,
    /// Always `PickedUp` at creation.
    pub status: BookingStatus,
}

/// Canonical external representation of a booking.
///
/// Field names are part of the API contract and must stay stable.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    pub order_id: BookingId,
    pub service_type: String,
    pub items: i32,
    pub express_service: bool,
    /// `YYYY-MM-DD`
    pub pickup_date: String,
    /// `HH:MM`
    pub pickup_time: String,
    pub address: String,
    pub phone: String,
    pub payment_method: String,
    pub status: BookingStatus,
}

impl From<&Booking> for BookingView {
    fn from(booking: &Booking) -> Self {
        Self {
            order_id: booking.id,
            service_type: booking.service_type.clone(),
            items: booking.items,
            express_service: booking.express_service,
            pickup_date: booking.pickup_date_display(),
            pickup_time: booking.pickup_time_display(),
            address: booking.address.clone(),
            phone: booking.phone.clone(),
            payment_method: booking.payment_method.clone(),
            status: booking.status,
        }
    }
}
