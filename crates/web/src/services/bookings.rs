//! Booking service: draft validation, creation, lookup, and status updates.
//!
//! `BookingDraft` is the typed request payload; `BookingDraft::validate` is
//! the only path from a draft to a persistable `NewBooking`, so the field
//! invariants hold for every row ever inserted.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use sqlx::PgPool;
use thiserror::Error;

use laundrypro_core::{BookingId, BookingStatus, UserId};

use crate::db::RepositoryError;
use crate::db::bookings::BookingRepository;
use crate::models::booking::{PICKUP_DATE_FORMAT, PICKUP_TIME_FORMAT};
use crate::models::{Booking, NewBooking};

/// Errors that can occur during booking operations.
#[derive(Debug, Error)]
pub enum BookingError {
    /// Pickup date or time is missing or unparseable.
    #[error("invalid pickup date or time")]
    InvalidSchedule,

    /// Service type empty or item count not positive.
    #[error("service type and items are required")]
    MissingServiceOrItems,

    /// Address, phone, or payment method empty.
    #[error("address, phone and payment method are required")]
    MissingContactInfo,

    /// No booking with the requested ID.
    #[error("booking not found")]
    NotFound,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Incoming booking payload.
///
/// Every field is optional at the wire level (missing JSON keys become
/// defaults); [`BookingDraft::validate`] decides what is actually required
/// and in which order failures are reported.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraft {
    pub service_type: String,
    pub items: i32,
    pub express_service: bool,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    pub address: String,
    pub phone: String,
    pub payment_method: String,
}

impl BookingDraft {
    /// Validate the draft into a persistable `NewBooking`.
    ///
    /// Validation order is part of the contract: the schedule is parsed
    /// first, because a malformed date or time cannot be stored at all,
    /// independent of the other fields. Only then are service/items and the
    /// contact fields checked.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidSchedule` if `pickup_date` is not
    /// `YYYY-MM-DD` or `pickup_time` is not `HH:MM` (or either is missing);
    /// `BookingError::MissingServiceOrItems` if the service tag is empty or
    /// the item count is not positive; `BookingError::MissingContactInfo` if
    /// address, phone, or payment method is empty.
    pub fn validate(self, owner: Option<UserId>) -> Result<NewBooking, BookingError> {
        let pickup_date = self
            .pickup_date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, PICKUP_DATE_FORMAT).ok())
            .ok_or(BookingError::InvalidSchedule)?;
        let pickup_time = self
            .pickup_time
            .as_deref()
            .and_then(|s| NaiveTime::parse_from_str(s, PICKUP_TIME_FORMAT).ok())
            .ok_or(BookingError::InvalidSchedule)?;

        if self.service_type.is_empty() || self.items <= 0 {
            return Err(BookingError::MissingServiceOrItems);
        }
        if self.address.is_empty() || self.phone.is_empty() || self.payment_method.is_empty() {
            return Err(BookingError::MissingContactInfo);
        }

        Ok(NewBooking {
            user_id: owner,
            service_type: self.service_type,
            items: self.items,
            express_service: self.express_service,
            pickup_date,
            pickup_time,
            address: self.address,
            phone: self.phone,
            payment_method: self.payment_method,
            status: BookingStatus::PickedUp,
        })
    }
}

/// Booking service.
pub struct BookingService<'a> {
    bookings: BookingRepository<'a>,
}

impl<'a> BookingService<'a> {
    /// Create a new booking service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            bookings: BookingRepository::new(pool),
        }
    }

    /// Validate and persist a booking; returns the assigned order ID.
    ///
    /// `owner` is the session identity when the customer is logged in, or
    /// `None` for a guest booking.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`BookingDraft::validate`], or
    /// `BookingError::Repository` if the insert fails.
    pub async fn create(
        &self,
        owner: Option<UserId>,
        draft: BookingDraft,
    ) -> Result<BookingId, BookingError> {
        let new_booking = draft.validate(owner)?;
        let id = self.bookings.insert(&new_booking).await?;
        Ok(id)
    }

    /// Get a booking by ID.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::NotFound` if no booking has this ID.
    pub async fn get(&self, id: BookingId) -> Result<Booking, BookingError> {
        self.bookings
            .get(id)
            .await?
            .ok_or(BookingError::NotFound)
    }

    /// List all bookings, most recent first (admin dashboard view).
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Repository` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Booking>, BookingError> {
        Ok(self.bookings.list_desc().await?)
    }

    /// Overwrite a booking's status.
    ///
    /// The status enumeration is closed but transitions are not: any status
    /// may replace any other, including moving backward.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::NotFound` if no booking has this ID.
    pub async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<(), BookingError> {
        self.bookings
            .update_status(id, status)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BookingError::NotFound,
                other => BookingError::Repository(other),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn full_draft() -> BookingDraft {
        BookingDraft {
            service_type: "laundry".to_owned(),
            items: 3,
            express_service: false,
            pickup_date: Some("2025-06-01".to_owned()),
            pickup_time: Some("14:30".to_owned()),
            address: "12 Hill Road".to_owned(),
            phone: "9876543210".to_owned(),
            payment_method: "cash".to_owned(),
        }
    }

    #[test]
    fn test_valid_draft_becomes_new_booking() {
        let booking = full_draft().validate(Some(UserId::new(5))).unwrap();
        assert_eq!(booking.user_id, Some(UserId::new(5)));
        assert_eq!(booking.items, 3);
        assert_eq!(booking.status, BookingStatus::PickedUp);
        assert_eq!(booking.pickup_date.to_string(), "2025-06-01");
    }

    #[test]
    fn test_guest_booking_has_no_owner() {
        let booking = full_draft().validate(None).unwrap();
        assert!(booking.user_id.is_none());
    }

    #[test]
    fn test_zero_items_rejected() {
        let mut draft = full_draft();
        draft.items = 0;
        assert!(matches!(
            draft.validate(None),
            Err(BookingError::MissingServiceOrItems)
        ));
    }

    #[test]
    fn test_negative_items_rejected() {
        let mut draft = full_draft();
        draft.items = -2;
        assert!(matches!(
            draft.validate(None),
            Err(BookingError::MissingServiceOrItems)
        ));
    }

    #[test]
    fn test_empty_service_type_rejected() {
        let mut draft = full_draft();
        draft.service_type = String::new();
        assert!(matches!(
            draft.validate(None),
            Err(BookingError::MissingServiceOrItems)
        ));
    }

    #[test]
    fn test_service_type_is_an_open_tag() {
        // Any non-empty tag is accepted, not just the three known services.
        let mut draft = full_draft();
        draft.service_type = "shoe-care".to_owned();
        assert!(draft.validate(None).is_ok());
    }

    #[test]
    fn test_missing_contact_info_rejected() {
        for field in ["address", "phone", "payment_method"] {
            let mut draft = full_draft();
            match field {
                "address" => draft.address = String::new(),
                "phone" => draft.phone = String::new(),
                _ => draft.payment_method = String::new(),
            }
            assert!(
                matches!(draft.validate(None), Err(BookingError::MissingContactInfo)),
                "expected MissingContactInfo when {field} is empty"
            );
        }
    }

    #[test]
    fn test_unparseable_date_rejected() {
        let mut draft = full_draft();
        draft.pickup_date = Some("2024-13-40".to_owned());
        assert!(matches!(
            draft.validate(None),
            Err(BookingError::InvalidSchedule)
        ));
    }

    #[test]
    fn test_unparseable_time_rejected() {
        let mut draft = full_draft();
        draft.pickup_time = Some("25:99".to_owned());
        assert!(matches!(
            draft.validate(None),
            Err(BookingError::InvalidSchedule)
        ));
    }

    #[test]
    fn test_missing_schedule_rejected() {
        let mut draft = full_draft();
        draft.pickup_date = None;
        assert!(matches!(
            draft.validate(None),
            Err(BookingError::InvalidSchedule)
        ));
    }

    #[test]
    fn test_schedule_checked_before_other_fields() {
        // Every field is invalid here; the schedule error must still win.
        let draft = BookingDraft {
            pickup_date: Some("2024-13-40".to_owned()),
            ..BookingDraft::default()
        };
        assert!(matches!(
            draft.validate(None),
            Err(BookingError::InvalidSchedule)
        ));
    }

    #[test]
    fn test_empty_draft_fails_on_schedule_first() {
        assert!(matches!(
            BookingDraft::default().validate(None),
            Err(BookingError::InvalidSchedule)
        ));
    }

    #[test]
    fn test_draft_deserializes_from_wire_names() {
        let draft: BookingDraft = serde_json::from_str(
            r#"{
                "serviceType": "ironing",
                "items": 2,
                "expressService": true,
                "pickupDate": "2025-06-01",
                "pickupTime": "09:00",
                "address": "4 Lake View",
                "phone": "9000000000",
                "paymentMethod": "card"
            }"#,
        )
        .unwrap();
        assert_eq!(draft.service_type, "ironing");
        assert!(draft.express_service);

        let booking = draft.validate(None).unwrap();
        assert_eq!(booking.pickup_time.format("%H:%M").to_string(), "09:00");
    }

    #[test]
    fn test_draft_defaults_missing_fields() {
        let draft: BookingDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(draft.items, 0);
        assert!(draft.pickup_date.is_none());
        assert!(!draft.express_service);
    }
}
