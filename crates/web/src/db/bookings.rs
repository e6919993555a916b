//! Booking repository for database operations.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;

use laundrypro_core::{BookingId, BookingStatus, UserId};

use super::RepositoryError;
use crate::models::{Booking, NewBooking};

/// Database row for a booking.
#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    id: i32,
    user_id: Option<i32>,
    service_type: String,
    items: i32,
    express_service: bool,
    pickup_date: NaiveDate,
    pickup_time: NaiveTime,
    address: String,
    phone: String,
    payment_method: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl BookingRow {
    fn into_booking(self) -> Result<Booking, RepositoryError> {
        // The status column carries a CHECK constraint; anything else is
        // corruption, not caller error.
        let status = BookingStatus::from_str(&self.status).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid status in database: {e}"))
        })?;

        Ok(Booking {
            id: BookingId::new(self.id),
            user_id: self.user_id.map(UserId::new),
            service_type: self.service_type,
            items: self.items,
            express_service: self.express_service,
            pickup_date: self.pickup_date,
            pickup_time: self.pickup_time,
            address: self.address,
            phone: self.phone,
            payment_method: self.payment_method,
            status,
            created_at: self.created_at,
        })
    }
}

/// Repository for booking database operations.
pub struct BookingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BookingRepository<'a> {
    /// Create a new booking repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a validated booking and return its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, booking: &NewBooking) -> Result<BookingId, RepositoryError> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO bookings
                 (user_id, service_type, items, express_service,
                  pickup_date, pickup_time, address, phone, payment_method, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id",
        )
        .bind(booking.user_id.map(|id| id.as_i32()))
        .bind(&booking.service_type)
        .bind(booking.items)
        .bind(booking.express_service)
        .bind(booking.pickup_date)
        .bind(booking.pickup_time)
        .bind(&booking.address)
        .bind(&booking.phone)
        .bind(&booking.payment_method)
        .bind(booking.status.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(BookingId::new(id))
    }

    /// Get a booking by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored status is invalid.
    pub async fn get(&self, id: BookingId) -> Result<Option<Booking>, RepositoryError> {
        let row = sqlx::query_as::<_, BookingRow>(
            "SELECT id, user_id, service_type, items, express_service,
                    pickup_date, pickup_time, address, phone, payment_method,
                    status, created_at
             FROM bookings
             WHERE id = $1",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(BookingRow::into_booking).transpose()
    }

    /// List all bookings, most recent (highest ID) first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_desc(&self) -> Result<Vec<Booking>, RepositoryError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            "SELECT id, user_id, service_type, items, express_service,
                    pickup_date, pickup_time, address, phone, payment_method,
                    status, created_at
             FROM bookings
             ORDER BY id DESC",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(BookingRow::into_booking).collect()
    }

    /// Overwrite a booking's status unconditionally.
    ///
    /// No transition ordering is enforced; any status may replace any other.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no booking has this ID.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE bookings SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id.as_i32())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
