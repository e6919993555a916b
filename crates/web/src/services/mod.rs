//! Business logic services.
//!
//! # Services
//!
//! - `auth` - Customer registration and login (argon2 password hashing)
//! - `bookings` - Booking validation, creation, lookup, and status updates
//! - `export` - Append-only tabular order log (not wired into the booking flow)

pub mod auth;
pub mod bookings;
pub mod export;

pub use auth::{AuthError, AuthService};
pub use bookings::{BookingDraft, BookingError, BookingService};
pub use export::OrderLog;
