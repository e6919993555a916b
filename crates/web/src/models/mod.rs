//! Domain models for the booking site.
//!
//! These types represent validated domain objects separate from database row
//! types and from the JSON payloads accepted at the HTTP boundary.

pub mod booking;
pub mod session;
pub mod user;

pub use booking::{Booking, BookingView, NewBooking};
pub use session::{CurrentAdmin, CurrentUser, keys as session_keys};
pub use user::User;
