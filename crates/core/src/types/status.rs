//! Booking status enumeration.

use serde::{Deserialize, Serialize};

/// Booking progress status.
///
/// A closed four-value set. New bookings start at `PickedUp`; the admin
/// console moves them through the remaining values. The visible sequence
/// (`PICKED_UP → IN_PROCESS → OUT_FOR_DELIVERY → DELIVERED`) is a suggested
/// ordering only: no transition graph is enforced, and any status may be
/// overwritten with any other, including backward. [`FromStr`] is the single
/// parse/validate point for status strings, so a transition graph could be
/// added here later without touching call sites.
///
/// [`FromStr`]: std::str::FromStr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Items collected from the customer. Initial status of every booking.
    #[default]
    PickedUp,
    /// Items being cleaned.
    InProcess,
    /// Items on the delivery vehicle.
    OutForDelivery,
    /// Items returned to the customer.
    Delivered,
}

impl BookingStatus {
    /// All statuses in suggested display order.
    pub const ALL: [Self; 4] = [
        Self::PickedUp,
        Self::InProcess,
        Self::OutForDelivery,
        Self::Delivered,
    ];

    /// The wire name of this status (`PICKED_UP`, `IN_PROCESS`, ...).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PickedUp => "PICKED_UP",
            Self::InProcess => "IN_PROCESS",
            Self::OutForDelivery => "OUT_FOR_DELIVERY",
            Self::Delivered => "DELIVERED",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PICKED_UP" => Ok(Self::PickedUp),
            "IN_PROCESS" => Ok(Self::InProcess),
            "OUT_FOR_DELIVERY" => Ok(Self::OutForDelivery),
            "DELIVERED" => Ok(Self::Delivered),
            other => Err(InvalidStatus(other.to_owned())),
        }
    }
}

/// Error returned when a string is not one of the four booking statuses.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid status: {0}")]
pub struct InvalidStatus(pub String);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_all_statuses() {
        for status in BookingStatus::ALL {
            assert_eq!(BookingStatus::from_str(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(BookingStatus::from_str("BOGUS").is_err());
        assert!(BookingStatus::from_str("picked_up").is_err());
        assert!(BookingStatus::from_str("").is_err());
    }

    #[test]
    fn test_default_is_picked_up() {
        assert_eq!(BookingStatus::default(), BookingStatus::PickedUp);
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_string(&BookingStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"OUT_FOR_DELIVERY\"");

        let parsed: BookingStatus = serde_json::from_str("\"IN_PROCESS\"").unwrap();
        assert_eq!(parsed, BookingStatus::InProcess);
    }

    #[test]
    fn test_no_transition_graph() {
        // Any status string parses regardless of the booking's current state;
        // backward movement is allowed by design.
        let forward = BookingStatus::from_str("IN_PROCESS").unwrap();
        let backward = BookingStatus::from_str("PICKED_UP").unwrap();
        assert_eq!(forward, BookingStatus::InProcess);
        assert_eq!(backward, BookingStatus::PickedUp);
    }
}
