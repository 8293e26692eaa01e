//! Domain error types.
//!
//! These errors represent input shapes the planner refuses to work with.
//! They are raised while building domain values, before any planning starts,
//! and are distinct from storage and I/O errors.

use super::InvalidWaypoint;

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A waypoint name was malformed
    #[error(transparent)]
    InvalidWaypoint(#[from] InvalidWaypoint),

    /// Route travel time was zero or negative
    #[error("route {origin} -> {destination}: travel time must be at least 1 day, got {travel_time}")]
    InvalidTravelTime {
        origin: String,
        destination: String,
        travel_time: i64,
    },

    /// Vessel autonomy was negative
    #[error("autonomy must not be negative, got {0}")]
    NegativeAutonomy(i64),

    /// Countdown was negative
    #[error("countdown must not be negative, got {0}")]
    NegativeCountdown(i64),

    /// Sighting day was negative
    #[error("sighting at {waypoint}: day must not be negative, got {day}")]
    NegativeSightingDay { waypoint: String, day: i64 },

    /// A day count does not fit the planner's day range
    #[error("{what} is out of range: {value}")]
    OutOfRange { what: &'static str, value: i64 },
}
