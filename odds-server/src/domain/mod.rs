//! Domain types for the odds planner.
//!
//! This module contains the validated values the planner works with. All
//! types enforce their invariants at construction time, so the planner never
//! sees a negative day, an empty waypoint name or a zero-length jump.

mod error;
mod route;
mod threat;
mod vessel;
mod waypoint;

pub use error::DomainError;
pub use route::Route;
pub use threat::{Sighting, ThreatReport};
pub use vessel::Vessel;
pub use waypoint::{InvalidWaypoint, Waypoint};

/// Convert a validated non-negative day count to the planner's day type.
fn day_count(what: &'static str, value: i64) -> Result<u32, DomainError> {
    u32::try_from(value).map_err(|_| DomainError::OutOfRange { what, value })
}
