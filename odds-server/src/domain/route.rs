//! Hyperspace route type.

use serde::{Deserialize, Serialize};

use super::{DomainError, Waypoint, day_count};

/// A directed, timed edge between two waypoints.
///
/// Travel time is at least one day; a zero-length jump would let the
/// planner revisit the same day forever.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RouteRecord")]
pub struct Route {
    origin: Waypoint,
    destination: Waypoint,
    travel_time: u32,
}

/// Unvalidated wire shape of a route.
#[derive(Debug, Deserialize)]
struct RouteRecord {
    origin: String,
    destination: String,
    travel_time: i64,
}

impl Route {
    /// Create a route, rejecting travel times below one day.
    pub fn new(
        origin: Waypoint,
        destination: Waypoint,
        travel_time: i64,
    ) -> Result<Self, DomainError> {
        if travel_time < 1 {
            return Err(DomainError::InvalidTravelTime {
                origin: origin.to_string(),
                destination: destination.to_string(),
                travel_time,
            });
        }

        let travel_time = day_count("travel time", travel_time)?;

        Ok(Self {
            origin,
            destination,
            travel_time,
        })
    }

    /// Create a route from raw names, validating both waypoints.
    pub fn parse(origin: &str, destination: &str, travel_time: i64) -> Result<Self, DomainError> {
        Self::new(
            Waypoint::parse(origin)?,
            Waypoint::parse(destination)?,
            travel_time,
        )
    }

    /// Waypoint the route departs from.
    pub fn origin(&self) -> &Waypoint {
        &self.origin
    }

    /// Waypoint the route arrives at.
    pub fn destination(&self) -> &Waypoint {
        &self.destination
    }

    /// Days spent in hyperspace (and units of fuel burnt).
    pub fn travel_time(&self) -> u32 {
        self.travel_time
    }
}

impl TryFrom<RouteRecord> for Route {
    type Error = DomainError;

    fn try_from(record: RouteRecord) -> Result<Self, Self::Error> {
        Route::parse(&record.origin, &record.destination, record.travel_time)
    }
}
