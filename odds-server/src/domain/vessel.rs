//! Vessel parameters.

use serde::{Deserialize, Serialize};

use super::{DomainError, Waypoint, day_count};

/// The travelling vessel: where it starts, where it must go, and how many
/// days it can travel before a mandatory refuel stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VesselRecord")]
pub struct Vessel {
    autonomy: u32,
    departure: Waypoint,
    arrival: Waypoint,
}

#[derive(Debug, Deserialize)]
struct VesselRecord {
    autonomy: i64,
    departure: String,
    arrival: String,
}

impl Vessel {
    /// Create a vessel, rejecting negative autonomy.
    pub fn new(autonomy: i64, departure: Waypoint, arrival: Waypoint) -> Result<Self, DomainError> {
        if autonomy < 0 {
            return Err(DomainError::NegativeAutonomy(autonomy));
        }

        Ok(Self {
            autonomy: day_count("autonomy", autonomy)?,
            departure,
            arrival,
        })
    }

    /// Create a vessel from raw waypoint names.
    pub fn parse(autonomy: i64, departure: &str, arrival: &str) -> Result<Self, DomainError> {
        Self::new(
            autonomy,
            Waypoint::parse(departure)?,
            Waypoint::parse(arrival)?,
        )
    }

    /// Days of travel on a full tank.
    pub fn autonomy(&self) -> u32 {
        self.autonomy
    }

    /// Waypoint the vessel leaves on day 0.
    pub fn departure(&self) -> &Waypoint {
        &self.departure
    }

    /// Waypoint the vessel must reach.
    pub fn arrival(&self) -> &Waypoint {
        &self.arrival
    }
}

impl TryFrom<VesselRecord> for Vessel {
    type Error = DomainError;

    fn try_from(record: VesselRecord) -> Result<Self, Self::Error> {
        Vessel::parse(record.autonomy, &record.departure, &record.arrival)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_vessel() {
        let vessel = Vessel::parse(6, "Tatooine", "Endor").unwrap();
        assert_eq!(vessel.autonomy(), 6);
        assert_eq!(vessel.departure().as_str(), "Tatooine");
        assert_eq!(vessel.arrival().as_str(), "Endor");
    }

    #[test]
    fn zero_autonomy_is_allowed() {
        assert!(Vessel::parse(0, "Tatooine", "Endor").is_ok());
    }

    #[test]
    fn reject_negative_autonomy() {
        assert_eq!(
            Vessel::parse(-1, "Tatooine", "Endor"),
            Err(DomainError::NegativeAutonomy(-1))
        );
    }

    #[test]
    fn departure_may_equal_arrival() {
        assert!(Vessel::parse(3, "Hoth", "Hoth").is_ok());
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let vessel: Vessel = serde_json::from_str(
            r#"{"autonomy": 6, "departure": "Tatooine", "arrival": "Endor", "routes_db": "universe.db"}"#,
        )
        .unwrap();
        assert_eq!(vessel, Vessel::parse(6, "Tatooine", "Endor").unwrap());
    }
}
