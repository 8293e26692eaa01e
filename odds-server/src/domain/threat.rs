//! Adversary intelligence: the countdown and the scheduled sightings.

use serde::{Deserialize, Serialize};

use super::{DomainError, Waypoint, day_count};

/// An adversary presence at a waypoint on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SightingRecord")]
pub struct Sighting {
    waypoint: Waypoint,
    day: u32,
}

#[derive(Debug, Deserialize)]
struct SightingRecord {
    #[serde(alias = "planet")]
    waypoint: String,
    day: i64,
}

impl Sighting {
    /// Create a sighting, rejecting negative days.
    pub fn new(waypoint: Waypoint, day: i64) -> Result<Self, DomainError> {
        if day < 0 {
            return Err(DomainError::NegativeSightingDay {
                waypoint: waypoint.to_string(),
                day,
            });
        }

        Ok(Self {
            waypoint,
            day: day_count("sighting day", day)?,
        })
    }

    /// Create a sighting from a raw waypoint name.
    pub fn parse(waypoint: &str, day: i64) -> Result<Self, DomainError> {
        Self::new(Waypoint::parse(waypoint)?, day)
    }

    /// Watched waypoint.
    pub fn waypoint(&self) -> &Waypoint {
        &self.waypoint
    }

    /// Day of the sighting.
    pub fn day(&self) -> u32 {
        self.day
    }
}

impl TryFrom<SightingRecord> for Sighting {
    type Error = DomainError;

    fn try_from(record: SightingRecord) -> Result<Self, Self::Error> {
        Sighting::parse(&record.waypoint, record.day)
    }
}

/// The adversary's plan: how many days remain and where it will be watching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ThreatRecord")]
pub struct ThreatReport {
    countdown: u32,
    sightings: Vec<Sighting>,
}

#[derive(Debug, Deserialize)]
struct ThreatRecord {
    countdown: i64,
    #[serde(default, alias = "bounty_hunters")]
    sightings: Vec<Sighting>,
}

impl ThreatReport {
    /// Create a report, rejecting a negative countdown.
    pub fn new(countdown: i64, sightings: Vec<Sighting>) -> Result<Self, DomainError> {
        if countdown < 0 {
            return Err(DomainError::NegativeCountdown(countdown));
        }

        Ok(Self {
            countdown: day_count("countdown", countdown)?,
            sightings,
        })
    }

    /// Days until the arrival deadline.
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Scheduled sightings, in the order they were reported.
    pub fn sightings(&self) -> &[Sighting] {
        &self.sightings
    }
}

impl TryFrom<ThreatRecord> for ThreatReport {
    type Error = DomainError;

    fn try_from(record: ThreatRecord) -> Result<Self, Self::Error> {
        ThreatReport::new(record.countdown, record.sightings)
    }
}
