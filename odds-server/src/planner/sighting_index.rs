//! Day-keyed index of adversary sightings.

use std::collections::{HashMap, HashSet};

use crate::domain::{Sighting, Waypoint};

/// Waypoints watched by the adversary, grouped by day.
#[derive(Debug, Default)]
pub struct SightingIndex {
    by_day: HashMap<u32, HashSet<Waypoint>>,
}

impl SightingIndex {
    /// Build the index. Repeated `(waypoint, day)` pairs collapse into one.
    pub fn from_sightings<'a>(sightings: impl IntoIterator<Item = &'a Sighting>) -> Self {
        let mut by_day: HashMap<u32, HashSet<Waypoint>> = HashMap::new();

        for sighting in sightings {
            by_day
                .entry(sighting.day())
                .or_default()
                .insert(sighting.waypoint().clone());
        }

        Self { by_day }
    }

    /// Check whether the waypoint is watched on the given day.
    pub fn is_watched(&self, waypoint: &Waypoint, day: u32) -> bool {
        self.by_day
            .get(&day)
            .is_some_and(|watched| watched.contains(waypoint))
    }

    /// Number of distinct days with at least one sighting.
    pub fn day_count(&self) -> usize {
        self.by_day.len()
    }
}
