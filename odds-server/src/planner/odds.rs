//! Encounter counting and the success probability law.
//!
//! Each encounter with the adversary is an independent 10% chance of
//! capture, so surviving `k` encounters has probability `0.9^k`.

use super::sighting_index::SightingIndex;
use super::step::{StepArena, StepId};

/// Score of one itinerary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Chance of success as a percentage in `[0, 100]`.
    pub probability: f64,

    /// Steps spent where the adversary was watching.
    pub encounters: u32,

    /// Number of steps in the itinerary, waiting days included.
    pub step_count: usize,
}

/// Success percentage after `encounters` independent encounters.
///
/// Exact for the small counts that matter in practice: 100, 90, 81, ...
pub fn success_probability(encounters: u32) -> f64 {
    (0..encounters).fold(100.0, |odds, _| odds * 9.0 / 10.0)
}

/// Score the itinerary starting at `leaf`, marking each watched step as
/// sighted.
pub fn score(arena: &mut StepArena, leaf: StepId, sightings: &SightingIndex) -> Score {
    let mut encounters = 0;
    let mut step_count = 0;
    let mut cursor = Some(leaf);

    while let Some(id) = cursor {
        let step = &mut arena[id];
        step_count += 1;

        if sightings.is_watched(&step.waypoint, step.day) {
            step.was_sighted = true;
            encounters += 1;
        }

        cursor = step.next();
    }

    Score {
        probability: success_probability(encounters),
        encounters,
        step_count,
    }
}
