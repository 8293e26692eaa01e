//! Itinerary selection.
//!
//! Picks the single best itinerary out of everything the search found.

use std::cmp::Ordering;

use tracing::debug;

use super::odds::{Score, score};
use super::sighting_index::SightingIndex;
use super::step::{StepArena, StepId};

/// The winning itinerary and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Success percentage of the winner, or 0 when nothing was found.
    pub probability: f64,

    /// Leaf step of the winner.
    pub leaf: Option<StepId>,

    /// Step count of the winner, or 0 when nothing was found.
    pub step_count: usize,
}

impl Selection {
    /// The result when no itinerary reaches the arrival in time.
    pub fn unreachable() -> Self {
        Self {
            probability: 0.0,
            leaf: None,
            step_count: 0,
        }
    }
}

/// Select the best itinerary.
///
/// Itineraries are ranked by:
/// 1. Success probability (higher is better)
/// 2. Step count (fewer is better)
///
/// Remaining ties go to the first leaf in `leaves`. Every leaf is scored,
/// so every visited step gets its `was_sighted` flag.
pub fn select_best(
    arena: &mut StepArena,
    leaves: &[StepId],
    sightings: &SightingIndex,
) -> Selection {
    let mut best: Option<(StepId, Score)> = None;

    for &leaf in leaves {
        let candidate = score(arena, leaf, sightings);
        let better = match &best {
            None => true,
            Some((_, current)) => beats(&candidate, current),
        };
        if better {
            best = Some((leaf, candidate));
        }
    }

    let Some((leaf, best)) = best else {
        debug!("no itinerary reaches arrival in time");
        return Selection::unreachable();
    };

    debug!(
        candidates = leaves.len(),
        probability = best.probability,
        encounters = best.encounters,
        steps = best.step_count,
        "selected itinerary"
    );

    Selection {
        probability: best.probability,
        leaf: Some(leaf),
        step_count: best.step_count,
    }
}

/// Whether `candidate` strictly beats `current`.
fn beats(candidate: &Score, current: &Score) -> bool {
    match candidate.probability.total_cmp(&current.probability) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => candidate.step_count < current.step_count,
    }
}
