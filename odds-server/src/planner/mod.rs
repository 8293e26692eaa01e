//! Odds planner using backward itinerary enumeration.
//!
//! This module answers: "leaving the departure waypoint now, what is the best
//! chance of reaching the arrival waypoint before the countdown runs out
//! without being caught?"
//!
//! The search runs backwards from the arrival waypoint, enumerating every
//! itinerary that respects the deadline and the fuel autonomy. Each one is
//! scored against the adversary's sightings and the safest (then shortest)
//! is returned, rendered departure-first.

mod format;
mod odds;
mod rank;
mod route_index;
mod search;
mod sighting_index;
mod step;

pub use format::{PlanOutputStep, format_plan};
pub use odds::{Score, score, success_probability};
pub use rank::{Selection, select_best};
pub use route_index::RouteIndex;
pub use search::{Enumeration, PlanEnumerator};
pub use sighting_index::SightingIndex;
pub use step::{PlanStep, StepArena, StepId, Walk};

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{Route, Sighting, Vessel};

/// Outcome of a planning request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OddsReport {
    /// Success percentage in `[0, 100]`; 0 when the arrival is out of reach.
    pub odds: f64,

    /// The winning itinerary, departure first; empty when out of reach.
    pub plan: Vec<PlanOutputStep>,
}

/// Compute the best plan for `vessel` to reach its arrival by `countdown`.
///
/// Inputs are already validated domain values, so this cannot fail: an
/// unreachable arrival is reported as `odds == 0` with an empty plan.
pub fn compute_best_plan(
    vessel: &Vessel,
    countdown: u32,
    routes: &[Route],
    sightings: &[Sighting],
) -> OddsReport {
    let route_index = RouteIndex::from_routes(routes);
    let sighting_index = SightingIndex::from_sightings(sightings);
    debug!(
        routes = route_index.route_count(),
        destinations = route_index.destination_count(),
        watched_days = sighting_index.day_count(),
        "built indexes"
    );

    let enumerator = PlanEnumerator::new(
        vessel.departure(),
        vessel.arrival(),
        vessel.autonomy(),
        &route_index,
    );
    let Enumeration { mut arena, leaves } = enumerator.enumerate(countdown);

    let selection = select_best(&mut arena, &leaves, &sighting_index);
    let plan = selection
        .leaf
        .map(|leaf| format_plan(&arena, leaf, vessel.autonomy()))
        .unwrap_or_default();

    info!(
        departure = %vessel.departure(),
        arrival = %vessel.arrival(),
        countdown,
        itineraries = leaves.len(),
        odds = selection.probability,
        "computed odds"
    );

    OddsReport {
        odds: selection.probability,
        plan,
    }
}
