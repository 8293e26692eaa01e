//! Backward itinerary enumeration.
//!
//! Starting from the vessel at the arrival waypoint on the deadline, the
//! search asks "where could the vessel have been the step before?" Every
//! incoming route yields a jump candidate and a refuel-wait candidate; any
//! candidate that needs a negative day or negative fuel is dropped. A branch
//! is complete when it reaches the departure waypoint on day 0.

use tracing::{debug, trace};

use crate::domain::Waypoint;

use super::route_index::RouteIndex;
use super::step::{PlanStep, StepArena, StepId};

/// Every itinerary found by one search.
#[derive(Debug)]
pub struct Enumeration {
    /// All steps built during the search.
    pub arena: StepArena,

    /// Leaf steps (departure waypoint, day 0), in discovery order.
    pub leaves: Vec<StepId>,
}

/// Backward search over `(waypoint, day, fuel)` states.
pub struct PlanEnumerator<'a> {
    departure: &'a Waypoint,
    arrival: &'a Waypoint,
    autonomy: u32,
    index: &'a RouteIndex,
}

impl<'a> PlanEnumerator<'a> {
    /// Create a new enumerator.
    pub fn new(
        departure: &'a Waypoint,
        arrival: &'a Waypoint,
        autonomy: u32,
        index: &'a RouteIndex,
    ) -> Self {
        Self {
            departure,
            arrival,
            autonomy,
            index,
        }
    }

    /// Enumerate every itinerary reaching the arrival waypoint by `countdown`.
    ///
    /// Leaves come out in depth-first pre-order: for each incoming route (in
    /// index order) the jump branch is exhausted before the wait branch. No
    /// state is ever merged, so the same itinerary may appear more than once.
    pub fn enumerate(&self, countdown: u32) -> Enumeration {
        let mut arena = StepArena::new();
        let mut leaves = Vec::new();

        let root = arena.push(PlanStep::arrival(
            self.arrival.clone(),
            countdown,
            self.autonomy,
        ));

        // Explicit stack instead of recursion; children are pushed in reverse
        // so they pop in generation order.
        let mut pending = vec![root];
        let mut children = Vec::new();

        while let Some(id) = pending.pop() {
            let step = &arena[id];

            if self.is_departure(step) {
                leaves.push(id);
                continue;
            }

            for route in self.index.incoming(&step.waypoint) {
                let jump =
                    PlanStep::jump_before(id, step, route.origin().clone(), route.travel_time());
                let wait = PlanStep::wait_before(id, step, self.autonomy);
                children.extend(jump);
                children.extend(wait);
            }

            trace!(
                waypoint = %step.waypoint,
                day = step.day,
                fuel = step.fuel_remaining,
                candidates = children.len(),
                "expanding step"
            );

            let first_child = pending.len();
            for child in children.drain(..) {
                pending.push(self.store(&mut arena, child));
            }
            pending[first_child..].reverse();
        }

        debug!(
            departure = %self.departure,
            arrival = %self.arrival,
            countdown,
            steps = arena.step_count(),
            itineraries = leaves.len(),
            "enumeration complete"
        );

        Enumeration { arena, leaves }
    }

    /// A branch is complete at the departure waypoint on day 0.
    fn is_departure(&self, step: &PlanStep) -> bool {
        &step.waypoint == self.departure && step.day == 0
    }

    /// Store a candidate, cutting its forward link if it sits at the arrival
    /// waypoint: an itinerary ends the first time it reaches arrival.
    fn store(&self, arena: &mut StepArena, mut step: PlanStep) -> StepId {
        if &step.waypoint == self.arrival {
            step.sever();
        }
        arena.push(step)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
