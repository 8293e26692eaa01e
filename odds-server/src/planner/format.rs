//! Forward, fuel-consumed rendering of an itinerary.

use serde::Serialize;

use crate::domain::Waypoint;

use super::step::{StepArena, StepId};

/// One step of the plan handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanOutputStep {
    pub waypoint: Waypoint,
    pub day: u32,
    /// Fuel burnt since the last full tank.
    pub fuel_used: u32,
    pub is_refuel_wait: bool,
    pub was_sighted: bool,
}

/// Render the itinerary starting at `leaf`, departure first.
///
/// Steps track fuel left relative to a full tank; callers care about fuel
/// consumed, which is the distance from `autonomy`.
pub fn format_plan(arena: &StepArena, leaf: StepId, autonomy: u32) -> Vec<PlanOutputStep> {
    arena
        .walk(leaf)
        .map(|step| PlanOutputStep {
            waypoint: step.waypoint.clone(),
            day: step.day,
            fuel_used: step.fuel_remaining.abs_diff(autonomy),
            is_refuel_wait: step.is_refuel_wait,
            was_sighted: step.was_sighted,
        })
        .collect()
}
