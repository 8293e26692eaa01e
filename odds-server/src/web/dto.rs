//! Data transfer objects for web responses.
//!
//! Field names follow the wire format the bundled frontend reads, which
//! differs from the planner's own names.

use serde::Serialize;

use crate::planner::{OddsReport, PlanOutputStep};

/// Response to an odds request.
#[derive(Debug, Serialize, PartialEq)]
pub struct OddsResponse {
    /// Success percentage in `[0, 100]`
    pub odd: f64,

    /// Winning itinerary, departure first; empty when out of reach
    pub plan: Vec<PlanStepResult>,
}

impl OddsResponse {
    pub fn from_report(report: &OddsReport) -> Self {
        Self {
            odd: report.odds,
            plan: report.plan.iter().map(PlanStepResult::from_step).collect(),
        }
    }
}

/// One step of the itinerary in an odds response.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PlanStepResult {
    /// Waypoint name
    pub planet: String,

    pub day: u32,

    /// Fuel burnt since the last full tank
    pub fuel: u32,

    /// Whether the day is spent refuelling
    pub refill: bool,

    /// Whether the adversary watches this waypoint on this day
    pub hunted: bool,
}

impl PlanStepResult {
    pub fn from_step(step: &PlanOutputStep) -> Self {
        Self {
            planet: step.waypoint.to_string(),
            day: step.day,
            fuel: step.fuel_used,
            refill: step.is_refuel_wait,
            hunted: step.was_sighted,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
