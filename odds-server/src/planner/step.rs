//! Plan steps and the arena that owns them.
//!
//! The search builds itineraries backwards, so each step points forward in
//! time to the step it was derived from. Many itineraries share the steps
//! near the arrival waypoint; keeping every step in one arena and linking by
//! index lets them share without reference counting.

use std::ops::{Index, IndexMut};

use crate::domain::Waypoint;

/// Index of a step inside a [`StepArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(usize);

/// One waypoint visit in a candidate itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStep {
    /// Where the vessel is.
    pub waypoint: Waypoint,

    /// Day of the visit (0 = departure).
    pub day: u32,

    /// Fuel left, counted in days of travel since the last full tank.
    pub fuel_remaining: u32,

    /// Whether this step is a full day spent refuelling in place.
    pub is_refuel_wait: bool,

    /// Whether the adversary watches this waypoint on this day.
    /// Filled in when the itinerary is scored.
    pub was_sighted: bool,

    /// The following step in time, or `None` at the arrival waypoint.
    next: Option<StepId>,
}

impl PlanStep {
    /// The seed of a backward search: the vessel at the arrival waypoint on
    /// the deadline with a full tank.
    pub fn arrival(waypoint: Waypoint, day: u32, autonomy: u32) -> Self {
        Self {
            waypoint,
            day,
            fuel_remaining: autonomy,
            is_refuel_wait: false,
            was_sighted: false,
            next: None,
        }
    }

    /// A hyperspace jump of `travel_time` days from `origin` that ends at `next`.
    ///
    /// Returns `None` if the jump would have to start before day 0 or burn
    /// more fuel than is left.
    pub fn jump_before(
        next_id: StepId,
        next: &PlanStep,
        origin: Waypoint,
        travel_time: u32,
    ) -> Option<Self> {
        Some(Self {
            waypoint: origin,
            day: next.day.checked_sub(travel_time)?,
            fuel_remaining: next.fuel_remaining.checked_sub(travel_time)?,
            is_refuel_wait: false,
            was_sighted: false,
            next: Some(next_id),
        })
    }

    /// A day spent refuelling at the same waypoint, the day before `next`.
    ///
    /// Returns `None` if that day would fall before day 0.
    pub fn wait_before(next_id: StepId, next: &PlanStep, autonomy: u32) -> Option<Self> {
        Some(Self {
            waypoint: next.waypoint.clone(),
            day: next.day.checked_sub(1)?,
            fuel_remaining: autonomy,
            is_refuel_wait: true,
            was_sighted: false,
            next: Some(next_id),
        })
    }

    /// The following step in time.
    pub fn next(&self) -> Option<StepId> {
        self.next
    }

    /// Drop the forward link, making this step the end of every itinerary
    /// that passes through it.
    pub fn sever(&mut self) {
        self.next = None;
    }
}

/// Owner of every step produced by one search.
#[derive(Debug, Default)]
pub struct StepArena {
    steps: Vec<PlanStep>,
}

impl StepArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a step and return its id.
    pub fn push(&mut self, step: PlanStep) -> StepId {
        let id = StepId(self.steps.len());
        self.steps.push(step);
        id
    }

    /// Number of stored steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Iterate an itinerary forward in time, from `from` to its severed end.
    pub fn walk(&self, from: StepId) -> Walk<'_> {
        Walk {
            arena: self,
            cursor: Some(from),
        }
    }
}

impl Index<StepId> for StepArena {
    type Output = PlanStep;

    fn index(&self, id: StepId) -> &PlanStep {
        &self.steps[id.0]
    }
}

impl IndexMut<StepId> for StepArena {
    fn index_mut(&mut self, id: StepId) -> &mut PlanStep {
        &mut self.steps[id.0]
    }
}

/// Forward iterator over the steps of one itinerary.
pub struct Walk<'a> {
    arena: &'a StepArena,
    cursor: Option<StepId>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a PlanStep;

    fn next(&mut self) -> Option<Self::Item> {
        let step = &self.arena[self.cursor?];
        self.cursor = step.next;
        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(s: &str) -> Waypoint {
        Waypoint::parse(s).unwrap()
    }

    #[test]
    fn jump_burns_fuel_and_days() {
        let mut arena = StepArena::new();
        let endor = arena.push(PlanStep::arrival(waypoint("Endor"), 8, 6));

        let jump = PlanStep::jump_before(endor, &arena[endor], waypoint("Hoth"), 1).unwrap();

        assert_eq!(jump.waypoint, waypoint("Hoth"));
        assert_eq!(jump.day, 7);
        assert_eq!(jump.fuel_remaining, 5);
        assert!(!jump.is_refuel_wait);
        assert_eq!(jump.next(), Some(endor));
    }

    #[test]
    fn jump_rejects_negative_day_or_fuel() {
        let mut arena = StepArena::new();
        let endor = arena.push(PlanStep::arrival(waypoint("Endor"), 3, 6));
        assert!(PlanStep::jump_before(endor, &arena[endor], waypoint("Hoth"), 4).is_none());

        let endor = arena.push(PlanStep::arrival(waypoint("Endor"), 10, 2));
        assert!(PlanStep::jump_before(endor, &arena[endor], waypoint("Hoth"), 3).is_none());
    }

    #[test]
    fn wait_refuels_to_autonomy() {
        let mut arena = StepArena::new();
        let hoth = arena.push(PlanStep {
            fuel_remaining: 1,
            ..PlanStep::arrival(waypoint("Hoth"), 7, 6)
        });

        let wait = PlanStep::wait_before(hoth, &arena[hoth], 6).unwrap();

        assert_eq!(wait.waypoint, waypoint("Hoth"));
        assert_eq!(wait.day, 6);
        assert_eq!(wait.fuel_remaining, 6);
        assert!(wait.is_refuel_wait);
    }

    #[test]
    fn wait_rejects_day_before_departure() {
        let mut arena = StepArena::new();
        let hoth = arena.push(PlanStep::arrival(waypoint("Hoth"), 0, 6));
        assert!(PlanStep::wait_before(hoth, &arena[hoth], 6).is_none());
    }

    #[test]
    fn walk_follows_links_until_severed() {
        let mut arena = StepArena::new();
        let endor = arena.push(PlanStep::arrival(waypoint("Endor"), 2, 6));
        let hoth = PlanStep::jump_before(endor, &arena[endor], waypoint("Hoth"), 1).unwrap();
        let hoth = arena.push(hoth);
        let tatooine = PlanStep::jump_before(hoth, &arena[hoth], waypoint("Tatooine"), 1).unwrap();
        let tatooine = arena.push(tatooine);

        let days: Vec<_> = arena.walk(tatooine).map(|s| s.day).collect();
        assert_eq!(days, vec![0, 1, 2]);

        arena[hoth].sever();
        let days: Vec<_> = arena.walk(tatooine).map(|s| s.day).collect();
        assert_eq!(days, vec![0, 1]);
        assert_eq!(arena.step_count(), 3);
    }
}
