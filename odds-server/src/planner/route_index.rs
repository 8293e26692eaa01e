//! Route index for arrival-first plan search.
//!
//! Every itinerary ends with the vessel at the arrival waypoint, so the
//! search runs backwards from there. Indexing routes by their destination
//! gives the search, for any waypoint, every place it could have come from.

use std::collections::HashMap;

use crate::domain::{Route, Waypoint};

/// Index of routes keyed by the waypoint they arrive at.
///
/// This allows O(1) lookup of "which routes lead into waypoint X?". Routes
/// keep their input order within each key; the search explores them in that
/// order, which decides which itinerary is met first among equals.
#[derive(Debug, Default)]
pub struct RouteIndex {
    /// Map from waypoint -> routes whose destination it is.
    incoming: HashMap<Waypoint, Vec<Route>>,
}

impl RouteIndex {
    /// Build the index from a list of routes.
    pub fn from_routes<'a>(routes: impl IntoIterator<Item = &'a Route>) -> Self {
        let mut incoming: HashMap<Waypoint, Vec<Route>> = HashMap::new();

        for route in routes {
            incoming
                .entry(route.destination().clone())
                .or_default()
                .push(route.clone());
        }

        Self { incoming }
    }

    /// Get routes arriving at a waypoint.
    pub fn incoming(&self, waypoint: &Waypoint) -> &[Route] {
        self.incoming
            .get(waypoint)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Get the number of waypoints with at least one incoming route.
    pub fn destination_count(&self) -> usize {
        self.incoming.len()
    }

    /// Get the total number of indexed routes.
    pub fn route_count(&self) -> usize {
        self.incoming.values().map(|v| v.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(s: &str) -> Waypoint {
        Waypoint::parse(s).unwrap()
    }

    fn route(origin: &str, destination: &str, travel_time: i64) -> Route {
        Route::parse(origin, destination, travel_time).unwrap()
    }

    #[test]
    fn empty_routes() {
        let index = RouteIndex::from_routes(&Vec::<Route>::new());

        assert_eq!(index.destination_count(), 0);
        assert_eq!(index.route_count(), 0);
        assert!(index.incoming(&waypoint("Endor")).is_empty());
    }

    #[test]
    fn groups_by_destination() {
        let routes = vec![
            route("Tatooine", "Dagobah", 6),
            route("Dagobah", "Endor", 4),
            route("Dagobah", "Hoth", 1),
            route("Hoth", "Endor", 1),
            route("Tatooine", "Hoth", 6),
        ];

        let index = RouteIndex::from_routes(&routes);

        assert_eq!(index.destination_count(), 3);
        assert_eq!(index.route_count(), 5);
        for (destination, expected) in [("Dagobah", 1), ("Endor", 2), ("Hoth", 2)] {
            let incoming = index.incoming(&waypoint(destination));
            assert_eq!(incoming.len(), expected);
            assert!(incoming.iter().all(|r| r.destination().as_str() == destination));
        }
    }

    #[test]
    fn preserves_input_order_per_destination() {
        let routes = vec![
            route("Dagobah", "Endor", 4),
            route("Tatooine", "Hoth", 6),
            route("Hoth", "Endor", 1),
        ];

        let index = RouteIndex::from_routes(&routes);

        let origins: Vec<_> = index
            .incoming(&waypoint("Endor"))
            .iter()
            .map(|r| r.origin().as_str())
            .collect();
        assert_eq!(origins, vec!["Dagobah", "Hoth"]);
    }

    #[test]
    fn origin_only_waypoint_has_no_incoming_routes() {
        let routes = vec![route("Tatooine", "Hoth", 6)];

        let index = RouteIndex::from_routes(&routes);

        assert_eq!(index.incoming(&waypoint("Hoth")).len(), 1);
        assert!(index.incoming(&waypoint("Tatooine")).is_empty());
        assert_eq!(index.destination_count(), 1);
    }

    #[test]
    fn keeps_duplicate_routes() {
        let routes = vec![route("Hoth", "Endor", 1), route("Hoth", "Endor", 1)];

        let index = RouteIndex::from_routes(&routes);

        assert_eq!(index.incoming(&waypoint("Endor")).len(), 2);
    }
}
