//! In-memory route store.

use crate::domain::Route;

use super::{RouteStore, StoreError};

/// A fixed list of routes held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRouteStore {
    routes: Vec<Route>,
}

impl MemoryRouteStore {
    /// Create a store serving the given routes.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }
}

impl RouteStore for MemoryRouteStore {
    fn routes(&self) -> Result<Vec<Route>, StoreError> {
        Ok(self.routes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_routes_in_order() {
        let routes = vec![
            Route::parse("Hoth", "Endor", 1).unwrap(),
            Route::parse("Tatooine", "Hoth", 6).unwrap(),
        ];
        let store = MemoryRouteStore::new(routes.clone());

        assert_eq!(store.routes().unwrap(), routes);
    }

    #[test]
    fn default_is_empty() {
        assert!(MemoryRouteStore::default().routes().unwrap().is_empty());
    }
}
