//! Route storage.
//!
//! The planner needs every route on each request. Routes are persisted in a
//! SQLite database shipped next to the vessel configuration; an in-memory
//! store serves tests and embedders.

mod error;
mod memory;
mod sqlite;

pub use error::StoreError;
pub use memory::MemoryRouteStore;
pub use sqlite::SqliteRouteStore;

use crate::domain::Route;

/// Source of the route network.
///
/// Implementations must be shareable across request handlers.
pub trait RouteStore: Send + Sync {
    /// Load every route, in storage order.
    fn routes(&self) -> Result<Vec<Route>, StoreError>;
}
