//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::Vessel;
use crate::store::RouteStore;

/// Shared application state.
///
/// The route store is read on every request; the vessel is fixed for the
/// lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    /// Route network source
    pub store: Arc<dyn RouteStore>,

    /// Vessel the odds are computed for
    pub vessel: Arc<Vessel>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: impl RouteStore + 'static, vessel: Vessel) -> Self {
        Self {
            store: Arc::new(store),
            vessel: Arc::new(vessel),
        }
    }
}
