//! Web layer for the odds planner.
//!
//! Exposes the vessel, its route network and the odds computation over HTTP.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
