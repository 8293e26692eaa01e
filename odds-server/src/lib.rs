//! Odds planner server.
//!
//! Answers: "leaving now, what is the best chance of reaching the arrival
//! waypoint before the countdown runs out without being caught?"

pub mod config;
pub mod domain;
pub mod planner;
pub mod store;
pub mod web;
