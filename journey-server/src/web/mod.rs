//! Web layer for the journey planner.
//!
//! Provides the JSON API for station lookup and route planning.

mod dto;
mod instructions;
mod routes;
mod state;

pub use dto::*;
pub use instructions::{instructions, round1};
pub use routes::{AppError, create_router};
pub use state::AppState;
