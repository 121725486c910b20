//! Domain types for the journey planner.
//!
//! This module contains the core domain model types: stations, lines,
//! travel modes and connections. Connections enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod connection;
mod error;
mod mode;
mod station;

pub use connection::{Connection, MAX_COMFORT};
pub use error::DomainError;
pub use mode::{Line, Mode, TRAVEL_EDGE_DISTANCE_KM};
pub use station::{Station, StationId};
