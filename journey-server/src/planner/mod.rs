//! Journey planner.
//!
//! This module implements the route computation engine: three weight
//! strategies (fastest, cheapest, comfortable) drive a Dijkstra search over
//! the transit graph, and each resulting path is segmented into an
//! itinerary with aggregate metrics. Comfortable routes additionally pass
//! an acceptance gate.

mod config;
mod dijkstra;
mod gate;
mod metrics;
mod search;
mod strategy;


pub use config::PlannerConfig;
pub use dijkstra::shortest_path;
pub use gate::{GateRejection, check_comfort};
pub use metrics::{RouteMetrics, Segment, Transfer, TransferTarget, TraversedEdge, path_metrics};
pub use search::{Planner, RouteError, RouteOptions};
pub use strategy::{
    Cheapest, Comfortable, Fastest, RouteType, UnknownRouteType, WeightStrategy,
};
