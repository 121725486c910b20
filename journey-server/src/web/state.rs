//! Application state for the web layer.

use std::sync::Arc;

use crate::network::TransitGraph;
use crate::planner::{Planner, PlannerConfig};

/// Shared application state.
///
/// The graph is immutable after startup, so handlers share it without locks.
#[derive(Clone)]
pub struct AppState {
    /// The transit network
    pub graph: Arc<TransitGraph>,

    /// Route planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: TransitGraph, config: PlannerConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            config: Arc::new(config),
        }
    }

    /// A planner borrowing this state.
    pub fn planner(&self) -> Planner<'_> {
        Planner::new(&self.graph, &self.config)
    }
}
