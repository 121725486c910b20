//! Route orchestration.
//!
//! Runs the path finder with the weight strategy for each route type,
//! computes metrics and applies the comfort gate.

use tracing::debug;

use crate::domain::StationId;
use crate::network::TransitGraph;

use super::config::PlannerConfig;
use super::dijkstra::shortest_path;
use super::gate::{GateRejection, check_comfort};
use super::metrics::{RouteMetrics, path_metrics};
use super::strategy::{Cheapest, Comfortable, Fastest, RouteType, WeightStrategy};

/// Error from route planning.
///
/// All variants are per-request outcomes, never process failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// No path exists in the candidate graph
    #[error("no {route_type} route exists")]
    NoPath { route_type: RouteType },

    /// A comfortable path exists but does not qualify
    #[error("comfortable route rejected: {0}")]
    ComfortGateRejected(#[from] GateRejection),

    /// Invalid planning request
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl RouteError {
    /// User-facing explanation of the failure.
    pub fn reason(&self) -> String {
        match self {
            RouteError::NoPath { route_type } => route_type.no_route_reason().to_string(),
            RouteError::ComfortGateRejected(_) => {
                RouteType::Comfortable.no_route_reason().to_string()
            }
            RouteError::InvalidRequest(message) => message.clone(),
        }
    }
}

/// The outcome for every route type between one pair of stations.
#[derive(Debug, Clone)]
pub struct RouteOptions {
    pub fastest: Result<RouteMetrics, RouteError>,
    pub cheapest: Result<RouteMetrics, RouteError>,
    pub comfortable: Result<RouteMetrics, RouteError>,
}

impl RouteOptions {
    /// The outcome for one route type.
    pub fn get(&self, route_type: RouteType) -> &Result<RouteMetrics, RouteError> {
        match route_type {
            RouteType::Fastest => &self.fastest,
            RouteType::Cheapest => &self.cheapest,
            RouteType::Comfortable => &self.comfortable,
        }
    }

    /// All outcomes, in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (RouteType, &Result<RouteMetrics, RouteError>)> {
        RouteType::ALL.into_iter().map(|rt| (rt, self.get(rt)))
    }

    /// The routes that were found.
    pub fn found(&self) -> impl Iterator<Item = (RouteType, &RouteMetrics)> {
        self.iter()
            .filter_map(|(rt, result)| result.as_ref().ok().map(|m| (rt, m)))
    }
}

/// Route planner over a shared transit graph.
///
/// Holds only borrows, so it is cheap to create per request.
pub struct Planner<'a> {
    graph: &'a TransitGraph,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a TransitGraph, config: &'a PlannerConfig) -> Self {
        Self { graph, config }
    }

    /// Plan one route type between two stations.
    pub fn plan(
        &self,
        from: StationId,
        to: StationId,
        route_type: RouteType,
    ) -> Result<RouteMetrics, RouteError> {
        self.validate(from, to)?;

        let metrics = match route_type {
            RouteType::Fastest => self.find(from, to, route_type, &Fastest)?,
            RouteType::Cheapest => self.find(from, to, route_type, &Cheapest)?,
            RouteType::Comfortable => {
                let strategy = Comfortable::from_config(self.config);
                let metrics = self.find(from, to, route_type, &strategy)?;
                check_comfort(&metrics, self.config)?;
                metrics
            }
        };

        debug!(
            route_type = %route_type,
            from = %self.graph.station(from),
            to = %self.graph.station(to),
            time = metrics.total_time,
            cost = metrics.total_cost,
            transfers = metrics.num_transfers(),
            "route found"
        );

        Ok(metrics)
    }

    /// Plan every route type. A failure of one never affects the others.
    pub fn plan_all(&self, from: StationId, to: StationId) -> RouteOptions {
        RouteOptions {
            fastest: self.plan(from, to, RouteType::Fastest),
            cheapest: self.plan(from, to, RouteType::Cheapest),
            comfortable: self.plan(from, to, RouteType::Comfortable),
        }
    }

    /// Check the request preconditions.
    fn validate(&self, from: StationId, to: StationId) -> Result<(), RouteError> {
        for id in [from, to] {
            if !self.graph.contains_id(id) {
                return Err(RouteError::InvalidRequest(format!(
                    "station id {} is not in the network",
                    id.0
                )));
            }
        }
        if from == to {
            return Err(RouteError::InvalidRequest(
                "Source and destination cannot be the same".to_string(),
            ));
        }
        if !self.config.has_valid_weights() {
            return Err(RouteError::InvalidRequest(
                "planner weights must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Search with one strategy and compute metrics for the result.
    fn find<S: WeightStrategy>(
        &self,
        from: StationId,
        to: StationId,
        route_type: RouteType,
        strategy: &S,
    ) -> Result<RouteMetrics, RouteError> {
        let path = shortest_path(self.graph, from, to, strategy).ok_or_else(|| {
            debug!(route_type = %route_type, "no path in candidate graph");
            RouteError::NoPath { route_type }
        })?;

        path_metrics(self.graph, &path).ok_or(RouteError::NoPath { route_type })
    }
}
