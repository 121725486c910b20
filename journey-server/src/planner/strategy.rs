//! Route types and the weight strategies that drive the search.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Connection, Mode};

use super::config::PlannerConfig;

/// The optimization criterion for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    /// Minimum total time.
    #[default]
    Fastest,
    /// Minimum fare, local trains only.
    Cheapest,
    /// Metro-heavy, transfer-light.
    Comfortable,
}

impl RouteType {
    /// All route types, in reporting order.
    pub const ALL: [RouteType; 3] = [RouteType::Fastest, RouteType::Cheapest, RouteType::Comfortable];

    /// Returns the lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            RouteType::Fastest => "fastest",
            RouteType::Cheapest => "cheapest",
            RouteType::Comfortable => "comfortable",
        }
    }

    /// User-facing explanation for why no route of this type exists.
    pub fn no_route_reason(self) -> &'static str {
        match self {
            RouteType::Fastest => "No fastest route found",
            RouteType::Cheapest => {
                "No local train route available. This journey may require Metro connections."
            }
            RouteType::Comfortable => {
                "No comfortable AC Metro route available. This journey requires local trains only. Try \"Fastest\" or \"Cheapest\" options."
            }
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown route type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route type: {0}")]
pub struct UnknownRouteType(String);

impl FromStr for RouteType {
    type Err = UnknownRouteType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fastest" => Ok(RouteType::Fastest),
            "cheapest" => Ok(RouteType::Cheapest),
            "comfortable" => Ok(RouteType::Comfortable),
            _ => Err(UnknownRouteType(s.to_string())),
        }
    }
}

/// Maps connections to search weights.
///
/// Implementations must return finite, non-negative weights.
pub trait WeightStrategy {
    /// Whether the connection belongs to the candidate graph.
    fn admits(&self, _connection: &Connection) -> bool {
        true
    }

    /// Weight of traversing the connection.
    fn weight(&self, connection: &Connection) -> f64;
}

/// Minimizes minutes. Cost plays no part.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fastest;

impl WeightStrategy for Fastest {
    fn weight(&self, connection: &Connection) -> f64 {
        f64::from(connection.time)
    }
}

/// Minimizes fare over the local-train network.
///
/// Metro edges are removed from the candidate graph rather than penalized,
/// so no weight magnitude can make the route use them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cheapest;

impl WeightStrategy for Cheapest {
    fn admits(&self, connection: &Connection) -> bool {
        match connection.mode {
            Mode::LocalTrain | Mode::Transfer => true,
            Mode::Metro => false,
        }
    }

    fn weight(&self, connection: &Connection) -> f64 {
        f64::from(connection.cost)
    }
}

/// Prefers metro, discourages local trains and penalizes every transfer.
#[derive(Debug, Clone, Copy)]
pub struct Comfortable {
    metro_factor: f64,
    local_factor: f64,
    transfer_penalty: f64,
}

impl Comfortable {
    /// Take the weight factors from the planner configuration.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self {
            metro_factor: config.metro_weight_factor,
            local_factor: config.local_weight_factor,
            transfer_penalty: config.transfer_penalty,
        }
    }
}

impl Default for Comfortable {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}

impl WeightStrategy for Comfortable {
    fn weight(&self, connection: &Connection) -> f64 {
        let minutes = f64::from(connection.time);
        match connection.mode {
            Mode::Metro => minutes * self.metro_factor,
            Mode::Transfer => self.transfer_penalty + minutes,
            Mode::LocalTrain => minutes * self.local_factor,
        }
    }
}
