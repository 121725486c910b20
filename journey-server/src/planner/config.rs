//! Planner configuration.

/// Tuning for the comfortable route: the weight factors that steer the
/// search and the thresholds of the acceptance gate applied afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Weight per metro minute.
    pub metro_weight_factor: f64,

    /// Weight per local-train minute.
    pub local_weight_factor: f64,

    /// Fixed weight added to every transfer edge, on top of its minutes.
    pub transfer_penalty: f64,

    /// Metro share of travel time (percent) below which the transfer
    /// limit applies.
    pub min_metro_percentage: f64,

    /// Most transfers a comfortable route may have when its metro share is
    /// below `min_metro_percentage`.
    pub max_transfers: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        metro_weight_factor: f64,
        local_weight_factor: f64,
        transfer_penalty: f64,
        min_metro_percentage: f64,
        max_transfers: usize,
    ) -> Self {
        Self {
            metro_weight_factor,
            local_weight_factor,
            transfer_penalty,
            min_metro_percentage,
            max_transfers,
        }
    }

    /// Returns true if every weight parameter is finite and non-negative.
    ///
    /// Shortest-path search is only correct for non-negative weights.
    pub fn has_valid_weights(&self) -> bool {
        [
            self.metro_weight_factor,
            self.local_weight_factor,
            self.transfer_penalty,
        ]
        .iter()
        .all(|w| w.is_finite() && *w >= 0.0)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            metro_weight_factor: 0.3,
            local_weight_factor: 3.0,
            transfer_penalty: 50.0,
            min_metro_percentage: 20.0,
            max_transfers: 2,
        }
    }
}
