//! Acceptance gate for comfortable routes.
//!
//! A path can minimize the comfort weight and still not be comfortable:
//! with no metro within reach the search happily returns an all-local
//! route. The gate rejects such results after metrics are computed.

use super::config::PlannerConfig;
use super::metrics::RouteMetrics;

/// Why a comfortable route was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GateRejection {
    /// The route never uses the metro
    #[error("route uses no metro")]
    NoMetro,

    /// Too little metro for the number of transfers
    #[error("metro share {metro_percentage:.1}% is too low for {transfers} transfers")]
    LowMetroShare {
        metro_percentage: f64,
        transfers: usize,
    },
}

/// Check whether a route qualifies as comfortable.
pub fn check_comfort(metrics: &RouteMetrics, config: &PlannerConfig) -> Result<(), GateRejection> {
    if metrics.metro_time == 0 {
        return Err(GateRejection::NoMetro);
    }

    let transfers = metrics.num_transfers();
    if metrics.metro_percentage < config.min_metro_percentage && transfers > config.max_transfers {
        return Err(GateRejection::LowMetroShare {
            metro_percentage: metrics.metro_percentage,
            transfers,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, Station};
    use crate::planner::metrics::{Transfer, TransferTarget};

    fn transfers(n: usize) -> Vec<Transfer> {
        (0..n)
            .map(|i| Transfer {
                station: Station::new(format!("S{i}")),
                from_line: Line::new("A"),
                to_line: TransferTarget::Line(Line::new("B")),
                time: 0,
            })
            .collect()
    }

    fn metrics(metro_time: u32, travel_time: u32, num_transfers: usize) -> RouteMetrics {
        let metro_percentage = if travel_time > 0 {
            f64::from(metro_time) / f64::from(travel_time) * 100.0
        } else {
            0.0
        };
        RouteMetrics {
            path: vec![],
            edges: vec![],
            segments: vec![],
            transfers: transfers(num_transfers),
            total_time: travel_time,
            total_cost: 0,
            total_distance: 0.0,
            avg_comfort: 5.0,
            metro_time,
            travel_time,
            metro_percentage,
        }
    }

    #[test]
    fn rejects_route_without_metro() {
        let config = PlannerConfig::default();
        assert_eq!(
            check_comfort(&metrics(0, 30, 0), &config),
            Err(GateRejection::NoMetro)
        );
    }

    #[test]
    fn rejects_low_share_with_many_transfers() {
        let config = PlannerConfig::default();
        let result = check_comfort(&metrics(10, 100, 3), &config);
        assert!(matches!(
            result,
            Err(GateRejection::LowMetroShare { transfers: 3, .. })
        ));
    }

    #[test]
    fn accepts_low_share_with_few_transfers() {
        let config = PlannerConfig::default();
        assert_eq!(check_comfort(&metrics(10, 100, 2), &config), Ok(()));
    }

    #[test]
    fn accepts_high_share_with_many_transfers() {
        let config = PlannerConfig::default();
        assert_eq!(check_comfort(&metrics(20, 100, 5), &config), Ok(()));
    }

    #[test]
    fn threshold_comes_from_config() {
        let config = PlannerConfig::new(0.3, 3.0, 50.0, 50.0, 0);
        assert!(check_comfort(&metrics(40, 100, 1), &config).is_err());
        assert!(check_comfort(&metrics(60, 100, 1), &config).is_ok());
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(GateRejection::NoMetro.to_string(), "route uses no metro");
        let err = GateRejection::LowMetroShare {
            metro_percentage: 12.345,
            transfers: 4,
        };
        assert_eq!(err.to_string(), "metro share 12.3% is too low for 4 transfers");
    }
}
