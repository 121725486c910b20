//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Connection;
use crate::planner::{RouteMetrics, RouteOptions, RouteType, Segment, Transfer, TraversedEdge};

use super::instructions::{instructions, round1};

/// Request to plan a journey.
#[derive(Debug, Deserialize)]
pub struct JourneyRequest {
    /// Origin station name (resolved loosely)
    #[serde(default)]
    pub from: String,

    /// Destination station name (resolved loosely)
    #[serde(default)]
    pub to: String,

    /// "fastest", "cheapest" or "comfortable"; defaults to fastest
    #[serde(rename = "routeType")]
    pub route_type: Option<String>,
}

/// A segment of a route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub mode: String,
    pub line: String,
    pub start: String,
    pub end: String,
    pub stops: u32,
    pub time: u32,
}

impl SegmentResult {
    pub fn from_segment(seg: &Segment) -> Self {
        Self {
            mode: seg.mode.to_string(),
            line: seg.line.to_string(),
            start: seg.start.to_string(),
            end: seg.end.to_string(),
            stops: seg.stops,
            time: seg.time,
        }
    }
}

/// A transfer within a route.
#[derive(Debug, Serialize)]
pub struct TransferResult {
    pub station: String,
    pub from_line: String,
    /// Next line, or "Transfer" for an interchange edge
    pub to_line: String,
    pub time: u32,
}

impl TransferResult {
    pub fn from_transfer(t: &Transfer) -> Self {
        Self {
            station: t.station.to_string(),
            from_line: t.from_line.to_string(),
            to_line: t.to_line.label().to_string(),
            time: t.time,
        }
    }
}

/// One traversed edge with its attributes.
#[derive(Debug, Serialize)]
pub struct EdgeResult {
    pub from: String,
    pub to: String,
    pub data: Connection,
}

impl EdgeResult {
    pub fn from_edge(edge: &TraversedEdge) -> Self {
        Self {
            from: edge.from.to_string(),
            to: edge.to.to_string(),
            data: edge.connection.clone(),
        }
    }
}

/// Full metrics of a route.
#[derive(Debug, Serialize)]
pub struct RouteMetricsResult {
    pub path: Vec<String>,
    pub segments: Vec<SegmentResult>,
    pub edges: Vec<EdgeResult>,
    pub total_time: u32,
    pub total_cost: u32,
    pub total_distance: f64,
    pub avg_comfort: f64,
    pub num_transfers: usize,
    pub transfers: Vec<TransferResult>,
    pub metro_time: u32,
    pub metro_percentage: f64,
}

impl RouteMetricsResult {
    pub fn from_metrics(m: &RouteMetrics) -> Self {
        Self {
            path: m.path.iter().map(|s| s.to_string()).collect(),
            segments: m.segments.iter().map(SegmentResult::from_segment).collect(),
            edges: m.edges.iter().map(EdgeResult::from_edge).collect(),
            total_time: m.total_time,
            total_cost: m.total_cost,
            total_distance: round1(m.total_distance),
            avg_comfort: round1(m.avg_comfort),
            num_transfers: m.num_transfers(),
            transfers: m.transfers.iter().map(TransferResult::from_transfer).collect(),
            metro_time: m.metro_time,
            metro_percentage: round1(m.metro_percentage),
        }
    }
}

/// Full metrics for every route type; `null` where no route exists.
#[derive(Debug, Serialize)]
pub struct Alternatives {
    pub fastest: Option<RouteMetricsResult>,
    pub cheapest: Option<RouteMetricsResult>,
    pub comfortable: Option<RouteMetricsResult>,
}

impl Alternatives {
    pub fn from_options(options: &RouteOptions) -> Self {
        let full = |rt: RouteType| {
            options
                .get(rt)
                .as_ref()
                .ok()
                .map(RouteMetricsResult::from_metrics)
        };
        Self {
            fastest: full(RouteType::Fastest),
            cheapest: full(RouteType::Cheapest),
            comfortable: full(RouteType::Comfortable),
        }
    }
}

/// Response for a single journey request.
#[derive(Debug, Serialize)]
pub struct JourneyResponse {
    /// Step-by-step instructions
    pub route: Vec<String>,
    /// e.g. "16 min"
    pub time: String,
    /// e.g. "₹160"
    pub cost: String,
    /// e.g. "16.0 km"
    pub distance: String,
    pub transfers: usize,
    pub comfort: f64,
    pub metro_percentage: f64,
    pub alternatives: Alternatives,
}

impl JourneyResponse {
    pub fn new(selected: &RouteMetrics, options: &RouteOptions) -> Self {
        Self {
            route: instructions(selected),
            time: format!("{} min", selected.total_time),
            cost: format!("₹{}", selected.total_cost),
            distance: format!("{:.1} km", selected.total_distance),
            transfers: selected.num_transfers(),
            comfort: round1(selected.avg_comfort),
            metro_percentage: round1(selected.metro_percentage),
            alternatives: Alternatives::from_options(options),
        }
    }
}

/// Summary of one route for side-by-side comparison.
#[derive(Debug, Serialize)]
pub struct RouteSummary {
    pub instructions: Vec<String>,
    pub time: u32,
    pub cost: u32,
    pub distance: f64,
    pub transfers: usize,
    pub comfort: f64,
    pub metro_percentage: f64,
}

impl RouteSummary {
    pub fn from_metrics(m: &RouteMetrics) -> Self {
        Self {
            instructions: instructions(m),
            time: m.total_time,
            cost: m.total_cost,
            distance: round1(m.total_distance),
            transfers: m.num_transfers(),
            comfort: round1(m.avg_comfort),
            metro_percentage: round1(m.metro_percentage),
        }
    }
}

/// Response for the all-routes request. Absent route types are omitted.
#[derive(Debug, Serialize)]
pub struct AllRoutesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fastest: Option<RouteSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheapest: Option<RouteSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comfortable: Option<RouteSummary>,
}

impl AllRoutesResponse {
    pub fn from_options(options: &RouteOptions) -> Self {
        let summary = |rt: RouteType| options.get(rt).as_ref().ok().map(RouteSummary::from_metrics);
        Self {
            fastest: summary(RouteType::Fastest),
            cheapest: summary(RouteType::Cheapest),
            comfortable: summary(RouteType::Comfortable),
        }
    }
}

/// Which route types were found.
#[derive(Debug, Serialize)]
pub struct RoutesFound {
    pub fastest: bool,
    pub cheapest: bool,
    pub comfortable: bool,
}

/// Connectivity diagnostics between two stations.
#[derive(Debug, Serialize)]
pub struct DebugPathResponse {
    pub has_path: bool,
    pub source: String,
    pub dest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes_found: Option<RoutesFound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fastest_path: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_neighbors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_neighbors: Option<Vec<String>>,
}

/// Endpoint listing for the root page.
#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub stations: &'static str,
    pub journey: &'static str,
    pub all_routes: &'static str,
    pub debug: &'static str,
}

/// Service information.
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub endpoints: Endpoints,
    pub documentation: &'static str,
    pub stations: usize,
    pub connections: usize,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub stations: usize,
    pub connections: usize,
    pub version: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::mumbai_network;
    use crate::planner::{Planner, PlannerConfig};

    fn options(from: &str, to: &str) -> RouteOptions {
        let graph = mumbai_network().build().unwrap();
        let config = PlannerConfig::default();
        Planner::new(&graph, &config).plan_all(
            graph.station_id(from).unwrap(),
            graph.station_id(to).unwrap(),
        )
    }

    #[test]
    fn journey_request_defaults() {
        let req: JourneyRequest = serde_json::from_str(r#"{"from": "andheri"}"#).unwrap();
        assert_eq!(req.from, "andheri");
        assert_eq!(req.to, "");
        assert!(req.route_type.is_none());

        let req: JourneyRequest =
            serde_json::from_str(r#"{"from": "a", "to": "b", "routeType": "cheapest"}"#).unwrap();
        assert_eq!(req.route_type.as_deref(), Some("cheapest"));
    }

    #[test]
    fn journey_response_formats_values() {
        let opts = options("Andheri", "Ghatkopar");
        let selected = opts.fastest.as_ref().unwrap();
        let resp = JourneyResponse::new(selected, &opts);

        assert_eq!(resp.time, "16 min");
        assert_eq!(resp.cost, "₹160");
        assert_eq!(resp.distance, "16.0 km");
        assert_eq!(resp.transfers, 0);
        assert_eq!(resp.comfort, 10.0);
        assert_eq!(resp.metro_percentage, 100.0);
        assert!(resp.alternatives.cheapest.is_some());
    }

    #[test]
    fn alternatives_serialize_absent_as_null() {
        let opts = options("Andheri", "Versova");
        let json = serde_json::to_value(Alternatives::from_options(&opts)).unwrap();
        assert!(json["cheapest"].is_null());
        assert!(json["fastest"]["segments"].is_array());
        assert_eq!(json["fastest"]["edges"][0]["data"]["mode"], "Metro");
    }

    #[test]
    fn all_routes_omits_absent() {
        let opts = options("Andheri", "Versova");
        let json = serde_json::to_value(AllRoutesResponse::from_options(&opts)).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("fastest"));
        assert!(!obj.contains_key("cheapest"));
        assert!(obj.contains_key("comfortable"));
    }

    #[test]
    fn transfer_marker_serialization() {
        let opts = options("Ram Mandir", "Eksar");
        let full = RouteMetricsResult::from_metrics(opts.fastest.as_ref().unwrap());
        assert_eq!(full.transfers[0].to_line, "Transfer");
        assert_eq!(full.transfers[0].time, 10);
        assert_eq!(full.transfers[1].to_line, "Metro Line 2A");
        assert_eq!(full.num_transfers, 2);
    }

    #[test]
    fn metrics_are_rounded() {
        let opts = options("Ram Mandir", "Eksar");
        let full = RouteMetricsResult::from_metrics(opts.fastest.as_ref().unwrap());
        // 2 of 5 travel minutes on the metro.
        assert_eq!(full.metro_percentage, 40.0);
        // Comfort 5, 4, 10 over three edges.
        assert_eq!(full.avg_comfort, 6.3);
    }
}
