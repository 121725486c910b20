//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::StationId;
use crate::planner::{RouteError, RouteType};
use crate::stations::{resolve_station, sorted_station_names};

use super::dto::*;
use super::state::AppState;

const API_NAME: &str = "Mumbai Journey Planner API";
const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Neighbours listed per endpoint when two stations are disconnected.
const DEBUG_NEIGHBOR_LIMIT: usize = 5;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/journey", post(plan_journey))
        .route("/api/journey/all", post(plan_all_routes))
        .route("/api/debug/path", post(debug_path))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Service information.
async fn index(State(state): State<AppState>) -> Json<ApiInfo> {
    Json(ApiInfo {
        name: API_NAME,
        version: API_VERSION,
        status: "running",
        endpoints: Endpoints {
            health: "/api/health",
            stations: "/api/stations",
            journey: "/api/journey (POST)",
            all_routes: "/api/journey/all (POST)",
            debug: "/api/debug/path (POST)",
        },
        documentation: "Send POST requests to /api/journey with {from, to, routeType}",
        stations: state.graph.station_count(),
        connections: state.graph.connection_count(),
    })
}

/// Health check endpoint.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        stations: state.graph.station_count(),
        connections: state.graph.connection_count(),
        version: API_VERSION,
    })
}

/// All station names, sorted.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(sorted_station_names(&state.graph))
}

/// Plan one route type, with full alternatives.
async fn plan_journey(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<JourneyResponse>, AppError> {
    let req: JourneyRequest = parse_body(&body)?;

    let route_type = match req.route_type.as_deref() {
        Some(raw) => raw.parse::<RouteType>().map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
        None => RouteType::default(),
    };

    let (from, to) = resolve_pair(&state, &req.from, &req.to)?;
    let options = state.planner().plan_all(from, to);

    let selected = options.get(route_type).as_ref().map_err(AppError::from)?;
    Ok(Json(JourneyResponse::new(selected, &options)))
}

/// Plan every route type for comparison.
async fn plan_all_routes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AllRoutesResponse>, AppError> {
    let req: JourneyRequest = parse_body(&body)?;
    let (from, to) = resolve_pair(&state, &req.from, &req.to)?;

    let options = state.planner().plan_all(from, to);
    Ok(Json(AllRoutesResponse::from_options(&options)))
}

/// Connectivity diagnostics.
async fn debug_path(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DebugPathResponse>, AppError> {
    let req: JourneyRequest = parse_body(&body)?;
    let from = resolve(&state, &req.from)?;
    let to = resolve(&state, &req.to)?;

    let graph = &state.graph;
    let has_path = graph.has_path(from, to);
    let mut resp = DebugPathResponse {
        has_path,
        source: graph.station(from).to_string(),
        dest: graph.station(to).to_string(),
        routes_found: None,
        fastest_path: None,
        source_neighbors: None,
        dest_neighbors: None,
    };

    if has_path {
        let options = state.planner().plan_all(from, to);
        resp.routes_found = Some(RoutesFound {
            fastest: options.fastest.is_ok(),
            cheapest: options.cheapest.is_ok(),
            comfortable: options.comfortable.is_ok(),
        });
        resp.fastest_path = options
            .fastest
            .ok()
            .map(|m| m.path.iter().map(|s| s.to_string()).collect());
    } else {
        let neighbors = |id: StationId| -> Vec<String> {
            graph
                .neighbors(id)
                .take(DEBUG_NEIGHBOR_LIMIT)
                .map(|(n, _)| graph.station(n).to_string())
                .collect()
        };
        resp.source_neighbors = Some(neighbors(from));
        resp.dest_neighbors = Some(neighbors(to));
    }

    Ok(Json(resp))
}

/// Parse a JSON request body. Empty bodies, `null` and `{}` carry no data.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    let no_data = || AppError::BadRequest {
        message: "No data provided".to_string(),
    };

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(no_data());
    }

    let value: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "invalid JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let empty = match &value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if empty {
        return Err(no_data());
    }

    serde_json::from_value(value).map_err(|e| AppError::BadRequest {
        message: format!("Invalid request: {e}"),
    })
}

/// Resolve one station name, or 404.
fn resolve(state: &AppState, input: &str) -> Result<StationId, AppError> {
    resolve_station(&state.graph, input).ok_or_else(|| AppError::NotFound {
        message: format!("Station \"{input}\" not found"),
    })
}

/// Resolve origin and destination, rejecting identical stations.
fn resolve_pair(state: &AppState, from: &str, to: &str) -> Result<(StationId, StationId), AppError> {
    let from = resolve(state, from)?;
    let to = resolve(state, to)?;
    if from == to {
        return Err(AppError::BadRequest {
            message: "Source and destination cannot be the same".to_string(),
        });
    }
    Ok((from, to))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<&RouteError> for AppError {
    fn from(e: &RouteError) -> Self {
        match e {
            RouteError::InvalidRequest(_) => AppError::BadRequest { message: e.reason() },
            RouteError::NoPath { .. } | RouteError::ComfortGateRejected(_) => {
                AppError::NotFound { message: e.reason() }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request rejected");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::mumbai_network;
    use crate::planner::{GateRejection, PlannerConfig};

    fn state() -> AppState {
        AppState::new(mumbai_network().build().unwrap(), PlannerConfig::default())
    }

    fn body(json: &str) -> Bytes {
        Bytes::from(json.to_string())
    }

    async fn json_of(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_graph_size() {
        let s = state();
        let Json(resp) = health(State(s.clone())).await;
        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.stations, s.graph.station_count());
        assert_eq!(resp.connections, s.graph.connection_count());
    }

    #[tokio::test]
    async fn index_lists_endpoints() {
        let Json(info) = index(State(state())).await;
        assert_eq!(info.status, "running");
        assert_eq!(info.endpoints.journey, "/api/journey (POST)");
        assert!(info.stations > 0);
    }

    #[tokio::test]
    async fn stations_are_sorted() {
        let Json(names) = list_stations(State(state())).await;
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"Ghatkopar".to_string()));
    }

    #[tokio::test]
    async fn journey_defaults_to_fastest() {
        let Json(resp) = plan_journey(
            State(state()),
            body(r#"{"from": "andheri", "to": "ghatkopar"}"#),
        )
        .await
        .unwrap();

        assert_eq!(resp.time, "16 min");
        assert_eq!(resp.cost, "₹160");
        assert_eq!(resp.metro_percentage, 100.0);
        assert!(resp.route[0].starts_with("Take Metro - Metro Line 1"));
    }

    #[tokio::test]
    async fn journey_cheapest() {
        let Json(resp) = plan_journey(
            State(state()),
            body(r#"{"from": "Andheri", "to": "Ghatkopar", "routeType": "cheapest"}"#),
        )
        .await
        .unwrap();

        assert_eq!(resp.cost, "₹60");
        assert_eq!(resp.time, "36 min");
        assert_eq!(resp.transfers, 1);
    }

    #[tokio::test]
    async fn journey_without_route_is_not_found() {
        let err = plan_journey(
            State(state()),
            body(r#"{"from": "Andheri", "to": "Versova", "routeType": "cheapest"}"#),
        )
        .await
        .unwrap_err();

        match err {
            AppError::NotFound { message } => {
                assert_eq!(message, RouteType::Cheapest.no_route_reason())
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn comfort_rejection_is_not_found() {
        let err = plan_journey(
            State(state()),
            body(r#"{"from": "CSMT", "to": "Masjid", "routeType": "comfortable"}"#),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            AppError::NotFound { ref message } if message.starts_with("No comfortable AC Metro route")
        ));
    }

    #[tokio::test]
    async fn unknown_station_is_not_found() {
        let err = plan_journey(
            State(state()),
            body(r#"{"from": "Atlantis", "to": "Dadar"}"#),
        )
        .await
        .unwrap_err();

        match err {
            AppError::NotFound { message } => assert_eq!(message, "Station \"Atlantis\" not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn same_station_is_bad_request() {
        let err = plan_journey(State(state()), body(r#"{"from": "dadar", "to": " Dadar"}"#))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::BadRequest { ref message } if message == "Source and destination cannot be the same"
        ));
    }

    #[tokio::test]
    async fn bad_bodies_are_rejected() {
        for raw in ["", "  ", "null", "{}"] {
            let err = plan_journey(State(state()), body(raw)).await.unwrap_err();
            assert!(
                matches!(err, AppError::BadRequest { ref message } if message == "No data provided"),
                "{raw:?}"
            );
        }

        let err = plan_journey(State(state()), body("{not json")).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { ref message } if message.starts_with("Invalid JSON")));
    }

    #[tokio::test]
    async fn unknown_route_type_is_bad_request() {
        let err = plan_journey(
            State(state()),
            body(r#"{"from": "Andheri", "to": "Dadar", "routeType": "scenic"}"#),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn all_routes_omits_missing_types() {
        let Json(resp) = plan_all_routes(
            State(state()),
            body(r#"{"from": "Andheri", "to": "Versova"}"#),
        )
        .await
        .unwrap();

        assert!(resp.fastest.is_some());
        assert!(resp.cheapest.is_none());
        assert_eq!(resp.fastest.unwrap().time, 6);
    }

    #[tokio::test]
    async fn debug_path_for_connected_stations() {
        let Json(resp) = debug_path(State(state()), body(r#"{"from": "Andheri", "to": "Versova"}"#))
            .await
            .unwrap();

        assert!(resp.has_path);
        let found = resp.routes_found.unwrap();
        assert!(found.fastest);
        assert!(!found.cheapest);
        assert_eq!(
            resp.fastest_path.unwrap(),
            vec!["Andheri", "Azad Nagar", "D.N. Nagar", "Versova"]
        );
        assert!(resp.source_neighbors.is_none());
    }

    #[tokio::test]
    async fn error_response_shape() {
        let resp = AppError::NotFound {
            message: "Station \"X\" not found".to_string(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_of(resp).await["error"], "Station \"X\" not found");

        let resp = AppError::from(&RouteError::from(GateRejection::NoMetro)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = AppError::from(&RouteError::InvalidRequest("bad".into())).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn router_builds() {
        let _router = create_router(state());
    }
}
