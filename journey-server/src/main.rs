use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use journey_server::config::ServerConfig;
use journey_server::network::{NetworkDefinition, mumbai_network};
use journey_server::planner::PlannerConfig;
use journey_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Load the network (fail fast on a bad file)
    let definition = match &config.network_file {
        Some(path) => {
            info!(path = %path.display(), "loading network file");
            NetworkDefinition::from_file(path)?
        }
        None => mumbai_network(),
    };
    let graph = definition.build()?;
    info!(
        stations = graph.station_count(),
        connections = graph.connection_count(),
        "network loaded"
    );

    let state = AppState::new(graph, PlannerConfig::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, "Mumbai Journey Planner listening");
    info!("  GET  /api/health       - Health check");
    info!("  GET  /api/stations     - Station names");
    info!("  POST /api/journey      - Plan a journey");
    info!("  POST /api/journey/all  - Compare route types");
    info!("  POST /api/debug/path   - Connectivity diagnostics");

    axum::serve(listener, app).await?;
    Ok(())
}
