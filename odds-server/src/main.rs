use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use odds_server::config::{DEFAULT_ADDR, MissionConfig, ServerConfig};
use odds_server::store::{RouteStore, SqliteRouteStore};
use odds_server::web::{AppState, create_router};

const DEFAULT_LOG_FILTER: &str = "odds_server=info,tower_http=info";

#[derive(Parser, Debug)]
#[command(
    name = "odds-server",
    version,
    about = "Serve the odds of reaching the arrival waypoint unseen"
)]
struct Cli {
    /// Mission file with the vessel and its routes database
    #[arg(value_name = "VESSEL_JSON", env = "MILLENNIUM_FALCON_PATH")]
    vessel: PathBuf,

    /// Address to bind to
    #[arg(long, default_value_t = DEFAULT_ADDR.ip())]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_ADDR.port())]
    port: u16,

    /// Directory of static assets served for unmatched paths
    #[arg(long, value_name = "DIR")]
    static_dir: Option<PathBuf>,
}

impl Cli {
    fn server_config(&self) -> ServerConfig {
        let config = ServerConfig::new(SocketAddr::new(self.host, self.port));
        match &self.static_dir {
            Some(dir) => config.with_static_dir(dir),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let server = cli.server_config();

    let mission = MissionConfig::load(&cli.vessel)
        .with_context(|| format!("loading mission from {}", cli.vessel.display()))?;
    let store = SqliteRouteStore::open(&mission.routes_db)?;

    // Fail fast on a broken database rather than on the first request
    let route_count = store.routes()?.len();
    info!(
        routes_db = %store.path().display(),
        routes = route_count,
        departure = %mission.vessel.departure(),
        arrival = %mission.vessel.arrival(),
        autonomy = mission.vessel.autonomy(),
        "loaded mission"
    );

    let state = AppState::new(store, mission.vessel);
    let app = create_router(state, server.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(server.addr)
        .await
        .with_context(|| format!("binding {}", server.addr))?;
    info!(addr = %server.addr, "odds server listening");
    info!("  GET  /health                 - Health check");
    info!("  GET  /api/routes             - Route network");
    info!("  GET  /api/millennium_falcon  - Vessel parameters");
    info!("  POST /api/odds               - Odds for a threat report");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
