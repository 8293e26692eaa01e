//! Command-line odds calculator.
//!
//! Prints the success percentage for a mission against a threat report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use odds_server::config::{MissionConfig, load_threat_report};
use odds_server::planner::compute_best_plan;
use odds_server::store::{RouteStore, SqliteRouteStore};

#[derive(Parser, Debug)]
#[command(
    name = "odds",
    version,
    about = "Compute the odds of reaching the arrival waypoint unseen"
)]
struct Cli {
    /// Mission file with the vessel and its routes database
    #[arg(value_name = "VESSEL_JSON")]
    vessel: PathBuf,

    /// Threat report with the countdown and adversary sightings
    #[arg(value_name = "THREAT_JSON")]
    threat: PathBuf,

    /// Print the winning itinerary as JSON as well as the odds
    #[arg(long)]
    plan: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mission = MissionConfig::load(&cli.vessel)
        .with_context(|| format!("loading mission from {}", cli.vessel.display()))?;
    let threat = load_threat_report(&cli.threat)
        .with_context(|| format!("loading threat report from {}", cli.threat.display()))?;
    let routes = SqliteRouteStore::open(&mission.routes_db)?
        .routes()
        .context("reading routes")?;

    let report = compute_best_plan(
        &mission.vessel,
        threat.countdown(),
        &routes,
        threat.sightings(),
    );

    if cli.plan {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.odds);
    }

    Ok(())
}
