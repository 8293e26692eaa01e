//! Configuration loading.
//!
//! Two documents drive a run: the mission file describing the vessel and
//! where its route database lives, and the threat report with the countdown
//! and the adversary's sightings.

use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{DomainError, ThreatReport, Vessel};

/// Default address the server binds to.
pub const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);

/// Errors raised while loading configuration files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid JSON: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration in {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    #[error("routes database {} does not exist", path.display())]
    MissingRoutesDb { path: PathBuf },
}

/// On-disk shape of the mission file.
#[derive(Debug, Deserialize)]
struct MissionFile {
    autonomy: i64,
    departure: String,
    arrival: String,
    routes_db: PathBuf,
}

/// The vessel and the location of its route database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionConfig {
    pub vessel: Vessel,

    /// Absolute, or relative to the working directory.
    pub routes_db: PathBuf,
}

impl MissionConfig {
    /// Load a mission file.
    ///
    /// A relative `routes_db` is resolved against the directory containing
    /// the mission file, and must exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file: MissionFile = read_json(path)?;

        let vessel = Vessel::parse(file.autonomy, &file.departure, &file.arrival).map_err(
            |source| ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            },
        )?;

        let routes_db = match path.parent() {
            Some(dir) if file.routes_db.is_relative() => dir.join(&file.routes_db),
            _ => file.routes_db,
        };
        if !routes_db.is_file() {
            return Err(ConfigError::MissingRoutesDb { path: routes_db });
        }

        debug!(
            path = %path.display(),
            routes_db = %routes_db.display(),
            autonomy = vessel.autonomy(),
            "loaded mission"
        );

        Ok(Self { vessel, routes_db })
    }
}

/// Load a threat report file.
pub fn load_threat_report(path: impl AsRef<Path>) -> Result<ThreatReport, ConfigError> {
    let path = path.as_ref();
    let report: ThreatReport = read_json(path)?;

    debug!(
        path = %path.display(),
        countdown = report.countdown(),
        sightings = report.sightings().len(),
        "loaded threat report"
    );

    Ok(report)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Directory of static assets served for unmatched paths.
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Create a config listening on `addr` with no static assets.
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            static_dir: None,
        }
    }

    /// Serve static assets from `dir`.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ADDR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_mission_with_relative_db() {
        let dir = tempdir().unwrap();
        write(&dir, "universe.db", "");
        let path = write(
            &dir,
            "millennium-falcon.json",
            r#"{"autonomy": 6, "departure": "Tatooine", "arrival": "Endor", "routes_db": "universe.db"}"#,
        );

        let config = MissionConfig::load(&path).unwrap();

        assert_eq!(config.vessel, Vessel::parse(6, "Tatooine", "Endor").unwrap());
        assert_eq!(config.routes_db, dir.path().join("universe.db"));
    }

    #[test]
    fn loads_mission_with_absolute_db() {
        let dir = tempdir().unwrap();
        let db = write(&dir, "universe.db", "");
        let other = tempdir().unwrap();
        let mission = format!(
            r#"{{"autonomy": 1, "departure": "A", "arrival": "B", "routes_db": {}}}"#,
            serde_json::to_string(&db).unwrap()
        );
        let path = write(&other, "mission.json", &mission);

        let config = MissionConfig::load(&path).unwrap();

        assert_eq!(config.routes_db, db);
    }

    #[test]
    fn missing_routes_db() {
        let dir = tempdir().unwrap();
        let path = write(
            &dir,
            "mission.json",
            r#"{"autonomy": 6, "departure": "Tatooine", "arrival": "Endor", "routes_db": "nope.db"}"#,
        );

        let err = MissionConfig::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::MissingRoutesDb { .. }));
    }

    #[test]
    fn mission_file_not_found() {
        let dir = tempdir().unwrap();

        let err = MissionConfig::load(dir.path().join("missing.json")).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(err.to_string().starts_with("file not found: "));
    }

    #[test]
    fn mission_not_json() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "mission.json", "autonomy = 6");

        let err = MissionConfig::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidJson { .. }));
    }

    #[test]
    fn mission_missing_field() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "mission.json", r#"{"autonomy": 6, "departure": "A"}"#);

        let err = MissionConfig::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidJson { .. }));
    }

    #[test]
    fn mission_negative_autonomy() {
        let dir = tempdir().unwrap();
        write(&dir, "universe.db", "");
        let path = write(
            &dir,
            "mission.json",
            r#"{"autonomy": -1, "departure": "A", "arrival": "B", "routes_db": "universe.db"}"#,
        );

        let err = MissionConfig::load(&path).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Invalid {
                source: DomainError::NegativeAutonomy(-1),
                ..
            }
        ));
    }

    #[test]
    fn loads_threat_report() {
        let dir = tempdir().unwrap();
        let path = write(
            &dir,
            "empire.json",
            r#"{
                "countdown": 7,
                "bounty_hunters": [
                    {"planet": "Hoth", "day": 6},
                    {"planet": "Hoth", "day": 7},
                    {"planet": "Hoth", "day": 8}
                ]
            }"#,
        );

        let report = load_threat_report(&path).unwrap();

        assert_eq!(report.countdown(), 7);
        assert_eq!(report.sightings().len(), 3);
        assert_eq!(report.sightings()[2].day(), 8);
    }

    #[test]
    fn threat_report_with_invalid_values() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "empire.json", r#"{"countdown": -3}"#);

        let err = load_threat_report(&path).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidJson { .. }));
    }

    #[test]
    fn threat_report_not_found() {
        let dir = tempdir().unwrap();

        let err = load_threat_report(dir.path().join("empire.json")).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn server_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.static_dir, None);

        let config = config.with_static_dir("public");
        assert_eq!(config.static_dir, Some(PathBuf::from("public")));
    }
}
