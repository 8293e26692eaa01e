//! SQLite-backed route store.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::domain::Route;

use super::{RouteStore, StoreError};

const ROUTES_QUERY: &str =
    "SELECT rowid, origin, destination, travel_time FROM routes ORDER BY rowid";

/// Read-only route store backed by a SQLite `routes` table with columns
/// `origin TEXT, destination TEXT, travel_time INTEGER`.
pub struct SqliteRouteStore {
    path: PathBuf,
    connection: Mutex<Connection>,
}

impl fmt::Debug for SqliteRouteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteRouteStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SqliteRouteStore {
    /// Open the database read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| StoreError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            connection: Mutex::new(connection),
        })
    }

    /// Location of the database on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RouteStore for SqliteRouteStore {
    fn routes(&self) -> Result<Vec<Route>, StoreError> {
        let connection = self.connection.lock().map_err(|_| StoreError::Poisoned)?;
        let mut statement = connection.prepare_cached(ROUTES_QUERY)?;
        let mut rows = statement.query([])?;
        let mut routes = Vec::new();

        while let Some(row) = rows.next()? {
            let rowid: i64 = row.get(0)?;
            let origin: String = row.get(1)?;
            let destination: String = row.get(2)?;
            let travel_time: i64 = row.get(3)?;

            let route = Route::parse(&origin, &destination, travel_time)
                .map_err(|source| StoreError::InvalidRoute { row: rowid, source })?;
            routes.push(route);
        }

        debug!(path = %self.path.display(), routes = routes.len(), "loaded routes");

        Ok(routes)
    }
}
