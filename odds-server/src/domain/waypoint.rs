//! Waypoint name type.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid waypoint name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid waypoint name {name:?}: {reason}")]
pub struct InvalidWaypoint {
    name: String,
    reason: &'static str,
}

/// A validated waypoint name, such as `"Tatooine"`.
///
/// Names are non-empty, carry no leading or trailing whitespace and contain
/// no control characters. Any `Waypoint` value is valid by construction.
/// Cloning is cheap: the name is shared.
///
/// # Examples
///
/// ```
/// use odds_server::domain::Waypoint;
///
/// let endor = Waypoint::parse("Endor").unwrap();
/// assert_eq!(endor.as_str(), "Endor");
///
/// assert!(Waypoint::parse("").is_err());
/// assert!(Waypoint::parse(" Endor").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Waypoint(Arc<str>);

impl Waypoint {
    /// Parse a waypoint name.
    pub fn parse(s: &str) -> Result<Self, InvalidWaypoint> {
        let reject = |reason| InvalidWaypoint {
            name: s.to_string(),
            reason,
        };

        if s.is_empty() {
            return Err(reject("must not be empty"));
        }

        if s.trim() != s {
            return Err(reject("must not start or end with whitespace"));
        }

        if s.chars().any(char::is_control) {
            return Err(reject("must not contain control characters"));
        }

        Ok(Waypoint(Arc::from(s)))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Waypoint {
    type Error = InvalidWaypoint;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Waypoint::parse(&value)
    }
}

impl From<Waypoint> for String {
    fn from(value: Waypoint) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Debug for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Waypoint({})", self.as_str())
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
