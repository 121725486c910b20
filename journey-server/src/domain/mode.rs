//! Travel modes and line identifiers.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

/// Distance credited to each revenue travel edge, in kilometres.
pub const TRAVEL_EDGE_DISTANCE_KM: f64 = 2.0;

/// How a connection is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Suburban rail.
    #[serde(rename = "Local Train", alias = "LocalTrain")]
    LocalTrain,
    /// Air-conditioned metro.
    Metro,
    /// Non-revenue interchange movement (walking, platform change).
    Transfer,
}

impl Mode {
    /// Returns the display label used in itineraries.
    pub fn label(self) -> &'static str {
        match self {
            Mode::LocalTrain => "Local Train",
            Mode::Metro => "Metro",
            Mode::Transfer => "Transfer",
        }
    }

    /// Fixed distance of one edge in this mode.
    pub fn edge_distance(self) -> f64 {
        match self {
            Mode::LocalTrain | Mode::Metro => TRAVEL_EDGE_DISTANCE_KM,
            Mode::Transfer => 0.0,
        }
    }

    /// Returns true for revenue travel (anything but a transfer).
    pub fn is_travel(self) -> bool {
        !matches!(self, Mode::Transfer)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Opaque line or junction identifier.
///
/// Compared by exact name. Shared, so cloning into segments is cheap.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Line(Arc<str>);

impl Line {
    /// Create a line identifier.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Line(name.into())
    }

    /// Returns the line name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({})", self.as_str())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Line {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
