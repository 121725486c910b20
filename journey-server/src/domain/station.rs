//! Station identity types.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// A station name.
///
/// Identity is the exact, case-sensitive name. Cloning is cheap: the name is
/// shared, so segments and transfers can carry station names without
/// reallocating.
///
/// # Examples
///
/// ```
/// use journey_server::domain::Station;
///
/// let dadar = Station::new("Dadar");
/// assert_eq!(dadar.as_str(), "Dadar");
/// assert_ne!(dadar, Station::new("dadar"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(Arc<str>);

impl Station {
    /// Create a station from its name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Station(name.into())
    }

    /// Returns the station name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.as_str())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Station {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Dense index of a station within a [`TransitGraph`](crate::network::TransitGraph).
///
/// Only meaningful for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u32);

impl StationId {
    /// Returns the id as a vector index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
