//! Connection (edge) attributes.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{DomainError, Line, Mode};

/// Highest comfort rating.
pub const MAX_COMFORT: u8 = 10;

/// The fixed attribute bundle carried by every edge of the transit graph.
///
/// Connections are undirected: the same value describes travel in both
/// directions.
///
/// # Invariants
///
/// - `time > 0`
/// - `1 <= comfort <= 10`
/// - `distance` is derived from `mode`
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// Travel time in minutes.
    pub time: u32,
    /// Fare in currency units.
    pub cost: u32,
    /// Comfort rating, 1 (worst) to 10 (best).
    pub comfort: u8,
    /// How the edge is travelled.
    pub mode: Mode,
    /// Line or junction identifier.
    pub line: Line,
    /// Distance in kilometres.
    pub distance: f64,
}

impl Connection {
    /// Create a connection, validating its attributes.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_server::domain::{Connection, Line, Mode};
    ///
    /// let edge = Connection::new(3, 5, 5, Mode::LocalTrain, Line::new("Central Line")).unwrap();
    /// assert_eq!(edge.distance, 2.0);
    /// assert!(!edge.is_metro());
    ///
    /// assert!(Connection::new(0, 5, 5, Mode::LocalTrain, Line::new("Central Line")).is_err());
    /// ```
    pub fn new(
        time: u32,
        cost: u32,
        comfort: u8,
        mode: Mode,
        line: Line,
    ) -> Result<Self, DomainError> {
        if time == 0 {
            return Err(DomainError::ZeroTime);
        }
        if comfort == 0 || comfort > MAX_COMFORT {
            return Err(DomainError::ComfortOutOfRange(comfort));
        }

        Ok(Connection {
            time,
            cost,
            comfort,
            mode,
            line,
            distance: mode.edge_distance(),
        })
    }

    /// Returns true if this edge is metro travel.
    pub fn is_metro(&self) -> bool {
        self.mode == Mode::Metro
    }
}

// Adds the derived `is_metro` flag to the stored fields.
impl Serialize for Connection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Connection", 7)?;
        state.serialize_field("time", &self.time)?;
        state.serialize_field("cost", &self.cost)?;
        state.serialize_field("comfort", &self.comfort)?;
        state.serialize_field("mode", &self.mode)?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("distance", &self.distance)?;
        state.serialize_field("is_metro", &self.is_metro())?;
        state.end()
    }
}
