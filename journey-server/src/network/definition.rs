//! Network definitions: the data a transit graph is built from.
//!
//! A definition lists lines (ordered station sequences with uniform
//! per-station attributes) and junctions (interchange edges). It can be
//! loaded from a JSON file or taken from the built-in network.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{Connection, DomainError, Line, Mode};

use super::graph::{TransitGraph, TransitGraphBuilder};

/// Errors from loading or validating a network definition.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Reading the definition file failed
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid definition
    #[error("invalid network JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A line cannot produce any edges
    #[error("invalid line {line}: {reason}")]
    InvalidLine { line: String, reason: &'static str },

    /// Edge attributes failed validation
    #[error("invalid connection on {line}: {source}")]
    InvalidConnection {
        line: String,
        #[source]
        source: DomainError,
    },
}

/// A line: consecutive stations joined with identical attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDefinition {
    /// Line name, e.g. "Western Line".
    pub name: String,
    /// Travel mode; must not be `Transfer`.
    pub mode: Mode,
    /// Stations in running order.
    pub stations: Vec<String>,
    /// Minutes between consecutive stations.
    pub time_per_station: u32,
    /// Fare between consecutive stations.
    pub fare_per_station: u32,
    /// Comfort rating of every edge on the line.
    pub comfort: u8,
}

impl LineDefinition {
    /// Create a line definition.
    pub fn new(
        name: &str,
        mode: Mode,
        stations: &[&str],
        time_per_station: u32,
        fare_per_station: u32,
        comfort: u8,
    ) -> Self {
        Self {
            name: name.to_string(),
            mode,
            stations: stations.iter().map(|s| (*s).to_string()).collect(),
            time_per_station,
            fare_per_station,
            comfort,
        }
    }
}

/// An interchange edge between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JunctionDefinition {
    pub from: String,
    pub to: String,
    /// Walking and platform-change time in minutes.
    pub time: u32,
    #[serde(default)]
    pub cost: u32,
    pub comfort: u8,
    /// Junction name, used as the edge's line identifier.
    pub name: String,
}

impl JunctionDefinition {
    /// Create a free junction definition.
    pub fn new(from: &str, to: &str, time: u32, comfort: u8, name: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            time,
            cost: 0,
            comfort,
            name: name.to_string(),
        }
    }
}

/// A complete network definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDefinition {
    pub lines: Vec<LineDefinition>,
    #[serde(default)]
    pub junctions: Vec<JunctionDefinition>,
}

impl NetworkDefinition {
    /// Load a definition from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let definition = serde_json::from_str(&contents)?;
        Ok(definition)
    }

    /// Build and freeze the transit graph.
    ///
    /// Lines are added in order, so where two lines share track the later
    /// line's attributes win. Junctions are added last; a junction is
    /// skipped if either end is not on any line or both ends are the same
    /// station.
    pub fn build(&self) -> Result<TransitGraph, NetworkError> {
        let mut builder = TransitGraphBuilder::new();

        for line in &self.lines {
            add_line(&mut builder, line)?;
        }

        for junction in &self.junctions {
            if !builder.contains(&junction.from) || !builder.contains(&junction.to) {
                warn!(
                    from = %junction.from,
                    to = %junction.to,
                    junction = %junction.name,
                    "skipping junction with unknown station"
                );
                continue;
            }

            let connection = Connection::new(
                junction.time,
                junction.cost,
                junction.comfort,
                Mode::Transfer,
                Line::new(junction.name.as_str()),
            )
            .map_err(|source| NetworkError::InvalidConnection {
                line: junction.name.clone(),
                source,
            })?;

            if !builder.connect(&junction.from, &junction.to, connection) {
                debug!(station = %junction.from, junction = %junction.name, "skipping same-station junction");
            }
        }

        Ok(builder.build())
    }
}

/// Add the edges of one line.
fn add_line(builder: &mut TransitGraphBuilder, line: &LineDefinition) -> Result<(), NetworkError> {
    if line.mode == Mode::Transfer {
        return Err(NetworkError::InvalidLine {
            line: line.name.clone(),
            reason: "lines cannot use the Transfer mode",
        });
    }
    if line.stations.len() < 2 {
        return Err(NetworkError::InvalidLine {
            line: line.name.clone(),
            reason: "a line needs at least two stations",
        });
    }

    let line_id = Line::new(line.name.as_str());
    let connection = Connection::new(
        line.time_per_station,
        line.fare_per_station,
        line.comfort,
        line.mode,
        line_id,
    )
    .map_err(|source| NetworkError::InvalidConnection {
        line: line.name.clone(),
        source,
    })?;

    for pair in line.stations.windows(2) {
        builder.connect(&pair[0], &pair[1], connection.clone());
    }

    Ok(())
}
