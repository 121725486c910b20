//! The transit graph: stations joined by undirected connections.

use std::collections::HashMap;

use pathfinding::prelude::bfs;
use tracing::trace;

use crate::domain::{Connection, Station, StationId};

/// An undirected, simple, edge-weighted graph over stations.
///
/// Built once with [`TransitGraphBuilder`] and read-only afterwards. There are
/// no interior-mutable parts, so a graph behind an `Arc` can be queried from
/// any number of threads without locking.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    /// Station names in insertion order, indexed by `StationId`.
    stations: Vec<Station>,
    /// Name to id lookup.
    ids: HashMap<Station, StationId>,
    /// Edge attributes, indexed by edge number.
    edges: Vec<Connection>,
    /// Per-station neighbours with the edge number joining them.
    adjacency: Vec<Vec<(StationId, usize)>>,
    /// Edge number for each ordered station pair, stored in both directions.
    pairs: HashMap<(StationId, StationId), usize>,
}

impl TransitGraph {
    /// Look up a station id by exact name.
    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.ids.get(name).copied()
    }

    /// Returns the station with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.index()]
    }

    /// Returns the station with the given id, if this graph issued it.
    pub fn get_station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    /// Returns true if a station with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Returns true if the id belongs to this graph.
    pub fn contains_id(&self, id: StationId) -> bool {
        id.index() < self.stations.len()
    }

    /// All stations in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = (StationId, &Station)> {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, s)| (StationId(i as u32), s))
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of undirected connections.
    pub fn connection_count(&self) -> usize {
        self.edges.len()
    }

    /// Neighbours of a station with the connection leading to each.
    pub fn neighbors(&self, id: StationId) -> impl Iterator<Item = (StationId, &Connection)> {
        self.adjacency
            .get(id.index())
            .into_iter()
            .flatten()
            .map(|&(to, edge)| (to, &self.edges[edge]))
    }

    /// The connection between two stations, if any.
    pub fn connection(&self, from: StationId, to: StationId) -> Option<&Connection> {
        self.pairs.get(&(from, to)).map(|&edge| &self.edges[edge])
    }

    /// Returns true if the stations are connected by any sequence of edges.
    pub fn has_path(&self, from: StationId, to: StationId) -> bool {
        if !self.contains_id(from) || !self.contains_id(to) {
            return false;
        }

        bfs(
            &from,
            |&station| self.neighbors(station).map(|(next, _)| next),
            |&station| station == to,
        )
        .is_some()
    }
}

/// Builder for a [`TransitGraph`].
///
/// Connecting a pair that is already connected replaces the earlier
/// attributes, so the graph never holds parallel edges.
#[derive(Debug, Default)]
pub struct TransitGraphBuilder {
    inner: TransitGraph,
}

impl TransitGraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for a station, adding it if new.
    pub fn add_station(&mut self, name: &str) -> StationId {
        if let Some(id) = self.inner.station_id(name) {
            return id;
        }

        let id = StationId(self.inner.stations.len() as u32);
        let station = Station::new(name);
        self.inner.stations.push(station.clone());
        self.inner.ids.insert(station, id);
        self.inner.adjacency.push(Vec::new());
        id
    }

    /// Returns true if the station has already been added.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains(name)
    }

    /// Connect two stations, adding them if new.
    ///
    /// Returns false if the connection was not added because both ends are
    /// the same station.
    pub fn connect(&mut self, from: &str, to: &str, connection: Connection) -> bool {
        if from == to {
            trace!(station = from, "ignoring self-loop connection");
            return false;
        }

        let a = self.add_station(from);
        let b = self.add_station(to);

        if let Some(&edge) = self.inner.pairs.get(&(a, b)) {
            trace!(from, to, line = %connection.line, "replacing connection");
            self.inner.edges[edge] = connection;
            return true;
        }

        let edge = self.inner.edges.len();
        self.inner.edges.push(connection);
        self.inner.adjacency[a.index()].push((b, edge));
        self.inner.adjacency[b.index()].push((a, edge));
        self.inner.pairs.insert((a, b), edge);
        self.inner.pairs.insert((b, a), edge);
        true
    }

    /// Fluent form of [`connect`](Self::connect).
    pub fn with(mut self, from: &str, to: &str, connection: Connection) -> Self {
        self.connect(from, to, connection);
        self
    }

    /// Freeze the graph.
    pub fn build(self) -> TransitGraph {
        self.inner
    }
}
