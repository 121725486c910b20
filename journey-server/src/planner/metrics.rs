//! Path metrics and segmentation.
//!
//! Turns a raw station sequence into an itinerary: contiguous same-line
//! segments, the transfers between them, aggregate totals and the metro
//! share of travel time.

use crate::domain::{Connection, Line, Mode, Station, StationId};
use crate::network::TransitGraph;

/// A maximal run of edges on one line, not interrupted by a transfer edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub mode: Mode,
    pub line: Line,
    pub start: Station,
    pub end: Station,
    /// Number of edges travelled.
    pub stops: u32,
    /// Minutes on this segment.
    pub time: u32,
}

/// Where a transfer leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferTarget {
    /// Direct change onto another line, with no interchange edge.
    Line(Line),
    /// An interchange edge was crossed.
    Interchange,
}

impl TransferTarget {
    /// Marker reported for interchange edges.
    pub const INTERCHANGE_LABEL: &'static str = "Transfer";

    /// Returns the line name, or the interchange marker.
    pub fn label(&self) -> &str {
        match self {
            TransferTarget::Line(line) => line.as_str(),
            TransferTarget::Interchange => Self::INTERCHANGE_LABEL,
        }
    }

    /// Returns true for a change onto another line.
    pub fn is_line_change(&self) -> bool {
        matches!(self, TransferTarget::Line(_))
    }
}

/// A transfer event within a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Station where the transfer starts.
    pub station: Station,
    pub from_line: Line,
    pub to_line: TransferTarget,
    /// Minutes spent; zero for direct line changes.
    pub time: u32,
}

/// One traversed edge of a path.
#[derive(Debug, Clone, PartialEq)]
pub struct TraversedEdge {
    pub from: Station,
    pub to: Station,
    pub connection: Connection,
}

/// The structured itinerary for one path.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMetrics {
    /// Stations in travel order.
    pub path: Vec<Station>,
    pub edges: Vec<TraversedEdge>,
    pub segments: Vec<Segment>,
    pub transfers: Vec<Transfer>,
    /// Minutes, including transfer edges.
    pub total_time: u32,
    pub total_cost: u32,
    /// Kilometres.
    pub total_distance: f64,
    /// Mean comfort rating over traversed edges.
    pub avg_comfort: f64,
    /// Minutes on metro edges.
    pub metro_time: u32,
    /// Minutes on non-transfer edges.
    pub travel_time: u32,
    /// Metro share of travel time, 0-100. Zero when travel time is zero.
    pub metro_percentage: f64,
}

impl RouteMetrics {
    /// Number of transfer events, interchange edges included.
    pub fn num_transfers(&self) -> usize {
        self.transfers.len()
    }

    /// Transfers that change line, excluding interchange-edge markers.
    pub fn line_changes(&self) -> impl Iterator<Item = &Transfer> {
        self.transfers.iter().filter(|t| t.to_line.is_line_change())
    }
}

/// Segment accumulator state.
#[derive(Debug)]
enum SegmentState {
    Idle,
    Open(Segment),
}

/// Builds segments and transfers edge by edge.
///
/// The current line outlives segments: it survives an interchange edge, so
/// a line change across an interchange is recorded as well.
#[derive(Debug)]
struct SegmentBuilder {
    state: SegmentState,
    current_line: Option<Line>,
    segments: Vec<Segment>,
    transfers: Vec<Transfer>,
}

impl SegmentBuilder {
    fn new() -> Self {
        Self {
            state: SegmentState::Idle,
            current_line: None,
            segments: Vec::new(),
            transfers: Vec::new(),
        }
    }

    fn push(&mut self, from: &Station, to: &Station, connection: &Connection) {
        match connection.mode {
            Mode::Transfer => self.interchange(from, connection),
            Mode::LocalTrain | Mode::Metro => self.travel(from, to, connection),
        }
    }

    fn interchange(&mut self, at: &Station, connection: &Connection) {
        self.close();
        if let Some(line) = &self.current_line {
            self.transfers.push(Transfer {
                station: at.clone(),
                from_line: line.clone(),
                to_line: TransferTarget::Interchange,
                time: connection.time,
            });
        }
    }

    fn travel(&mut self, from: &Station, to: &Station, connection: &Connection) {
        let same_line = matches!(&self.state, SegmentState::Open(seg) if seg.line == connection.line);

        if same_line {
            if let SegmentState::Open(seg) = &mut self.state {
                seg.end = to.clone();
                seg.stops += 1;
                seg.time += connection.time;
            }
        } else {
            self.close();
            self.state = SegmentState::Open(Segment {
                mode: connection.mode,
                line: connection.line.clone(),
                start: from.clone(),
                end: to.clone(),
                stops: 1,
                time: connection.time,
            });

            if let Some(previous) = &self.current_line
                && *previous != connection.line
            {
                self.transfers.push(Transfer {
                    station: from.clone(),
                    from_line: previous.clone(),
                    to_line: TransferTarget::Line(connection.line.clone()),
                    time: 0,
                });
            }
        }

        self.current_line = Some(connection.line.clone());
    }

    fn close(&mut self) {
        if let SegmentState::Open(seg) = std::mem::replace(&mut self.state, SegmentState::Idle) {
            self.segments.push(seg);
        }
    }

    fn finish(mut self) -> (Vec<Segment>, Vec<Transfer>) {
        self.close();
        (self.segments, self.transfers)
    }
}

/// Compute the metrics of a path.
///
/// Returns `None` for paths with fewer than two stations or with a station
/// the graph does not know. Consecutive stations with no connection between
/// them are skipped.
pub fn path_metrics(graph: &TransitGraph, path: &[StationId]) -> Option<RouteMetrics> {
    if path.len() < 2 {
        return None;
    }
    let stations = path
        .iter()
        .map(|id| graph.get_station(*id).cloned())
        .collect::<Option<Vec<Station>>>()?;

    let mut edges = Vec::with_capacity(path.len() - 1);
    let mut builder = SegmentBuilder::new();
    let mut total_time = 0;
    let mut total_cost = 0;
    let mut total_distance = 0.0;
    let mut comfort_sum = 0u32;
    let mut metro_time = 0;
    let mut travel_time = 0;

    for (ids, names) in path.windows(2).zip(stations.windows(2)) {
        let Some(connection) = graph.connection(ids[0], ids[1]) else {
            continue;
        };
        let (from, to) = (&names[0], &names[1]);

        total_time += connection.time;
        total_cost += connection.cost;
        total_distance += connection.distance;
        comfort_sum += u32::from(connection.comfort);

        if connection.is_metro() {
            metro_time += connection.time;
        }
        if connection.mode.is_travel() {
            travel_time += connection.time;
        }

        builder.push(from, to, connection);
        edges.push(TraversedEdge {
            from: from.clone(),
            to: to.clone(),
            connection: connection.clone(),
        });
    }

    let (segments, transfers) = builder.finish();

    let avg_comfort = if edges.is_empty() {
        0.0
    } else {
        f64::from(comfort_sum) / edges.len() as f64
    };
    let metro_percentage = if travel_time > 0 {
        f64::from(metro_time) / f64::from(travel_time) * 100.0
    } else {
        0.0
    };

    Some(RouteMetrics {
        path: stations,
        edges,
        segments,
        transfers,
        total_time,
        total_cost,
        total_distance,
        avg_comfort,
        metro_time,
        travel_time,
        metro_percentage,
    })
}
