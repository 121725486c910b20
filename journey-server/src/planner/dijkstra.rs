//! Single-source shortest path over the transit graph.

use ordered_float::OrderedFloat;
use pathfinding::prelude::dijkstra;

use crate::domain::StationId;
use crate::network::TransitGraph;

use super::strategy::WeightStrategy;

/// Find a minimum-weight path with Dijkstra's algorithm.
///
/// Only connections the strategy admits are traversed. Returns the station
/// sequence from `from` to `to` inclusive, or `None` if `to` is unreachable
/// in the candidate graph. When `from == to` the one-station path is
/// returned. The same graph and strategy always give the same path.
pub fn shortest_path<S>(
    graph: &TransitGraph,
    from: StationId,
    to: StationId,
    strategy: &S,
) -> Option<Vec<StationId>>
where
    S: WeightStrategy + ?Sized,
{
    if !graph.contains_id(from) || !graph.contains_id(to) {
        return None;
    }

    let successors = move |&station: &StationId| {
        graph
            .neighbors(station)
            .filter(move |(_, connection)| strategy.admits(connection))
            .map(move |(next, connection)| {
                let weight = strategy.weight(connection);
                debug_assert!(weight >= 0.0, "negative edge weight {weight}");
                (next, OrderedFloat(weight))
            })
    };

    dijkstra(&from, successors, |&station| station == to).map(|(path, _cost)| path)
}
