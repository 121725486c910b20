//! Station name resolution.
//!
//! Users type station names loosely ("andheri", "ghatk"). This module maps
//! such input onto the exact names in the transit graph.

use crate::domain::StationId;
use crate::network::TransitGraph;

/// Resolve user input to a station.
///
/// Tries an exact case-insensitive match first, then the first station (in
/// network order) whose name contains the input. Surrounding whitespace is
/// ignored; empty input never matches.
///
/// # Example
///
/// ```
/// use journey_server::network::mumbai_network;
/// use journey_server::stations::resolve_station;
///
/// let graph = mumbai_network().build().unwrap();
/// let id = resolve_station(&graph, "  ghatkopar ").unwrap();
/// assert_eq!(graph.station(id).as_str(), "Ghatkopar");
/// ```
pub fn resolve_station(graph: &TransitGraph, input: &str) -> Option<StationId> {
    let query = input.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    graph
        .stations()
        .find(|(_, s)| s.as_str().to_lowercase() == query)
        .or_else(|| {
            graph
                .stations()
                .find(|(_, s)| s.as_str().to_lowercase().contains(&query))
        })
        .map(|(id, _)| id)
}

/// All station names, sorted.
pub fn sorted_station_names(graph: &TransitGraph) -> Vec<String> {
    let mut names: Vec<String> = graph
        .stations()
        .map(|(_, s)| s.as_str().to_string())
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Connection, Line, Mode};
    use crate::network::TransitGraphBuilder;

    fn graph() -> TransitGraph {
        let local = || Connection::new(3, 5, 5, Mode::LocalTrain, Line::new("Western Line")).unwrap();
        TransitGraphBuilder::new()
            .with("Borivali", "Kandivali", local())
            .with("Kandivali", "Borivali Metro", local())
            .with("Borivali Metro", "Dahisar", local())
            .build()
    }

    fn resolved(graph: &TransitGraph, input: &str) -> Option<String> {
        resolve_station(graph, input).map(|id| graph.station(id).as_str().to_string())
    }

    #[test]
    fn exact_match_ignores_case_and_whitespace() {
        let g = graph();
        assert_eq!(resolved(&g, "kandivali"), Some("Kandivali".into()));
        assert_eq!(resolved(&g, " BORIVALI METRO "), Some("Borivali Metro".into()));
    }

    #[test]
    fn exact_match_beats_earlier_partial_match() {
        let g = graph();
        // "Borivali" is a substring of "Borivali Metro" but matches exactly.
        assert_eq!(resolved(&g, "borivali"), Some("Borivali".into()));
    }

    #[test]
    fn partial_match_takes_first_in_network_order() {
        let g = graph();
        assert_eq!(resolved(&g, "bori"), Some("Borivali".into()));
        assert_eq!(resolved(&g, "metro"), Some("Borivali Metro".into()));
        assert_eq!(resolved(&g, "hisa"), Some("Dahisar".into()));
    }

    #[test]
    fn no_match() {
        let g = graph();
        assert_eq!(resolved(&g, "Churchgate"), None);
        assert_eq!(resolved(&g, ""), None);
        assert_eq!(resolved(&g, "   "), None);
    }

    #[test]
    fn sorted_names() {
        let g = graph();
        assert_eq!(
            sorted_station_names(&g),
            vec!["Borivali", "Borivali Metro", "Dahisar", "Kandivali"]
        );
    }
}
