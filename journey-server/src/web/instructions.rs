//! Human-readable journey instructions.

use crate::planner::RouteMetrics;

/// Round to one decimal place for display.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Render a route as step-by-step instructions followed by a summary.
///
/// Only line changes are listed as transfers; crossing an interchange edge
/// is already visible as the gap between two segments.
pub fn instructions(metrics: &RouteMetrics) -> Vec<String> {
    let mut lines: Vec<String> = metrics
        .segments
        .iter()
        .map(|seg| {
            format!(
                "Take {} - {}\n   From: {} -> To: {}\n   ({} stops, ~{} min)",
                seg.mode, seg.line, seg.start, seg.end, seg.stops, seg.time
            )
        })
        .collect();

    let changes: Vec<_> = metrics.line_changes().collect();
    if !changes.is_empty() {
        lines.push(String::new());
        lines.push("Transfers:".to_string());
        for t in &changes {
            lines.push(format!(
                "   -> At {}: Change from {} to {}",
                t.station,
                t.from_line,
                t.to_line.label()
            ));
        }
    }

    lines.push(String::new());
    lines.push("Journey Summary:".to_string());
    lines.push(format!("   Total Time: {} minutes", metrics.total_time));
    lines.push(format!("   Total Cost: ₹{}", metrics.total_cost));
    lines.push(format!("   Distance: {:.1} km", metrics.total_distance));
    lines.push(format!("   Transfers: {}", changes.len()));
    lines.push(format!("   Comfort: {:.1}/10", metrics.avg_comfort));

    if metrics.metro_time > 0 {
        lines.push(format!(
            "   Metro Usage: {:.1}% of journey",
            metrics.metro_percentage
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::mumbai_network;
    use crate::planner::{Planner, PlannerConfig, RouteType};

    fn route(from: &str, to: &str, route_type: RouteType) -> RouteMetrics {
        let graph = mumbai_network().build().unwrap();
        let config = PlannerConfig::default();
        Planner::new(&graph, &config)
            .plan(
                graph.station_id(from).unwrap(),
                graph.station_id(to).unwrap(),
                route_type,
            )
            .unwrap()
    }

    #[test]
    fn rounding() {
        assert_eq!(round1(66.666), 66.7);
        assert_eq!(round1(5.0), 5.0);
        assert_eq!(round1(0.04), 0.0);
    }

    #[test]
    fn single_segment_metro_route() {
        let lines = instructions(&route("Andheri", "Ghatkopar", RouteType::Fastest));

        assert_eq!(
            lines[0],
            "Take Metro - Metro Line 1\n   From: Andheri -> To: Ghatkopar\n   (8 stops, ~16 min)"
        );
        assert!(!lines.contains(&"Transfers:".to_string()));
        assert!(lines.contains(&"   Total Time: 16 minutes".to_string()));
        assert!(lines.contains(&"   Total Cost: ₹160".to_string()));
        assert!(lines.contains(&"   Distance: 16.0 km".to_string()));
        assert!(lines.contains(&"   Transfers: 0".to_string()));
        assert!(lines.contains(&"   Comfort: 10.0/10".to_string()));
        assert_eq!(lines.last().unwrap(), "   Metro Usage: 100.0% of journey");
    }

    #[test]
    fn local_route_lists_line_change() {
        let lines = instructions(&route("Andheri", "Ghatkopar", RouteType::Cheapest));

        assert!(lines[0].starts_with("Take Local Train - Western Line"));
        assert!(lines[1].starts_with("Take Local Train - Central Line"));
        assert!(lines.contains(&"Transfers:".to_string()));
        assert!(lines.contains(&"   -> At Dadar: Change from Western Line to Central Line".to_string()));
        assert!(lines.contains(&"   Transfers: 1".to_string()));
        assert!(!lines.iter().any(|l| l.contains("Metro Usage")));
    }

    #[test]
    fn interchange_markers_are_not_listed() {
        // Western Line, the Goregaon interchange edge, then Metro 2A.
        let metrics = route("Ram Mandir", "Eksar", RouteType::Fastest);
        assert_eq!(metrics.num_transfers(), 2);

        let lines = instructions(&metrics);
        assert!(!lines.iter().any(|l| l.contains("to Transfer")));
        assert!(lines.contains(
            &"   -> At Goregaon Metro: Change from Western Line to Metro Line 2A".to_string()
        ));
        assert!(lines.contains(&"   Transfers: 1".to_string()));
    }
}
