//! PMDG `.rte` route file.

use std::fmt::Write;

use skyplan_core::RouteResult;

pub fn render(route: &RouteResult) -> String {
    let mut out = String::new();
    out.push_str("PMDG RTE FORMAT\n");
    out.push_str("1\n");
    let _ = writeln!(out, "{}", route.departure.icao);
    let _ = writeln!(out, "{}", route.arrival.icao);

    for wp in &route.waypoints {
        let _ = writeln!(out, "{} {:.6} {:.6}", wp.name, wp.lat, wp.lon);
    }

    out.push_str("-----\n");
    let _ = writeln!(out, "Cruise: FL{}", route.flight_level());
    let _ = writeln!(out, "Aircraft: {}", route.aircraft.name);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::transatlantic;

    #[test]
    fn rte_layout() {
        let route = transatlantic();
        let body = render(&route);
        let lines: Vec<&str> = body.lines().collect();

        assert_eq!(lines[0], "PMDG RTE FORMAT");
        assert_eq!(lines[1], "1");
        assert_eq!(lines[2], "KJFK");
        assert_eq!(lines[3], "EGLL");
        // One line per waypoint between the header and the trailer.
        assert_eq!(lines.len(), 4 + route.waypoints.len() + 3);
        assert!(body.contains("Cruise: FL350"));
        assert!(body.contains("Aircraft: Boeing 737-800"));
        assert!(body.contains("TUSKY 41.550000 -66.910000"));
    }
}
