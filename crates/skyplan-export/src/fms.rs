//! X-Plane 11/12 `.fms` route file.

use std::fmt::Write;

use skyplan_core::RouteResult;

/// AIRAC cycle stamped into the header.
const CYCLE: &str = "2401";

pub fn render(route: &RouteResult) -> String {
    let dep = &route.departure;
    let arr = &route.arrival;

    let mut out = String::new();
    out.push_str("I\n");
    out.push_str("1100 Version\n");
    let _ = writeln!(out, "CYCLE {CYCLE}");
    let _ = writeln!(out, "ADEP {}", dep.icao);
    let _ = writeln!(out, "ADES {}", arr.icao);
    let _ = writeln!(out, "NUMENR {}", route.waypoints.len() + 2);

    let _ = writeln!(
        out,
        "1 {} ADEP 0.000000 {:.6} {:.6}",
        dep.icao, dep.lat, dep.lon
    );
    for wp in &route.waypoints {
        let _ = writeln!(out, "11 {} DRCT 0.000000 {:.6} {:.6}", wp.name, wp.lat, wp.lon);
    }
    let _ = writeln!(
        out,
        "1 {} ADES 0.000000 {:.6} {:.6}",
        arr.icao, arr.lat, arr.lon
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::transatlantic;

    #[test]
    fn fms_layout() {
        let route = transatlantic();
        let body = render(&route);
        let lines: Vec<&str> = body.lines().collect();

        assert_eq!(lines[0], "I");
        assert_eq!(lines[1], "1100 Version");
        assert_eq!(lines[2], "CYCLE 2401");
        assert_eq!(lines[3], "ADEP KJFK");
        assert_eq!(lines[4], "ADES EGLL");
        assert_eq!(lines[5], format!("NUMENR {}", route.waypoints.len() + 2));
        assert!(lines[6].starts_with("1 KJFK ADEP 0.000000 40.639800 -73.778900"));
        assert!(lines[7].starts_with("11 "));
        assert!(lines[7].contains(" DRCT "));
        assert!(lines.last().unwrap().starts_with("1 EGLL ADES"));
        // Entry count matches the declared NUMENR.
        assert_eq!(lines.len(), 6 + route.waypoints.len() + 2);
    }
}
