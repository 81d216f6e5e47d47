//! MSFS / FSX / Prepar3D AceXML `.pln` flight plan.

use std::fmt::Write;

use skyplan_core::RouteResult;

/// AceXML world position: `N40.639800°,W73.778900°,+000013.00`.
fn world_position(lat: f64, lon: f64, altitude_ft: f64) -> String {
    format!(
        "{}{:.6}\u{00b0},{}{:.6}\u{00b0},+{:09.2}",
        if lat >= 0.0 { 'N' } else { 'S' },
        lat.abs(),
        if lon >= 0.0 { 'E' } else { 'W' },
        lon.abs(),
        altitude_ft,
    )
}

pub fn render(route: &RouteResult) -> String {
    let dep = &route.departure;
    let arr = &route.arrival;

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<SimBase.Document Type=\"AceXML\" version=\"1,0\">\n");
    out.push_str("  <Descr>AceXML Document</Descr>\n");
    out.push_str("  <FlightPlan.FlightPlan>\n");
    let _ = writeln!(out, "    <Title>{} to {}</Title>", dep.icao, arr.icao);
    out.push_str("    <FPType>IFR</FPType>\n");
    out.push_str("    <RouteType>HighAlt</RouteType>\n");
    let _ = writeln!(out, "    <CruisingAlt>{}</CruisingAlt>", route.cruise_altitude_ft as i64);
    let _ = writeln!(out, "    <DepartureID>{}</DepartureID>", dep.icao);
    let _ = writeln!(
        out,
        "    <DepartureLLA>{}</DepartureLLA>",
        world_position(dep.lat, dep.lon, dep.elevation_ft as f64)
    );
    let _ = writeln!(out, "    <DestinationID>{}</DestinationID>", arr.icao);
    let _ = writeln!(
        out,
        "    <DestinationLLA>{}</DestinationLLA>",
        world_position(arr.lat, arr.lon, arr.elevation_ft as f64)
    );
    let _ = writeln!(out, "    <DepartureName>{}</DepartureName>", dep.name);
    let _ = writeln!(out, "    <DestinationName>{}</DestinationName>", arr.name);
    let _ = writeln!(out, "    <Descr>{}</Descr>", route.aircraft.name);

    write_airport_waypoint(&mut out, &dep.icao, dep.lat, dep.lon, dep.elevation_ft as f64);
    for wp in &route.waypoints {
        let _ = writeln!(out, "    <ATCWaypoint id=\"{}\">", wp.name);
        out.push_str("      <ATCWaypointType>User</ATCWaypointType>\n");
        let _ = writeln!(
            out,
            "      <WorldPosition>{}</WorldPosition>",
            world_position(wp.lat, wp.lon, route.cruise_altitude_ft)
        );
        out.push_str("    </ATCWaypoint>\n");
    }
    write_airport_waypoint(&mut out, &arr.icao, arr.lat, arr.lon, arr.elevation_ft as f64);

    out.push_str("  </FlightPlan.FlightPlan>\n");
    out.push_str("</SimBase.Document>\n");
    out
}

fn write_airport_waypoint(out: &mut String, icao: &str, lat: f64, lon: f64, elevation_ft: f64) {
    let _ = writeln!(out, "    <ATCWaypoint id=\"{icao}\">");
    out.push_str("      <ATCWaypointType>Airport</ATCWaypointType>\n");
    let _ = writeln!(
        out,
        "      <WorldPosition>{}</WorldPosition>",
        world_position(lat, lon, elevation_ft)
    );
    out.push_str("      <ICAO>\n");
    let _ = writeln!(out, "        <ICAOIdent>{icao}</ICAOIdent>");
    out.push_str("      </ICAO>\n");
    out.push_str("    </ATCWaypoint>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::transatlantic;

    #[test]
    fn world_position_hemisphere_letters() {
        assert_eq!(
            world_position(40.6398, -73.7789, 13.0),
            "N40.639800\u{00b0},W73.778900\u{00b0},+000013.00"
        );
        assert_eq!(
            world_position(-33.9425, 151.1772, 21.0),
            "S33.942500\u{00b0},E151.177200\u{00b0},+000021.00"
        );
    }

    #[test]
    fn pln_document_structure() {
        let route = transatlantic();
        let body = render(&route);

        assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(body.contains("<Title>KJFK to EGLL</Title>"));
        assert!(body.contains("<FPType>IFR</FPType>"));
        assert!(body.contains("<CruisingAlt>35000</CruisingAlt>"));
        assert!(body.contains("<DepartureID>KJFK</DepartureID>"));
        assert!(body.contains("<DestinationID>EGLL</DestinationID>"));
        // Airports plus one block per enroute waypoint.
        let blocks = body.matches("<ATCWaypoint id=").count();
        assert_eq!(blocks, route.waypoints.len() + 2);
        assert!(body.ends_with("</SimBase.Document>\n"));
    }
}
