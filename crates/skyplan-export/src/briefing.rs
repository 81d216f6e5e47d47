//! Plaintext operational flight plan.
//!
//! This is the printable briefing document; weather lines are included
//! verbatim when the caller fetched them.

use std::fmt::Write;

use chrono::Utc;
use skyplan_core::RouteResult;

use crate::format_ete;

/// Raw observation strings attached to the briefing.
#[derive(Debug, Clone, Default)]
pub struct BriefingWeather {
    pub departure_metar: Option<String>,
    pub arrival_metar: Option<String>,
}

pub fn render(route: &RouteResult, weather: Option<&BriefingWeather>) -> String {
    let mut out = String::new();

    out.push_str("================================================\n");
    out.push_str("            OPERATIONAL FLIGHT PLAN\n");
    out.push_str("================================================\n");
    let _ = writeln!(out, "Generated: {}", Utc::now().format("%a, %d %b %Y %H:%M UTC"));
    out.push('\n');

    out.push_str("FLIGHT INFORMATION\n");
    let _ = writeln!(out, "From:     {} - {}", route.departure.icao, route.departure.name);
    let _ = writeln!(out, "To:       {} - {}", route.arrival.icao, route.arrival.name);
    let _ = writeln!(
        out,
        "Aircraft: {} ({})",
        route.aircraft.name, route.aircraft.icao_type
    );
    let _ = writeln!(out, "Distance: {} NM", route.distance_nm.round() as i64);
    let _ = writeln!(out, "Heading:  {:03}", route.initial_bearing_deg.round() as i64);
    let _ = writeln!(
        out,
        "Cruise:   FL{} / {} kts",
        route.flight_level(),
        route.cruise_speed_kt.round() as i64
    );
    let _ = writeln!(out, "ETE:      {}", format_ete(route.flight_time_hours));
    let _ = writeln!(out, "Fuel:     {} lbs", route.fuel_required_lbs.round() as i64);
    out.push('\n');

    out.push_str("ROUTE\n");
    let _ = writeln!(out, "{}", route.route_string());
    out.push('\n');

    if !route.waypoints.is_empty() {
        out.push_str("WAYPOINTS\n");
        for (idx, wp) in route.waypoints.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>2}. {:<7} {:>9.4}  {:>10.4}",
                idx + 1,
                wp.name,
                wp.lat,
                wp.lon
            );
        }
        out.push('\n');
    }

    if let Some(weather) = weather {
        if weather.departure_metar.is_some() || weather.arrival_metar.is_some() {
            out.push_str("WEATHER\n");
            if let Some(metar) = &weather.departure_metar {
                let _ = writeln!(out, "DEP: {metar}");
            }
            if let Some(metar) = &weather.arrival_metar {
                let _ = writeln!(out, "ARR: {metar}");
            }
            out.push('\n');
        }
    }

    out.push_str("For flight simulation use only\n");
    out
}
