//! Route assembly: the single engine entry point callers invoke.

use crate::geo::{great_circle_distance_nm, initial_bearing_deg};
use crate::models::{Aircraft, Airport, RouteResult};
use crate::performance::{
    flight_time_hours, fuel_required_lbs, resolve_cruise_speed_kt, resolve_fuel_burn_lbs_hr,
    DEFAULT_RESERVE_FACTOR,
};
use crate::waypoints::{
    generate_waypoints, NamingPolicy, RouteKey, MAX_WAYPOINTS, MIN_WAYPOINTS, NM_PER_WAYPOINT,
};

/// Unified planning policy.
///
/// Naming heuristic, reserve factor, and waypoint density live here with
/// one set of documented defaults.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub naming: NamingPolicy,
    /// Multiplier on trip fuel; 1.15 = 15% reserve.
    pub reserve_factor: f64,
    pub nm_per_waypoint: f64,
    pub min_waypoints: usize,
    pub max_waypoints: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            naming: NamingPolicy::default(),
            reserve_factor: DEFAULT_RESERVE_FACTOR,
            nm_per_waypoint: NM_PER_WAYPOINT,
            min_waypoints: MIN_WAYPOINTS,
            max_waypoints: MAX_WAYPOINTS,
        }
    }
}

impl PlannerConfig {
    fn waypoint_count(&self, distance_nm: f64) -> usize {
        ((distance_nm / self.nm_per_waypoint).floor() as usize)
            .clamp(self.min_waypoints, self.max_waypoints)
    }
}

/// Compute a full route between two resolved airports.
///
/// `cruise_speed_kt` overrides the aircraft's cruise speed when given;
/// non-positive or missing values fall back through the aircraft record
/// to the documented default. Pure computation: no I/O, no shared state,
/// deterministic for identical inputs.
pub fn compute_route(
    departure: &Airport,
    arrival: &Airport,
    aircraft: &Aircraft,
    cruise_altitude_ft: f64,
    cruise_speed_kt: Option<f64>,
    config: &PlannerConfig,
) -> RouteResult {
    let dep = departure.coordinate();
    let arr = arrival.coordinate();

    let distance_nm = great_circle_distance_nm(dep, arr);
    let initial_bearing = initial_bearing_deg(dep, arr);

    let key = RouteKey::new(departure.icao.as_str(), arrival.icao.as_str());
    let waypoints = generate_waypoints(
        dep,
        arr,
        Some(&key),
        config.waypoint_count(distance_nm),
        config.naming,
    );

    let speed = resolve_cruise_speed_kt(
        cruise_speed_kt
            .filter(|kt| *kt > 0.0)
            .or(Some(aircraft.cruise_speed_kt)),
    );
    let burn = resolve_fuel_burn_lbs_hr(Some(aircraft.fuel_burn_lbs_hr));
    let hours = flight_time_hours(distance_nm, speed);
    let fuel = fuel_required_lbs(burn, hours, config.reserve_factor);

    RouteResult {
        departure: departure.clone(),
        arrival: arrival.clone(),
        aircraft: aircraft.clone(),
        distance_nm,
        initial_bearing_deg: initial_bearing,
        cruise_altitude_ft,
        cruise_speed_kt: speed,
        waypoints,
        flight_time_hours: hours,
        fuel_required_lbs: fuel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WaypointKind;

    fn airport(icao: &str, name: &str, lat: f64, lon: f64, elevation_ft: i32) -> Airport {
        Airport {
            icao: icao.to_string(),
            iata: None,
            name: name.to_string(),
            city: None,
            country: None,
            lat,
            lon,
            elevation_ft,
        }
    }

    fn b738() -> Aircraft {
        Aircraft {
            icao_type: "B738".to_string(),
            name: "Boeing 737-800".to_string(),
            cruise_speed_kt: 450.0,
            fuel_burn_lbs_hr: 5000.0,
            max_altitude_ft: 41000.0,
            simulators: vec!["MSFS2020".to_string()],
        }
    }

    #[test]
    fn transatlantic_route_end_to_end() {
        let jfk = airport("KJFK", "John F Kennedy Intl", 40.6398, -73.7789, 13);
        let lhr = airport("EGLL", "London Heathrow", 51.4706, -0.4619, 83);

        let result = compute_route(&jfk, &lhr, &b738(), 35000.0, None, &PlannerConfig::default());

        assert!((result.distance_nm - 3009.0).abs() < 5.0);
        assert!((result.initial_bearing_deg - 51.0).abs() < 1.0);
        assert!((result.flight_time_hours - 6.69).abs() < 0.02);
        assert!((result.fuel_required_lbs - 38470.0).abs() < 38470.0 * 0.01);
        // Known city pair resolves through the named table.
        assert!(result.waypoints.iter().all(|wp| wp.kind == WaypointKind::Named));
        assert_eq!(result.flight_level(), 350);
        assert!(result.route_string().starts_with("KJFK TUSKY"));
        assert!(result.route_string().ends_with("EGLL"));
    }

    #[test]
    fn zero_cruise_speed_substitutes_default() {
        let jfk = airport("KJFK", "John F Kennedy Intl", 40.6398, -73.7789, 13);
        let lhr = airport("EGLL", "London Heathrow", 51.4706, -0.4619, 83);
        let mut broken = b738();
        broken.cruise_speed_kt = 0.0;

        let result = compute_route(
            &jfk,
            &lhr,
            &broken,
            35000.0,
            Some(0.0),
            &PlannerConfig::default(),
        );
        assert_eq!(result.cruise_speed_kt, 450.0);
        assert!(result.flight_time_hours.is_finite());
        assert!(result.fuel_required_lbs.is_finite());
    }

    #[test]
    fn explicit_cruise_speed_wins() {
        let jfk = airport("KJFK", "John F Kennedy Intl", 40.6398, -73.7789, 13);
        let lhr = airport("EGLL", "London Heathrow", 51.4706, -0.4619, 83);

        let result = compute_route(
            &jfk,
            &lhr,
            &b738(),
            35000.0,
            Some(490.0),
            &PlannerConfig::default(),
        );
        assert_eq!(result.cruise_speed_kt, 490.0);
        assert!(result.flight_time_hours < 3009.0 / 450.0);
    }

    #[test]
    fn identical_airports_degenerate_but_defined() {
        let jfk = airport("KJFK", "John F Kennedy Intl", 40.6398, -73.7789, 13);

        let result = compute_route(&jfk, &jfk, &b738(), 10000.0, None, &PlannerConfig::default());
        assert_eq!(result.distance_nm, 0.0);
        assert_eq!(result.flight_time_hours, 0.0);
        assert_eq!(result.fuel_required_lbs, 0.0);
        for wp in &result.waypoints {
            assert_eq!(wp.lat, jfk.lat);
            assert_eq!(wp.lon, jfk.lon);
        }
    }

    #[test]
    fn unknown_pair_uses_synthetic_waypoints() {
        let sea = airport("KSEA", "Seattle Tacoma Intl", 47.4490, -122.3093, 433);
        let den = airport("KDEN", "Denver Intl", 39.8617, -104.6731, 5434);

        let result = compute_route(&sea, &den, &b738(), 37000.0, None, &PlannerConfig::default());
        // ~888 NM -> floor(888/200) = 4 waypoints.
        assert_eq!(result.waypoints.len(), 4);
        assert!(result
            .waypoints
            .iter()
            .all(|wp| wp.kind == WaypointKind::Synthetic));
    }

    #[test]
    fn result_round_trips_through_json() {
        let jfk = airport("KJFK", "John F Kennedy Intl", 40.6398, -73.7789, 13);
        let lhr = airport("EGLL", "London Heathrow", 51.4706, -0.4619, 83);
        let result = compute_route(&jfk, &lhr, &b738(), 35000.0, None, &PlannerConfig::default());

        let json = serde_json::to_string(&result).expect("serialize");
        let back: RouteResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.waypoints, result.waypoints);
        assert_eq!(back.distance_nm, result.distance_nm);
    }
}
