//! Core data models for route planning.

use serde::{Deserialize, Serialize};

/// A position on the globe in decimal degrees.
///
/// Latitude is expected in [-90, 90], longitude in [-180, 180]. The engine
/// does not range-check; directory code validates airport records before
/// they get here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// An airport record resolved by the directory collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    pub icao: String,
    #[serde(default)]
    pub iata: Option<String>,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub elevation_ft: i32,
}

impl Airport {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Performance figures for a selectable aircraft.
///
/// `cruise_speed_kt` and `fuel_burn_lbs_hr` are expected to be positive;
/// the performance module substitutes documented defaults when they are
/// missing or non-positive instead of failing the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    /// ICAO type designator, e.g. "B738".
    pub icao_type: String,
    pub name: String,
    pub cruise_speed_kt: f64,
    pub fuel_burn_lbs_hr: f64,
    pub max_altitude_ft: f64,
    /// Simulators the type is available for.
    #[serde(default)]
    pub simulators: Vec<String>,
}

/// Where a waypoint's name and position came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaypointKind {
    /// Drawn from the static known-city-pair table.
    Named,
    /// Generated from the position itself (letter pattern or grid label).
    Synthetic,
    /// Plain fractional-position label (WP01, WP02, ...).
    Interpolated,
}

/// A single point along the route.
///
/// The sequence order is the route order, departure to arrival. It must
/// never be re-sorted by name or coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub kind: WaypointKind,
}

/// The flat result record produced once per route request.
///
/// Created fresh by [`crate::route::compute_route`] and never mutated
/// afterwards; callers may serialize, export, or drop it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResult {
    pub departure: Airport,
    pub arrival: Airport,
    pub aircraft: Aircraft,
    /// Great-circle distance in nautical miles.
    pub distance_nm: f64,
    /// Initial great-circle bearing in degrees, [0, 360).
    pub initial_bearing_deg: f64,
    pub cruise_altitude_ft: f64,
    /// The cruise speed the estimate actually used (after default
    /// substitution).
    pub cruise_speed_kt: f64,
    /// Departure-to-arrival ordered enroute waypoints.
    pub waypoints: Vec<Waypoint>,
    /// Estimated time enroute in hours.
    pub flight_time_hours: f64,
    /// Block fuel including the reserve factor, in pounds.
    pub fuel_required_lbs: f64,
}

impl RouteResult {
    /// Route string in dispatch shorthand: `KJFK WPT .. WPT EGLL`.
    pub fn route_string(&self) -> String {
        let mut parts = Vec::with_capacity(self.waypoints.len() + 2);
        parts.push(self.departure.icao.clone());
        parts.extend(self.waypoints.iter().map(|wp| wp.name.clone()));
        parts.push(self.arrival.icao.clone());
        parts.join(" ")
    }

    /// Flight level from the cruise altitude, e.g. 35000 ft -> 350.
    pub fn flight_level(&self) -> i32 {
        (self.cruise_altitude_ft / 100.0).floor() as i32
    }
}
