//! Waypoint generation: named city-pair chains and synthetic interpolation.

use serde::{Deserialize, Serialize};

use crate::models::{Coordinate, Waypoint, WaypointKind};

/// One enroute waypoint per this many nautical miles of route.
pub const NM_PER_WAYPOINT: f64 = 200.0;
/// Floor on the synthetic waypoint count.
pub const MIN_WAYPOINTS: usize = 3;
/// Ceiling on the synthetic waypoint count.
pub const MAX_WAYPOINTS: usize = 10;

const CONSONANTS: [char; 21] = [
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W',
    'X', 'Y', 'Z',
];
const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// How synthetic waypoints are labeled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
    /// Five-letter consonant/vowel pattern seeded from the position,
    /// e.g. "RUDOK". Looks like a real intersection name.
    #[default]
    FiveLetter,
    /// Whole-degree grid label, e.g. "47N052W".
    GridLabel,
    /// Plain sequential label, e.g. "WP01".
    Sequential,
}

/// Order-sensitive departure/arrival identifier pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteKey {
    pub from: String,
    pub to: String,
}

impl RouteKey {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into().to_uppercase(),
            to: to.into().to_uppercase(),
        }
    }
}

/// Known waypoint chains for common city pairs, stored in the forward
/// direction of the key.
const NAMED_ROUTES: &[(&str, &str, &[(&str, f64, f64)])] = &[
    (
        "KJFK",
        "EGLL",
        &[
            ("TUSKY", 41.55, -66.91),
            ("ALLRY", 44.05, -57.00),
            ("DOVEY", 46.50, -47.00),
            ("NICSO", 48.80, -35.00),
            ("MALOT", 50.50, -20.00),
            ("GISTI", 51.20, -8.30),
        ],
    ),
    (
        "KLAX",
        "KJFK",
        &[
            ("DAG", 34.96, -116.58),
            ("GUP", 35.47, -108.87),
            ("PNH", 35.23, -101.70),
            ("ICT", 37.75, -97.58),
            ("STL", 38.86, -90.48),
            ("APE", 40.15, -82.59),
        ],
    ),
    (
        "EGLL",
        "LFPG",
        &[
            ("DET", 51.30, 0.60),
            ("DVR", 51.16, 1.36),
            ("ABB", 50.13, 1.85),
            ("MERUE", 49.47, 2.20),
        ],
    ),
    (
        "EDDF",
        "LTFM",
        &[
            ("ERNAS", 48.80, 11.50),
            ("ABGAS", 47.50, 15.00),
            ("BABIT", 45.80, 19.00),
            ("ROGLA", 44.00, 23.00),
            ("RIXEN", 42.60, 26.50),
        ],
    ),
];

/// Look up a known waypoint chain for the pair, honoring direction.
///
/// A reverse-key match returns the chain reversed so the sequence still
/// runs departure to arrival.
pub fn named_route(key: &RouteKey) -> Option<Vec<Waypoint>> {
    for (from, to, chain) in NAMED_ROUTES {
        if key.from == *from && key.to == *to {
            return Some(chain.iter().map(to_named_waypoint).collect());
        }
        if key.from == *to && key.to == *from {
            return Some(chain.iter().rev().map(to_named_waypoint).collect());
        }
    }
    None
}

fn to_named_waypoint(&(name, lat, lon): &(&str, f64, f64)) -> Waypoint {
    Waypoint {
        name: name.to_string(),
        lat,
        lon,
        kind: WaypointKind::Named,
    }
}

/// Synthetic waypoint count for a route: one per ~200 NM, clamped.
pub fn waypoint_count(distance_nm: f64) -> usize {
    ((distance_nm / NM_PER_WAYPOINT).floor() as usize).clamp(MIN_WAYPOINTS, MAX_WAYPOINTS)
}

/// Generate the enroute waypoint sequence for a departure/arrival pair.
///
/// A named-table hit (either direction) wins; otherwise `count` points are
/// linearly interpolated at equal fractions between the endpoints and
/// labeled per `naming`. Identical endpoints collapse every point onto
/// that position, which is accepted output rather than an error.
pub fn generate_waypoints(
    dep: Coordinate,
    arr: Coordinate,
    key: Option<&RouteKey>,
    count: usize,
    naming: NamingPolicy,
) -> Vec<Waypoint> {
    if let Some(key) = key {
        if let Some(chain) = named_route(key) {
            return chain;
        }
    }

    let mut waypoints = Vec::with_capacity(count);
    for i in 1..=count {
        let fraction = i as f64 / (count + 1) as f64;
        let lat = dep.lat + (arr.lat - dep.lat) * fraction;
        let lon = dep.lon + (arr.lon - dep.lon) * fraction;
        let (name, kind) = match naming {
            NamingPolicy::FiveLetter => (five_letter_name(lat, lon, i), WaypointKind::Synthetic),
            NamingPolicy::GridLabel => (grid_label(lat, lon), WaypointKind::Synthetic),
            NamingPolicy::Sequential => (format!("WP{i:02}"), WaypointKind::Interpolated),
        };
        waypoints.push(Waypoint {
            name,
            lat,
            lon,
            kind,
        });
    }
    waypoints
}

/// Five-letter consonant/vowel alternating name seeded from the scaled
/// position and the waypoint index. Deterministic for identical inputs.
fn five_letter_name(lat: f64, lon: f64, index: usize) -> String {
    let lat_int = (lat * 10.0).floor().abs() as usize;
    let lon_int = (lon * 10.0).floor().abs() as usize;
    let seed = (lat_int + lon_int + index * 17) % CONSONANTS.len();

    let mut name = String::with_capacity(5);
    for i in 0..5 {
        if i % 2 == 0 {
            name.push(CONSONANTS[(seed + i * 7) % CONSONANTS.len()]);
        } else {
            name.push(VOWELS[(seed + i * 3) % VOWELS.len()]);
        }
    }
    name
}

/// Whole-degree grid label: `<2-digit lat><N/S><3-digit lon><E/W>`.
fn grid_label(lat: f64, lon: f64) -> String {
    let lat_deg = lat.round();
    let lon_deg = lon.round();
    format!(
        "{:02}{}{:03}{}",
        lat_deg.abs() as i32,
        if lat_deg >= 0.0 { 'N' } else { 'S' },
        lon_deg.abs() as i32,
        if lon_deg >= 0.0 { 'E' } else { 'W' },
    )
}
