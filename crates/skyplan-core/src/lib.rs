pub mod geo;
pub mod models;
pub mod performance;
pub mod route;
pub mod waypoints;

pub use geo::{great_circle_distance_nm, initial_bearing_deg, EARTH_RADIUS_NM};
pub use models::{Aircraft, Airport, Coordinate, RouteResult, Waypoint, WaypointKind};
pub use performance::{
    flight_time_hours, fuel_required_lbs, resolve_cruise_speed_kt, resolve_fuel_burn_lbs_hr,
    DEFAULT_CRUISE_SPEED_KT, DEFAULT_FUEL_BURN_LBS_HR, DEFAULT_RESERVE_FACTOR,
};
pub use route::{compute_route, PlannerConfig};
pub use waypoints::{generate_waypoints, named_route, waypoint_count, NamingPolicy, RouteKey};
