//! Flight-time and fuel estimation.

/// Fallback cruise speed when the aircraft record has none, in knots.
pub const DEFAULT_CRUISE_SPEED_KT: f64 = 450.0;
/// Fallback fuel burn when the aircraft record has none, in lbs/hour.
pub const DEFAULT_FUEL_BURN_LBS_HR: f64 = 5000.0;
/// Canonical reserve multiplier: 15% on top of trip fuel.
pub const DEFAULT_RESERVE_FACTOR: f64 = 1.15;

/// Resolve a cruise speed to a usable positive value.
///
/// Zero, negative, NaN, or missing values fall back to the default
/// rather than failing; flight planning degrades gracefully when
/// aircraft data is incomplete.
pub fn resolve_cruise_speed_kt(cruise_speed_kt: Option<f64>) -> f64 {
    match cruise_speed_kt {
        Some(speed) if speed > 0.0 => speed,
        _ => DEFAULT_CRUISE_SPEED_KT,
    }
}

/// Resolve a fuel-burn rate to a usable positive value (lbs/hour).
pub fn resolve_fuel_burn_lbs_hr(fuel_burn_lbs_hr: Option<f64>) -> f64 {
    match fuel_burn_lbs_hr {
        Some(burn) if burn > 0.0 => burn,
        _ => DEFAULT_FUEL_BURN_LBS_HR,
    }
}

/// Estimated time enroute in hours. `cruise_speed_kt` must already be
/// resolved to a positive value; the resolvers above guarantee that.
pub fn flight_time_hours(distance_nm: f64, cruise_speed_kt: f64) -> f64 {
    distance_nm / cruise_speed_kt
}

/// Block fuel in pounds: trip burn scaled by the reserve factor.
pub fn fuel_required_lbs(fuel_burn_lbs_hr: f64, flight_time_hours: f64, reserve_factor: f64) -> f64 {
    fuel_burn_lbs_hr * flight_time_hours * reserve_factor
}
