//! Great-circle math over decimal-degree coordinates.

use crate::models::Coordinate;

/// Mean Earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Great-circle distance between two points in nautical miles (haversine).
///
/// Pure numeric function: identical inputs return bit-identical results.
/// Coordinates outside the valid degree ranges are not rejected here;
/// they produce a mathematically defined but meaningless distance.
pub fn great_circle_distance_nm(from: Coordinate, to: Coordinate) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let dphi = (to.lat - from.lat).to_radians();
    let dlambda = (to.lon - from.lon).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_NM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Initial great-circle bearing from `from` to `to`, degrees in [0, 360).
pub fn initial_bearing_deg(from: Coordinate, to: Coordinate) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let dlambda = (to.lon - from.lon).to_radians();

    let y = dlambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlambda.cos();

    normalize_bearing(y.atan2(x).to_degrees())
}

/// Fold a possibly negative angle into [0, 360).
fn normalize_bearing(deg: f64) -> f64 {
    ((deg % 360.0) + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const KJFK: Coordinate = Coordinate {
        lat: 40.6398,
        lon: -73.7789,
    };
    const EGLL: Coordinate = Coordinate {
        lat: 51.4706,
        lon: -0.4619,
    };

    #[test]
    fn jfk_to_heathrow_distance() {
        let dist = great_circle_distance_nm(KJFK, EGLL);
        assert!((dist - 3009.0).abs() < 5.0, "got {dist}");
    }

    #[test]
    fn jfk_to_heathrow_bearing() {
        let brg = initial_bearing_deg(KJFK, EGLL);
        assert!((brg - 51.0).abs() < 1.0, "got {brg}");
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = great_circle_distance_nm(KJFK, EGLL);
        let ba = great_circle_distance_nm(EGLL, KJFK);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn distance_zero_iff_same_point() {
        let same = great_circle_distance_nm(KJFK, KJFK);
        assert_eq!(same, 0.0);

        let nearby = Coordinate::new(KJFK.lat + 1e-4, KJFK.lon);
        assert!(great_circle_distance_nm(KJFK, nearby) > 0.0);
    }

    #[test]
    fn bearing_stays_in_range() {
        let points = [
            (Coordinate::new(0.0, 0.0), Coordinate::new(-10.0, -10.0)),
            (Coordinate::new(51.0, 0.0), Coordinate::new(40.0, -74.0)),
            (Coordinate::new(-33.9, 151.2), Coordinate::new(35.7, 139.7)),
            (Coordinate::new(80.0, 10.0), Coordinate::new(-80.0, 10.0)),
        ];
        for (a, b) in points {
            let brg = initial_bearing_deg(a, b);
            assert!((0.0..360.0).contains(&brg), "bearing {brg} out of range");
        }
    }

    #[test]
    fn reciprocal_bearing_differs_by_about_180() {
        // Short leg (Paris -> Frankfurt): convergence of meridians is small,
        // so the reciprocal approximation is tight. Long transatlantic legs
        // diverge from 180 by tens of degrees and are not asserted here.
        let lfpg = Coordinate::new(49.0097, 2.5479);
        let eddf = Coordinate::new(50.0333, 8.5706);
        let fwd = initial_bearing_deg(lfpg, eddf);
        let back = initial_bearing_deg(eddf, lfpg);
        let diff = (back - fwd).rem_euclid(360.0);
        assert!((diff - 180.0).abs() < 10.0, "diff {diff}");
    }

    #[test]
    fn due_east_on_equator_is_090() {
        let brg = initial_bearing_deg(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 10.0));
        assert!((brg - 90.0).abs() < 1e-6);
    }
}
