//! Static aircraft catalog.

use std::collections::BTreeMap;

use skyplan_core::Aircraft;

use crate::DataError;

/// The selectable fleet, grouped by category for the UI.
pub struct AircraftCatalog {
    groups: BTreeMap<&'static str, Vec<Aircraft>>,
}

impl Default for AircraftCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl AircraftCatalog {
    pub fn new() -> Self {
        let mut groups = BTreeMap::new();
        groups.insert("boeing", boeing_fleet());
        groups.insert("airbus", airbus_fleet());
        groups.insert("regional", regional_fleet());
        groups.insert("cargo", cargo_fleet());
        groups.insert("general", general_aviation_fleet());
        Self { groups }
    }

    /// Resolve an ICAO type designator to its performance record.
    pub fn find(&self, icao_type: &str) -> Result<Aircraft, DataError> {
        let code = icao_type.trim().to_uppercase();
        self.groups
            .values()
            .flatten()
            .find(|aircraft| aircraft.icao_type == code)
            .cloned()
            .ok_or(DataError::UnknownAircraft(code))
    }

    /// Category name -> fleet, in stable order.
    pub fn grouped(&self) -> &BTreeMap<&'static str, Vec<Aircraft>> {
        &self.groups
    }

    pub fn all(&self) -> impl Iterator<Item = &Aircraft> {
        self.groups.values().flatten()
    }
}

fn aircraft(
    icao_type: &str,
    name: &str,
    cruise_speed_kt: f64,
    fuel_burn_lbs_hr: f64,
    max_altitude_ft: f64,
    simulators: &[&str],
) -> Aircraft {
    Aircraft {
        icao_type: icao_type.to_string(),
        name: name.to_string(),
        cruise_speed_kt,
        fuel_burn_lbs_hr,
        max_altitude_ft,
        simulators: simulators.iter().map(|s| s.to_string()).collect(),
    }
}

fn boeing_fleet() -> Vec<Aircraft> {
    vec![
        aircraft("B738", "Boeing 737-800", 450.0, 5000.0, 41000.0, &["MSFS2020", "X-Plane 12", "Prepar3D", "FSX", "PMDG"]),
        aircraft("B739", "Boeing 737-900", 450.0, 5200.0, 41000.0, &["MSFS2020", "X-Plane 12", "PMDG"]),
        aircraft("B37M", "Boeing 737 MAX 8", 453.0, 4500.0, 41000.0, &["MSFS2020", "X-Plane 12", "PMDG"]),
        aircraft("B748", "Boeing 747-8", 490.0, 12000.0, 43000.0, &["MSFS2020", "X-Plane 12", "Prepar3D", "PMDG"]),
        aircraft("B77W", "Boeing 777-300ER", 490.0, 10000.0, 43000.0, &["MSFS2020", "X-Plane 12", "Prepar3D", "PMDG"]),
        aircraft("B77L", "Boeing 777F", 490.0, 10500.0, 43000.0, &["MSFS2020", "X-Plane 12", "PMDG"]),
        aircraft("B788", "Boeing 787-8 Dreamliner", 490.0, 8000.0, 43000.0, &["MSFS2020", "X-Plane 12", "Prepar3D", "PMDG"]),
        aircraft("B789", "Boeing 787-9 Dreamliner", 490.0, 8500.0, 43000.0, &["MSFS2020", "X-Plane 12", "PMDG"]),
        aircraft("B78X", "Boeing 787-10 Dreamliner", 490.0, 9000.0, 43000.0, &["MSFS2020", "PMDG"]),
    ]
}

fn airbus_fleet() -> Vec<Aircraft> {
    vec![
        aircraft("A20N", "Airbus A320neo", 450.0, 4300.0, 39800.0, &["MSFS2020", "X-Plane 12", "Prepar3D", "FlyByWire A32NX"]),
        aircraft("A321", "Airbus A321", 450.0, 5000.0, 39800.0, &["MSFS2020", "X-Plane 12", "Prepar3D", "FSX"]),
        aircraft("A21N", "Airbus A321neo", 450.0, 4500.0, 39800.0, &["MSFS2020", "X-Plane 12", "FlyByWire"]),
        aircraft("A319", "Airbus A319", 450.0, 4500.0, 39800.0, &["MSFS2020", "X-Plane 12", "Prepar3D", "FSX"]),
        aircraft("A320", "Airbus A320", 450.0, 4800.0, 39800.0, &["MSFS2020", "X-Plane 12", "Prepar3D", "FSX"]),
        aircraft("A332", "Airbus A330-200", 470.0, 8000.0, 41000.0, &["MSFS2020", "X-Plane 12", "Prepar3D"]),
        aircraft("A333", "Airbus A330-300", 470.0, 8500.0, 41000.0, &["MSFS2020", "X-Plane 12", "Prepar3D"]),
        aircraft("A339", "Airbus A330-900neo", 470.0, 7500.0, 41000.0, &["MSFS2020", "X-Plane 12"]),
        aircraft("A359", "Airbus A350-900", 490.0, 8500.0, 43000.0, &["MSFS2020", "X-Plane 12", "Prepar3D"]),
        aircraft("A35K", "Airbus A350-1000", 490.0, 9000.0, 43000.0, &["MSFS2020", "X-Plane 12"]),
        aircraft("A388", "Airbus A380-800", 490.0, 14000.0, 43000.0, &["MSFS2020", "X-Plane 12", "Prepar3D"]),
    ]
}

fn regional_fleet() -> Vec<Aircraft> {
    vec![
        aircraft("CRJ9", "Bombardier CRJ-900", 430.0, 2500.0, 41000.0, &["MSFS2020", "X-Plane 12", "Prepar3D"]),
        aircraft("E170", "Embraer E170", 440.0, 2800.0, 41000.0, &["MSFS2020", "X-Plane 12"]),
        aircraft("E190", "Embraer E190", 440.0, 3200.0, 41000.0, &["MSFS2020", "X-Plane 12"]),
        aircraft("E195", "Embraer E195", 440.0, 3400.0, 41000.0, &["MSFS2020", "X-Plane 12"]),
        aircraft("DH8D", "Bombardier Dash 8 Q400", 360.0, 1800.0, 27000.0, &["MSFS2020", "X-Plane 12", "Prepar3D"]),
    ]
}

fn cargo_fleet() -> Vec<Aircraft> {
    vec![
        aircraft("B74F", "Boeing 747-400F", 490.0, 13000.0, 43000.0, &["MSFS2020", "X-Plane 12", "Prepar3D"]),
        aircraft("MD11", "McDonnell Douglas MD-11F", 470.0, 11000.0, 42000.0, &["X-Plane 12", "Prepar3D"]),
        aircraft("B763", "Boeing 767-300F", 470.0, 8500.0, 43000.0, &["MSFS2020", "X-Plane 12"]),
    ]
}

fn general_aviation_fleet() -> Vec<Aircraft> {
    vec![
        aircraft("C172", "Cessna 172 Skyhawk", 120.0, 30.0, 14000.0, &["MSFS2020", "X-Plane 12", "Prepar3D", "FSX"]),
        aircraft("C208", "Cessna 208 Caravan", 180.0, 200.0, 25000.0, &["MSFS2020", "X-Plane 12"]),
        aircraft("PC12", "Pilatus PC-12", 280.0, 300.0, 30000.0, &["MSFS2020", "X-Plane 12"]),
        aircraft("TBM9", "TBM 930", 330.0, 280.0, 31000.0, &["MSFS2020", "X-Plane 12"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_resolves_case_insensitively() {
        let catalog = AircraftCatalog::new();
        let b738 = catalog.find("b738").expect("B738 in catalog");
        assert_eq!(b738.name, "Boeing 737-800");
        assert_eq!(b738.cruise_speed_kt, 450.0);
        assert_eq!(b738.fuel_burn_lbs_hr, 5000.0);
    }

    #[test]
    fn find_rejects_unknown_type() {
        let catalog = AircraftCatalog::new();
        assert!(matches!(
            catalog.find("ZZZZ"),
            Err(DataError::UnknownAircraft(code)) if code == "ZZZZ"
        ));
    }

    #[test]
    fn fleet_has_positive_performance_numbers() {
        let catalog = AircraftCatalog::new();
        let mut seen = 0;
        for aircraft in catalog.all() {
            assert!(aircraft.cruise_speed_kt > 0.0, "{}", aircraft.icao_type);
            assert!(aircraft.fuel_burn_lbs_hr > 0.0, "{}", aircraft.icao_type);
            seen += 1;
        }
        assert!(seen >= 30);
    }

    #[test]
    fn groups_are_stable() {
        let catalog = AircraftCatalog::new();
        let names: Vec<_> = catalog.grouped().keys().copied().collect();
        assert_eq!(names, vec!["airbus", "boeing", "cargo", "general", "regional"]);
    }
}
