//! Exporters that turn a [`RouteResult`] into simulator route files and
//! briefing documents.
//!
//! Each format is plain string templating over the computed route; none
//! of them feed anything back into the engine.

pub mod briefing;
pub mod fms;
pub mod pln;
pub mod rte;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use skyplan_core::RouteResult;

pub use briefing::BriefingWeather;

/// Supported export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// PMDG `.rte`.
    Pmdg,
    /// MSFS / FSX / Prepar3D AceXML `.pln`.
    Msfs,
    /// X-Plane `.fms`.
    XPlane,
    /// Plaintext operational flight plan.
    Briefing,
    /// Verbatim JSON serialization of the route result.
    Json,
}

impl ExportFormat {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pmdg" | "rte" => Some(Self::Pmdg),
            "msfs" | "fsx" | "pln" => Some(Self::Msfs),
            "xplane" | "fms" => Some(Self::XPlane),
            "briefing" | "ofp" | "txt" => Some(Self::Briefing),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pmdg => "rte",
            Self::Msfs => "pln",
            Self::XPlane => "fms",
            Self::Briefing => "txt",
            Self::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Pmdg | Self::XPlane => "text/plain",
            Self::Msfs => "application/xml",
            Self::Briefing => "text/plain",
            Self::Json => "application/json",
        }
    }
}

/// Render the route in the requested format.
pub fn render(
    format: ExportFormat,
    route: &RouteResult,
    weather: Option<&BriefingWeather>,
) -> String {
    match format {
        ExportFormat::Pmdg => rte::render(route),
        ExportFormat::Msfs => pln::render(route),
        ExportFormat::XPlane => fms::render(route),
        ExportFormat::Briefing => briefing::render(route, weather),
        ExportFormat::Json => {
            // RouteResult contains no non-serializable values.
            serde_json::to_string_pretty(route).expect("route result serializes")
        }
    }
}

/// Conventional download filename, e.g. `KJFKEGLL.rte`.
pub fn suggested_filename(format: ExportFormat, route: &RouteResult) -> String {
    format!(
        "{}{}.{}",
        route.departure.icao,
        route.arrival.icao,
        format.extension()
    )
}

/// Create a writer for the target path; `-` selects stdout.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Format hours as `h:mm` for display.
pub(crate) fn format_ete(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use skyplan_core::{compute_route, Aircraft, Airport, PlannerConfig, RouteResult};

    pub fn jfk() -> Airport {
        Airport {
            icao: "KJFK".to_string(),
            iata: Some("JFK".to_string()),
            name: "John F Kennedy Intl".to_string(),
            city: Some("New York".to_string()),
            country: Some("US".to_string()),
            lat: 40.6398,
            lon: -73.7789,
            elevation_ft: 13,
        }
    }

    pub fn lhr() -> Airport {
        Airport {
            icao: "EGLL".to_string(),
            iata: Some("LHR".to_string()),
            name: "London Heathrow".to_string(),
            city: Some("London".to_string()),
            country: Some("GB".to_string()),
            lat: 51.4706,
            lon: -0.4619,
            elevation_ft: 83,
        }
    }

    pub fn b738() -> Aircraft {
        Aircraft {
            icao_type: "B738".to_string(),
            name: "Boeing 737-800".to_string(),
            cruise_speed_kt: 450.0,
            fuel_burn_lbs_hr: 5000.0,
            max_altitude_ft: 41000.0,
            simulators: vec!["MSFS2020".to_string(), "PMDG".to_string()],
        }
    }

    pub fn transatlantic() -> RouteResult {
        compute_route(&jfk(), &lhr(), &b738(), 35000.0, None, &PlannerConfig::default())
    }
}
