//! External data collaborators: airport directory, aircraft catalog,
//! and the aviation-weather passthrough client.
//!
//! The route engine in `skyplan-core` stays pure; everything that
//! fetches, caches, or degrades gracefully lives here.

pub mod aircraft;
pub mod airports;
pub mod weather;

pub use aircraft::AircraftCatalog;
pub use airports::{AirportDirectory, DirectoryConfig};
pub use weather::{WeatherClient, WeatherConfig};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("airport dataset fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("airport dataset decode failed: {0}")]
    Decode(#[from] csv::Error),
    #[error("airport not found: {0}")]
    UnknownAirport(String),
    #[error("aircraft type not found: {0}")]
    UnknownAircraft(String),
}
