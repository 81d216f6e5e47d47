//! Shared application state: the engine policy plus the externally owned
//! data collaborators.

use skyplan_core::PlannerConfig;
use skyplan_data::{AircraftCatalog, AirportDirectory, DirectoryConfig, WeatherClient, WeatherConfig};

use crate::config::Config;

pub struct AppState {
    directory: AirportDirectory,
    catalog: AircraftCatalog,
    weather: WeatherClient,
    planner: PlannerConfig,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            directory: AirportDirectory::new(DirectoryConfig {
                dataset_url: config.airports_url.clone(),
                refresh_ttl: config.airports_ttl,
                offline: config.offline,
            }),
            catalog: AircraftCatalog::new(),
            weather: WeatherClient::new(WeatherConfig {
                base_url: config.weather_url.clone(),
                ..WeatherConfig::default()
            }),
            planner: PlannerConfig::default(),
        }
    }

    pub fn directory(&self) -> &AirportDirectory {
        &self.directory
    }

    pub fn catalog(&self) -> &AircraftCatalog {
        &self.catalog
    }

    pub fn weather(&self) -> &WeatherClient {
        &self.weather
    }

    pub fn planner(&self) -> &PlannerConfig {
        &self.planner
    }
}
