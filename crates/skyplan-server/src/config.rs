//! Server configuration from environment.

use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub airports_url: String,
    pub airports_ttl: Duration,
    pub weather_url: String,
    /// Serve only the built-in airport table; no upstream fetches.
    pub offline: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SKYPLAN_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            airports_url: env::var("SKYPLAN_AIRPORTS_URL").unwrap_or_else(|_| {
                "https://davidmegginson.github.io/ourairports-data/airports.csv".to_string()
            }),
            airports_ttl: Duration::from_secs(
                env::var("SKYPLAN_AIRPORTS_TTL_S")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(3600),
            ),
            weather_url: env::var("SKYPLAN_WEATHER_URL")
                .unwrap_or_else(|_| "https://aviationweather.gov/api/data".to_string()),
            offline: env::var("SKYPLAN_OFFLINE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
        }
    }
}
