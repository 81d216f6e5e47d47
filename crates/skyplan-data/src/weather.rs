//! METAR/TAF passthrough against the aviationweather.gov data API.
//!
//! The reports are consumed verbatim downstream; this client only
//! fetches, caches briefly, and degrades gracefully when the upstream
//! is unreachable.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde_json::{json, Value};

const DEFAULT_WEATHER_URL: &str = "https://aviationweather.gov/api/data";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_CACHED_REPORTS: usize = 256;

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub base_url: String,
    pub cache_ttl: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WEATHER_URL.to_string(),
            cache_ttl: Duration::from_secs(300),
        }
    }
}

struct CachedReport {
    body: Value,
    fetched_at: Instant,
}

pub struct WeatherClient {
    client: reqwest::Client,
    config: WeatherConfig,
    cache: DashMap<String, CachedReport>,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            config,
            cache: DashMap::new(),
        }
    }

    /// Latest METAR for the station. Unreachable upstream yields a
    /// placeholder observation instead of an error.
    pub async fn metar(&self, icao: &str) -> Value {
        let icao = icao.trim().to_uppercase();
        match self.fetch("metar", &icao).await {
            Some(body) => body,
            None => json!([{ "rawOb": format!("No METAR available for {icao}") }]),
        }
    }

    /// TAF for the station; empty array when unavailable.
    pub async fn taf(&self, icao: &str) -> Value {
        let icao = icao.trim().to_uppercase();
        self.fetch("taf", &icao).await.unwrap_or_else(|| json!([]))
    }

    async fn fetch(&self, product: &str, icao: &str) -> Option<Value> {
        let key = format!("{product}:{icao}");
        if let Some(entry) = self.cache.get(&key) {
            if entry.fetched_at.elapsed() < self.config.cache_ttl {
                return Some(entry.body.clone());
            }
        }

        let url = format!(
            "{}/{}?ids={}&format=json",
            self.config.base_url, product, icao
        );
        let body = match self.client.get(&url).send().await {
            Ok(response) => match response.error_for_status() {
                Ok(response) => response.json::<Value>().await.ok()?,
                Err(err) => {
                    tracing::warn!("weather upstream rejected {product} {icao}: {err}");
                    return None;
                }
            },
            Err(err) => {
                tracing::warn!("weather fetch failed for {product} {icao}: {err}");
                return None;
            }
        };

        self.prune();
        self.cache.insert(
            key,
            CachedReport {
                body: body.clone(),
                fetched_at: Instant::now(),
            },
        );
        Some(body)
    }

    /// Drop expired reports and cap the cache size, oldest first.
    fn prune(&self) {
        let now = Instant::now();
        let mut entries: Vec<(String, Instant)> = self
            .cache
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().fetched_at))
            .collect();

        for (key, fetched_at) in &entries {
            if now.duration_since(*fetched_at) > self.config.cache_ttl {
                self.cache.remove(key);
            }
        }

        if self.cache.len() < MAX_CACHED_REPORTS {
            return;
        }
        entries.sort_by_key(|(_, fetched_at)| *fetched_at);
        for (key, _) in entries {
            if self.cache.len() < MAX_CACHED_REPORTS {
                break;
            }
            self.cache.remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_client(cache_ttl: Duration) -> WeatherClient {
        WeatherClient::new(WeatherConfig {
            // Reserved TEST-NET-1 address; connections fail fast.
            base_url: "http://192.0.2.1:1".to_string(),
            cache_ttl,
        })
    }

    #[tokio::test]
    async fn metar_degrades_to_placeholder() {
        let client = unreachable_client(Duration::from_secs(60));
        let body = client.metar("kjfk").await;
        let raw = body[0]["rawOb"].as_str().expect("placeholder observation");
        assert_eq!(raw, "No METAR available for KJFK");
    }

    #[tokio::test]
    async fn taf_degrades_to_empty_array() {
        let client = unreachable_client(Duration::from_secs(60));
        let body = client.taf("EGLL").await;
        assert_eq!(body, json!([]));
    }
}
