//! Airport directory backed by the OurAirports dataset.
//!
//! The directory is an explicitly owned collaborator: callers construct
//! one, pass it around, and the engine never sees the cache behind it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Deserialize;
use skyplan_core::Airport;
use tokio::sync::RwLock;

use crate::DataError;

const DEFAULT_DATASET_URL: &str =
    "https://davidmegginson.github.io/ourairports-data/airports.csv";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub dataset_url: String,
    /// How long a fetched snapshot stays fresh.
    pub refresh_ttl: Duration,
    /// Skip the remote dataset entirely and serve the built-in table.
    pub offline: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            refresh_ttl: Duration::from_secs(3600),
            offline: false,
        }
    }
}

struct Snapshot {
    airports: Arc<Vec<Airport>>,
    fetched_at: Instant,
}

/// Resolves and searches airport records, caching the upstream dataset
/// for the configured TTL and falling back to a built-in table when the
/// fetch fails.
pub struct AirportDirectory {
    client: reqwest::Client,
    config: DirectoryConfig,
    cache: RwLock<Option<Snapshot>>,
}

/// Raw OurAirports CSV row; only the columns we keep.
#[derive(Debug, Deserialize)]
struct CsvAirport {
    ident: String,
    #[serde(rename = "type")]
    airport_type: String,
    name: String,
    latitude_deg: Option<f64>,
    longitude_deg: Option<f64>,
    elevation_ft: Option<f64>,
    iso_country: String,
    municipality: String,
    gps_code: String,
    iata_code: String,
}

impl AirportDirectory {
    pub fn new(config: DirectoryConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            config,
            cache: RwLock::new(None),
        }
    }

    /// Directory serving only the built-in table, no network.
    pub fn builtin() -> Self {
        Self::new(DirectoryConfig {
            offline: true,
            ..DirectoryConfig::default()
        })
    }

    /// Resolve an ICAO (or GPS) code to an airport record.
    pub async fn lookup(&self, code: &str) -> Result<Airport, DataError> {
        let code = code.trim().to_uppercase();
        let airports = self.snapshot().await;
        airports
            .iter()
            .find(|apt| apt.icao == code)
            .cloned()
            .ok_or(DataError::UnknownAirport(code))
    }

    /// Case-insensitive substring search over code, IATA, name, and city.
    ///
    /// Queries shorter than two characters return nothing, matching the
    /// search box behavior this backs.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<Airport> {
        let query = query.trim().to_uppercase();
        if query.len() < 2 {
            return Vec::new();
        }

        let airports = self.snapshot().await;
        airports
            .iter()
            .filter(|apt| {
                apt.icao.contains(&query)
                    || apt.iata.as_deref().is_some_and(|s| s.contains(&query))
                    || apt.name.to_uppercase().contains(&query)
                    || apt
                        .city
                        .as_deref()
                        .is_some_and(|s| s.to_uppercase().contains(&query))
            })
            .take(limit)
            .cloned()
            .collect()
    }

    /// Current airport set, refreshing the upstream snapshot when stale.
    async fn snapshot(&self) -> Arc<Vec<Airport>> {
        if let Some(snapshot) = self.fresh_snapshot().await {
            return snapshot;
        }

        let airports = if self.config.offline {
            Arc::new(builtin_airports())
        } else {
            match self.fetch_dataset().await {
                Ok(airports) => {
                    tracing::info!("loaded {} airports from dataset", airports.len());
                    Arc::new(airports)
                }
                Err(err) => {
                    tracing::warn!("airport dataset fetch failed, using built-in table: {err}");
                    Arc::new(builtin_airports())
                }
            }
        };

        let mut guard = self.cache.write().await;
        *guard = Some(Snapshot {
            airports: airports.clone(),
            fetched_at: Instant::now(),
        });
        airports
    }

    async fn fresh_snapshot(&self) -> Option<Arc<Vec<Airport>>> {
        let guard = self.cache.read().await;
        let snapshot = guard.as_ref()?;
        if snapshot.fetched_at.elapsed() < self.config.refresh_ttl {
            Some(snapshot.airports.clone())
        } else {
            None
        }
    }

    async fn fetch_dataset(&self) -> Result<Vec<Airport>, DataError> {
        let body = self
            .client
            .get(&self.config.dataset_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(body.as_bytes());

        let mut airports = Vec::new();
        for record in reader.deserialize::<CsvAirport>() {
            let Ok(row) = record else {
                // Upstream data has the odd malformed line; skip it.
                continue;
            };
            if let Some(airport) = convert_row(row) {
                airports.push(airport);
            }
        }
        Ok(airports)
    }
}

fn convert_row(row: CsvAirport) -> Option<Airport> {
    match row.airport_type.as_str() {
        "large_airport" | "medium_airport" | "small_airport" => {}
        _ => return None,
    }

    let icao = if !row.ident.is_empty() {
        row.ident
    } else {
        row.gps_code
    };
    if icao.len() < 3 {
        return None;
    }

    let (lat, lon) = (row.latitude_deg?, row.longitude_deg?);
    // The engine treats coordinates as pre-validated; enforce that here.
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return None;
    }

    Some(Airport {
        icao: icao.to_uppercase(),
        iata: (!row.iata_code.is_empty()).then(|| row.iata_code.to_uppercase()),
        name: row.name,
        city: (!row.municipality.is_empty()).then_some(row.municipality),
        country: (!row.iso_country.is_empty()).then_some(row.iso_country),
        lat,
        lon,
        elevation_ft: row.elevation_ft.unwrap_or(0.0) as i32,
    })
}

/// Fallback table served when the dataset is unreachable or offline mode
/// is on.
pub fn builtin_airports() -> Vec<Airport> {
    fn apt(
        icao: &str,
        iata: &str,
        name: &str,
        city: &str,
        country: &str,
        lat: f64,
        lon: f64,
        elevation_ft: i32,
    ) -> Airport {
        Airport {
            icao: icao.to_string(),
            iata: Some(iata.to_string()),
            name: name.to_string(),
            city: Some(city.to_string()),
            country: Some(country.to_string()),
            lat,
            lon,
            elevation_ft,
        }
    }

    vec![
        apt("KJFK", "JFK", "John F Kennedy Intl", "New York", "US", 40.6398, -73.7789, 13),
        apt("EGLL", "LHR", "London Heathrow", "London", "GB", 51.4706, -0.4619, 83),
        apt("LFPG", "CDG", "Paris Charles de Gaulle", "Paris", "FR", 49.0097, 2.5479, 392),
        apt("EDDF", "FRA", "Frankfurt am Main", "Frankfurt", "DE", 50.0333, 8.5706, 364),
        apt("LTFM", "IST", "Istanbul Airport", "Istanbul", "TR", 41.2619, 28.7414, 325),
        apt("LTBA", "ISL", "Istanbul Ataturk", "Istanbul", "TR", 40.9769, 28.8146, 163),
        apt("OMDB", "DXB", "Dubai Intl", "Dubai", "AE", 25.2528, 55.3644, 62),
        apt("KLAX", "LAX", "Los Angeles Intl", "Los Angeles", "US", 33.9425, -118.408, 125),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builtin_lookup_resolves_known_code() {
        let directory = AirportDirectory::builtin();
        let jfk = directory.lookup("kjfk").await.expect("JFK in builtin set");
        assert_eq!(jfk.icao, "KJFK");
        assert!((jfk.lat - 40.6398).abs() < 1e-6);
    }

    #[tokio::test]
    async fn builtin_lookup_rejects_unknown_code() {
        let directory = AirportDirectory::builtin();
        let err = directory.lookup("ZZZZ").await.unwrap_err();
        assert!(matches!(err, DataError::UnknownAirport(code) if code == "ZZZZ"));
    }

    #[tokio::test]
    async fn search_matches_city_and_code() {
        let directory = AirportDirectory::builtin();

        let by_city = directory.search("istanbul", 10).await;
        assert_eq!(by_city.len(), 2);

        let by_code = directory.search("EGLL", 10).await;
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].name, "London Heathrow");
    }

    #[tokio::test]
    async fn short_queries_return_nothing() {
        let directory = AirportDirectory::builtin();
        assert!(directory.search("K", 10).await.is_empty());
        assert!(directory.search("", 10).await.is_empty());
    }

    #[test]
    fn convert_row_filters_bad_coordinates() {
        let row = CsvAirport {
            ident: "XTST".to_string(),
            airport_type: "small_airport".to_string(),
            name: "Test Field".to_string(),
            latitude_deg: Some(95.0),
            longitude_deg: Some(10.0),
            elevation_ft: None,
            iso_country: "US".to_string(),
            municipality: String::new(),
            gps_code: String::new(),
            iata_code: String::new(),
        };
        assert!(convert_row(row).is_none());
    }

    #[test]
    fn convert_row_skips_heliports() {
        let row = CsvAirport {
            ident: "XHEL".to_string(),
            airport_type: "heliport".to_string(),
            name: "Test Heliport".to_string(),
            latitude_deg: Some(40.0),
            longitude_deg: Some(-70.0),
            elevation_ft: Some(20.0),
            iso_country: "US".to_string(),
            municipality: String::new(),
            gps_code: String::new(),
            iata_code: String::new(),
        };
        assert!(convert_row(row).is_none());
    }
}
