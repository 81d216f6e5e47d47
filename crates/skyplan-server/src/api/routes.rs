//! REST API routes.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::state::AppState;
use skyplan_core::{compute_route, Airport, RouteResult};
use skyplan_data::DataError;
use skyplan_export::{BriefingWeather, ExportFormat};

const SEARCH_LIMIT: usize = 50;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/airports/search", get(search_airports))
        .route("/v1/airports/:icao", get(get_airport))
        .route("/v1/aircraft", get(list_aircraft))
        .route("/v1/weather/metar/:icao", get(get_metar))
        .route("/v1/weather/taf/:icao", get(get_taf))
        .route("/v1/route/calculate", post(calculate_route))
        .route("/v1/export/:format", post(export_route))
}

// === Request/Response types ===

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct RouteCalcRequest {
    pub departure: String,
    pub arrival: String,
    pub aircraft_type: String,
    pub cruise_altitude_ft: f64,
    #[serde(default)]
    pub cruise_speed_kt: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub route: RouteResult,
    #[serde(default)]
    pub departure_metar: Option<String>,
    #[serde(default)]
    pub arrival_metar: Option<String>,
}

// === Handlers ===

async fn search_airports(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Airport>> {
    Json(state.directory().search(&query.q, SEARCH_LIMIT).await)
}

async fn get_airport(
    State(state): State<Arc<AppState>>,
    Path(icao): Path<String>,
) -> Result<Json<Airport>, (StatusCode, Json<serde_json::Value>)> {
    state
        .directory()
        .lookup(&icao)
        .await
        .map(Json)
        .map_err(|err| {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": err.to_string() })),
            )
        })
}

async fn list_aircraft(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let groups: serde_json::Map<String, serde_json::Value> = state
        .catalog()
        .grouped()
        .iter()
        .map(|(category, fleet)| {
            (
                category.to_string(),
                serde_json::to_value(fleet).unwrap_or_default(),
            )
        })
        .collect();
    Json(serde_json::Value::Object(groups))
}

async fn get_metar(
    State(state): State<Arc<AppState>>,
    Path(icao): Path<String>,
) -> Json<serde_json::Value> {
    Json(state.weather().metar(&icao).await)
}

async fn get_taf(
    State(state): State<Arc<AppState>>,
    Path(icao): Path<String>,
) -> Json<serde_json::Value> {
    Json(state.weather().taf(&icao).await)
}

async fn calculate_route(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RouteCalcRequest>,
) -> Result<Json<RouteResult>, (StatusCode, Json<serde_json::Value>)> {
    if !req.cruise_altitude_ft.is_finite() || req.cruise_altitude_ft <= 0.0 {
        return Err(bad_request(
            "Cruise altitude must be a positive number",
            Some("cruise_altitude_ft"),
        ));
    }

    let departure = state
        .directory()
        .lookup(&req.departure)
        .await
        .map_err(|err| resolve_error(err, "departure"))?;
    let arrival = state
        .directory()
        .lookup(&req.arrival)
        .await
        .map_err(|err| resolve_error(err, "arrival"))?;
    let aircraft = state
        .catalog()
        .find(&req.aircraft_type)
        .map_err(|err| resolve_error(err, "aircraft_type"))?;

    // Requested altitudes above the airframe ceiling get capped, not
    // rejected.
    let cruise_altitude_ft = req.cruise_altitude_ft.min(aircraft.max_altitude_ft);

    let route = compute_route(
        &departure,
        &arrival,
        &aircraft,
        cruise_altitude_ft,
        req.cruise_speed_kt,
        state.planner(),
    );

    tracing::info!(
        "planned {} -> {} ({} NM, {} waypoints)",
        route.departure.icao,
        route.arrival.icao,
        route.distance_nm.round() as i64,
        route.waypoints.len()
    );

    Ok(Json(route))
}

async fn export_route(
    State(state): State<Arc<AppState>>,
    Path(format): Path<String>,
    Json(req): Json<ExportRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    let Some(format) = ExportFormat::parse(&format) else {
        return Err(bad_request("Unknown export format", Some("format")));
    };

    let weather = match format {
        ExportFormat::Briefing => Some(fetch_briefing_weather(&state, &req).await),
        _ => None,
    };

    let body = skyplan_export::render(format, &req.route, weather.as_ref());
    let filename = skyplan_export::suggested_filename(format, &req.route);

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

/// Briefing weather: caller-supplied METARs win, otherwise fetch the
/// latest observations for both ends.
async fn fetch_briefing_weather(state: &AppState, req: &ExportRequest) -> BriefingWeather {
    let mut weather = BriefingWeather {
        departure_metar: req.departure_metar.clone(),
        arrival_metar: req.arrival_metar.clone(),
    };
    if weather.departure_metar.is_none() {
        weather.departure_metar = raw_observation(state, &req.route.departure.icao).await;
    }
    if weather.arrival_metar.is_none() {
        weather.arrival_metar = raw_observation(state, &req.route.arrival.icao).await;
    }
    weather
}

async fn raw_observation(state: &AppState, icao: &str) -> Option<String> {
    let body = state.weather().metar(icao).await;
    body.get(0)?
        .get("rawOb")
        .and_then(|raw| raw.as_str())
        .map(str::to_string)
}

fn bad_request(message: &str, field: Option<&str>) -> (StatusCode, Json<serde_json::Value>) {
    let mut payload = json!({ "error": message });
    if let Some(field) = field {
        payload["field"] = serde_json::Value::String(field.to_string());
    }
    (StatusCode::BAD_REQUEST, Json(payload))
}

fn resolve_error(err: DataError, field: &str) -> (StatusCode, Json<serde_json::Value>) {
    match err {
        DataError::UnknownAirport(_) | DataError::UnknownAircraft(_) => {
            bad_request(&err.to_string(), Some(field))
        }
        other => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": other.to_string() })),
        ),
    }
}
