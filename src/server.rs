//! HTTP routes over [`WeatherService`].

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::Value;
use tower_http::trace::TraceLayer;

use crate::cache::WeatherCache;
use crate::config::Config;
use crate::error::{ErrorKind, WeatherError};
use crate::formatters::render_city_cards;
use crate::models::{CityCard, ErrorBody, RenderedCities, SearchQuery, WeatherReport};
use crate::provider::OpenWeatherClient;
use crate::service::WeatherService;

type AppState = Arc<WeatherService>;

/// A [`WeatherError`] on its way to becoming a JSON error response.
#[derive(Debug)]
pub struct ApiError(WeatherError);

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0.kind() {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, self.0.to_string()),
            ErrorKind::Lookup => (StatusCode::NOT_FOUND, "city not found".to_string()),
            ErrorKind::Upstream => (
                StatusCode::BAD_GATEWAY,
                "weather provider unavailable".to_string(),
            ),
        };
        tracing::warn!(status = %status, error = %self.0, "Request failed");

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Builds the application router
pub fn router(service: Arc<WeatherService>) -> Router {
    Router::new()
        .route("/api/weather/current/{city}", get(current_weather))
        .route("/api/weather/today/{city}", get(forecast_today))
        .route("/api/weather/week/{city}", get(forecast_week))
        .route("/api/weather/search", get(search))
        .route("/api/render-cities", post(render_cities))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn current_weather(
    State(service): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<WeatherReport>, ApiError> {
    Ok(Json(service.get_current_weather(&city).await?))
}

async fn forecast_today(
    State(service): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(service.get_forecast_today(&city).await?))
}

async fn forecast_week(
    State(service): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(service.get_forecast_week(&city).await?))
}

async fn search(
    State(service): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    let city = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .ok_or(WeatherError::MissingCity)?;

    tracing::info!("Searching weather for city: {}", city);
    Ok(Json(service.get_current_weather(city).await?))
}

/// Decodes each posted city on its own so one unreadable entry drops only itself.
fn parse_city_cards(body: &[u8]) -> Vec<CityCard> {
    let entries: Vec<Value> = match serde_json::from_slice(body) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!("Ignoring unreadable city list: {}", err);
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(card) => Some(card),
            Err(err) => {
                tracing::warn!("Skipping unreadable city card: {}", err);
                None
            }
        })
        .collect()
}

async fn render_cities(body: Bytes) -> Json<RenderedCities> {
    let cards = parse_city_cards(&body);

    Json(RenderedCities {
        html: render_city_cards(&cards),
    })
}

/// Binds `config.bind` and serves until Ctrl-C
pub async fn serve(config: Config) -> Result<()> {
    let client = OpenWeatherClient::new(&config)?;
    let cache = WeatherCache::with_system_clock(config.cache_ttl());
    let service = Arc::new(WeatherService::new(client, cache));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
