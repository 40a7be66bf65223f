use serde_json::Value;
use tracing::instrument;

use crate::cache::{CacheKey, QueryKind, WeatherCache};
use crate::constants::TODAY_FORECAST_STEPS;
use crate::error::WeatherError;
use crate::models::WeatherReport;
use crate::normalize::normalize_current;
use crate::provider::OpenWeatherClient;

/// Answers weather queries from the cache, falling back to the provider
#[derive(Debug)]
pub struct WeatherService {
    client: OpenWeatherClient,
    cache: WeatherCache,
}

impl WeatherService {
    pub fn new(client: OpenWeatherClient, cache: WeatherCache) -> Self {
        Self { client, cache }
    }

    /// Current conditions for `city`, normalized into a [`WeatherReport`]
    #[instrument(skip(self))]
    pub async fn get_current_weather(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let key = CacheKey::new(QueryKind::Current, city);
        self.cache
            .reports
            .get_or_try_insert_with(key, || async {
                let payload = self.client.fetch_current(city).await?;
                normalize_current(payload)
            })
            .await
    }

    /// Raw forecast for roughly the next 24 hours
    #[instrument(skip(self))]
    pub async fn get_forecast_today(&self, city: &str) -> Result<Value, WeatherError> {
        let key = CacheKey::new(QueryKind::Today, city);
        self.cache
            .forecasts
            .get_or_try_insert_with(key, || {
                self.client.fetch_forecast(city, Some(TODAY_FORECAST_STEPS))
            })
            .await
    }

    /// Raw forecast over the provider's full window
    #[instrument(skip(self))]
    pub async fn get_forecast_week(&self, city: &str) -> Result<Value, WeatherError> {
        let key = CacheKey::new(QueryKind::Week, city);
        self.cache
            .forecasts
            .get_or_try_insert_with(key, || self.client.fetch_forecast(city, None))
            .await
    }
}
