use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::WeatherError;
use crate::models::CurrentWeatherPayload;

/// HTTP client for the OpenWeatherMap `/weather` and `/forecast` endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    units: String,
    lang: String,
}

impl OpenWeatherClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            units: config.units.clone(),
            lang: config.lang.clone(),
        })
    }

    /// Fetches current conditions for `city`.
    pub async fn fetch_current(&self, city: &str) -> Result<CurrentWeatherPayload, WeatherError> {
        self.make_request("weather", city, None).await
    }

    /// Fetches the three-hourly forecast for `city`, optionally limited to
    /// `count` steps.
    pub async fn fetch_forecast(
        &self,
        city: &str,
        count: Option<u32>,
    ) -> Result<Value, WeatherError> {
        self.make_request("forecast", city, count).await
    }

    /// Makes a GET request against `endpoint` and deserializes the JSON body
    async fn make_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
        count: Option<u32>,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut query = vec![
            ("q", city.to_string()),
            ("appid", self.api_key.clone()),
            ("units", self.units.clone()),
            ("lang", self.lang.clone()),
        ];
        if let Some(count) = count {
            query.push(("cnt", count.to_string()));
        }

        tracing::info!(endpoint, city, "Requesting provider");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(WeatherError::Transport)?;

        let status = response.status();
        // The provider answers 404 for unknown cities and 400 for queries it cannot geocode.
        if status == StatusCode::NOT_FOUND || status == StatusCode::BAD_REQUEST {
            return Err(WeatherError::CityNotFound(city.to_string()));
        }
        if !status.is_success() {
            return Err(WeatherError::UpstreamStatus(status));
        }

        response.json::<T>().await.map_err(WeatherError::Decode)
    }
}
