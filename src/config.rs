use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use crate::constants::{
    DEFAULT_CACHE_TTL_SECS, DEFAULT_LANG, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_UNITS,
    OPENWEATHER_API_BASE,
};

/// Runtime configuration, read from flags with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "weather-front",
    version,
    about = "JSON front end for OpenWeatherMap current weather and forecasts"
)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "WEATHER_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Provider base URL, without a trailing endpoint
    #[arg(long, env = "OPENWEATHER_BASE_URL", default_value = OPENWEATHER_API_BASE)]
    pub base_url: String,

    /// Unit system requested from the provider
    #[arg(long, env = "WEATHER_UNITS", default_value = DEFAULT_UNITS)]
    pub units: String,

    /// Language tag for provider condition descriptions
    #[arg(long, env = "WEATHER_LANG", default_value = DEFAULT_LANG)]
    pub lang: String,

    /// Seconds before a cached response is refetched
    #[arg(long, env = "WEATHER_CACHE_TTL", default_value_t = DEFAULT_CACHE_TTL_SECS)]
    pub cache_ttl_secs: u64,

    /// Seconds before an outbound provider request is abandoned
    #[arg(long, env = "WEATHER_REQUEST_TIMEOUT", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
