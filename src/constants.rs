/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("weather-front/", env!("CARGO_PKG_VERSION"));

/// OpenWeatherMap API base URL
pub const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Seconds a cached provider response stays fresh
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_UNITS: &str = "metric";

pub const DEFAULT_LANG: &str = "es";

/// Three-hour forecast steps covering roughly the next 24 hours
pub const TODAY_FORECAST_STEPS: u32 = 8;

/// Public path the weather icon SVGs are served from
pub const ICON_ASSET_DIR: &str = "/svg";
