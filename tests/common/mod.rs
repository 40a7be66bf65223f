#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use weather_front::{
    cache::{Clock, ManualClock, WeatherCache},
    config::Config,
    provider::OpenWeatherClient,
    WeatherService,
};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const TTL: Duration = Duration::from_secs(600);

pub fn test_config(base_url: &str) -> Config {
    Config {
        bind: "127.0.0.1:0".parse().unwrap(),
        api_key: "test-key".to_string(),
        base_url: base_url.to_string(),
        units: "metric".to_string(),
        lang: "es".to_string(),
        cache_ttl_secs: TTL.as_secs(),
        request_timeout_secs: 5,
    }
}

pub fn service_from_config(config: &Config, clock: Arc<dyn Clock>) -> WeatherService {
    let client = OpenWeatherClient::new(config).unwrap();
    WeatherService::new(client, WeatherCache::new(config.cache_ttl(), clock))
}

pub fn service_with_clock(server: &MockServer, clock: Arc<dyn Clock>) -> WeatherService {
    service_from_config(&test_config(&server.uri()), clock)
}

/// A service whose provider requests give up after one second.
pub fn impatient_service(server: &MockServer) -> WeatherService {
    let config = Config {
        request_timeout_secs: 1,
        ..test_config(&server.uri())
    };
    service_from_config(&config, Arc::new(ManualClock::new()))
}

pub async fn mount_slow_response(server: &MockServer, delay: Duration) {
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(paris_payload())
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub fn service(server: &MockServer) -> WeatherService {
    service_with_clock(server, Arc::new(ManualClock::new()))
}

pub fn paris_payload() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 2.3488, "lat": 48.8534 },
        "weather": [{ "id": 800, "main": "Clear", "description": "cielo claro", "icon": "01d" }],
        "main": {
            "temp": 18.2,
            "feels_like": 17.6,
            "temp_min": 16.9,
            "temp_max": 19.4,
            "pressure": 1019,
            "humidity": 60
        },
        "visibility": 10000,
        "wind": { "speed": 3.1, "deg": 250 },
        "sys": { "country": "FR" },
        "id": 2988507,
        "name": "Paris",
        "cod": 200
    })
}

pub fn forecast_payload(steps: usize) -> serde_json::Value {
    let list: Vec<serde_json::Value> = (0..steps)
        .map(|i| {
            serde_json::json!({
                "dt": 1_700_000_000 + i * 10_800,
                "main": { "temp": 15.0 + i as f64 },
                "weather": [{ "main": "Clouds" }]
            })
        })
        .collect();

    serde_json::json!({
        "cod": "200",
        "cnt": steps,
        "list": list,
        "city": { "name": "Paris", "country": "FR" }
    })
}

pub async fn mount_current(server: &MockServer, city: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", city))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "es"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_not_found(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "cod": "404", "message": "city not found" })),
        )
        .mount(server)
        .await;
}

pub async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap().len()
}
