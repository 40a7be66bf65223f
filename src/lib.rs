//! JSON front end for OpenWeatherMap.
//!
//! Current conditions are normalized into a [`models::WeatherReport`];
//! forecasts pass through untouched. Both sit behind a TTL cache.

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod normalize;
pub mod provider;
pub mod server;
pub mod service;
pub mod wind;

pub use error::WeatherError;
pub use service::WeatherService;
