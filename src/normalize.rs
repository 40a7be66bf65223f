use crate::error::WeatherError;
use crate::models::{CurrentWeatherPayload, WeatherReport};
use crate::wind::WindDirection;

/// Divisor applied to the provider's visibility in meters.
const VISIBILITY_DIVISOR: f64 = 100.0;

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, WeatherError> {
    value.ok_or(WeatherError::MissingField(field))
}

/// Builds a [`WeatherReport`] from a `/weather` payload.
///
/// Fails on the first absent field; a partial report is never produced.
pub fn normalize_current(payload: CurrentWeatherPayload) -> Result<WeatherReport, WeatherError> {
    let sys = required(payload.sys, "sys")?;
    let main = required(payload.main, "main")?;
    let wind = required(payload.wind, "wind")?;
    let icon = payload
        .weather
        .into_iter()
        .next()
        .and_then(|condition| condition.main);

    Ok(WeatherReport {
        id: required(payload.id, "id")?,
        city: required(payload.name, "name")?,
        country: required(sys.country, "sys.country")?,
        temperature: required(main.temp, "main.temp")?,
        feels_like: required(main.feels_like, "main.feels_like")?,
        temp_min: required(main.temp_min, "main.temp_min")?,
        temp_max: required(main.temp_max, "main.temp_max")?,
        visibility: required(payload.visibility, "visibility")? / VISIBILITY_DIVISOR,
        humidity: required(main.humidity, "main.humidity")?,
        wind_speed: required(wind.speed, "wind.speed")?,
        wind_direction: WindDirection::from_degrees(required(wind.deg, "wind.deg")?),
        weather_icon: required(icon, "weather[0].main")?,
    })
}
