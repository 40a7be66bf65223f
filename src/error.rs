use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced while answering a weather query.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("city query parameter is required")]
    MissingCity,

    #[error("city not found: {0}")]
    CityNotFound(String),

    #[error("provider payload is missing `{0}`")]
    MissingField(&'static str),

    #[error("failed to decode provider payload: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("provider returned status {0}")]
    UpstreamStatus(StatusCode),

    #[error("provider request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Coarse classification used to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent an incomplete request.
    Validation,
    /// The provider does not know the city, or its answer cannot be normalized.
    Lookup,
    /// The provider is unreachable or failing for reasons unrelated to the city.
    Upstream,
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCity => ErrorKind::Validation,
            Self::CityNotFound(_) | Self::MissingField(_) | Self::Decode(_) => ErrorKind::Lookup,
            Self::UpstreamStatus(_) | Self::Transport(_) => ErrorKind::Upstream,
        }
    }
}
