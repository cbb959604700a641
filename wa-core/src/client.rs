use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::fmt::Debug;
use tracing::{debug, info, warn};

use crate::{error::FetchError, model::CurrentWeather};

/// OpenWeatherMap "current weather" endpoint.
pub const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Something that can look up the current weather for a city.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_current(&self, city: &str, api_key: &str) -> Result<CurrentWeather, FetchError>;
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    endpoint: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new() -> Self {
        Self::with_endpoint(CURRENT_WEATHER_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for OpenWeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn fetch_current(&self, city: &str, api_key: &str) -> Result<CurrentWeather, FetchError> {
        info!(city, endpoint = %self.endpoint, "requesting current weather");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::CityNotFound);
        }

        let body = res.text().await.map_err(FetchError::Body)?;
        debug!(%status, bytes = body.len(), "received response");

        decode_current(status, &body)
    }
}

/// Map a raw HTTP response to the weather model.
///
/// 404 means the city is unknown. Anything else is decoded permissively: a
/// body that is not a JSON object yields an all-default value.
pub fn decode_current(status: StatusCode, body: &str) -> Result<CurrentWeather, FetchError> {
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::CityNotFound);
    }

    if !status.is_success() {
        warn!(%status, "provider returned a non-success status");
    }

    Ok(serde_json::from_str(body).unwrap_or_else(|err| {
        warn!(error = %err, "response body is not a weather object");
        CurrentWeather::default()
    }))
}
