//! Open-Meteo client
//!
//! HTTP client for the Open-Meteo geocoding, forecast and air-quality APIs.

use async_trait::async_trait;
use domain::{ForecastResult, GeocodingResult, PollenSeries, PollenSpecies};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{AirQualityResponse, ForecastResponse, GeocodingResponse};

/// Fields requested for the current block
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,is_day,\
                              weather_code,pressure_msl,wind_speed_10m";

/// Fields requested for the hourly block
const HOURLY_FIELDS: &str = "temperature_2m,weather_code";

/// Fields requested for the daily block
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Open-Meteo client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Forecast API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Geocoding API base URL (default: <https://geocoding-api.open-meteo.com/v1>)
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Air-quality API base URL (default: <https://air-quality-api.open-meteo.com/v1>)
    #[serde(default = "default_air_quality_base_url")]
    pub air_quality_base_url: String,

    /// Maximum number of city search candidates (default: 5)
    #[serde(default = "default_search_limit")]
    pub search_limit: u8,

    /// Language of place names (default: "en")
    #[serde(default = "default_language")]
    pub language: String,

    /// Request timeout in seconds; unset keeps the transport default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_air_quality_base_url() -> String {
    "https://air-quality-api.open-meteo.com/v1".to_string()
}

const fn default_search_limit() -> u8 {
    5
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: default_forecast_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
            air_quality_base_url: default_air_quality_base_url(),
            search_limit: default_search_limit(),
            language: default_language(),
            timeout_secs: None,
        }
    }
}

impl WeatherConfig {
    /// Point every endpoint at one base URL (e.g. a mock server)
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            forecast_base_url: base_url.to_string(),
            geocoding_base_url: base_url.to_string(),
            air_quality_base_url: base_url.to_string(),
            timeout_secs: Some(5),
            ..Default::default()
        }
    }
}

/// Client for the three Open-Meteo endpoints used by the dashboard
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Search cities by name; an empty list means nothing matched
    async fn search_city(&self, name: &str) -> Result<Vec<GeocodingResult>, WeatherError>;

    /// Get current, hourly and daily forecast for a position
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResult, WeatherError>;

    /// Get hourly pollen for a position
    ///
    /// Never fails: every failure is logged and reported as `None`.
    async fn get_pollen(&self, latitude: f64, longitude: f64) -> Option<PollenSeries>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let mut builder =
            Client::builder().user_agent(concat!("skypanel/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    fn search_params(&self, name: &str) -> Vec<(&'static str, String)> {
        vec![
            ("name", name.to_string()),
            ("count", self.config.search_limit.to_string()),
            ("language", self.config.language.clone()),
            ("format", "json".to_string()),
        ]
    }

    fn forecast_params(latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ]
    }

    fn pollen_params(latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
        let fields = PollenSpecies::ALL
            .iter()
            .map(|species| species.api_field())
            .collect::<Vec<_>>()
            .join(",");
        vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("hourly", fields),
            ("timezone", "auto".to_string()),
        ]
    }

    /// Send a GET request and decode the JSON body
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn search_city(&self, name: &str) -> Result<Vec<GeocodingResult>, WeatherError> {
        let name = name.trim();
        if name.is_empty() {
            debug!("Empty search query, skipping request");
            return Ok(Vec::new());
        }

        let url = format!("{}/search", self.config.geocoding_base_url);
        debug!(url = %url, "Searching city");

        let response: GeocodingResponse = self.fetch_json(&url, &self.search_params(name)).await?;

        debug!(count = response.results.len(), "City search completed");
        Ok(response.results)
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResult, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = format!("{}/forecast", self.config.forecast_base_url);
        debug!(url = %url, "Fetching weather forecast");

        let response: ForecastResponse = self
            .fetch_json(&url, &Self::forecast_params(latitude, longitude))
            .await?;

        let forecast = response.into_forecast()?;
        debug!(
            timezone = %forecast.timezone,
            hours = forecast.hourly.len(),
            days = forecast.daily.len(),
            "Forecast received"
        );
        Ok(forecast)
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_pollen(&self, latitude: f64, longitude: f64) -> Option<PollenSeries> {
        if let Err(e) = Self::validate_coordinates(latitude, longitude) {
            warn!(error = %e, "Skipping pollen request");
            return None;
        }

        let url = format!("{}/air-quality", self.config.air_quality_base_url);
        debug!(url = %url, "Fetching pollen data");

        let response: AirQualityResponse = match self
            .fetch_json(&url, &Self::pollen_params(latitude, longitude))
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Pollen data unavailable");
                return None;
            },
        };

        match response.into_pollen_series() {
            Ok(Some(series)) => {
                debug!(hours = series.len(), "Pollen data received");
                Some(series)
            },
            Ok(None) => {
                warn!("Pollen response has no hourly time axis");
                None
            },
            Err(e) => {
                warn!(error = %e, "Discarding malformed pollen data");
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.forecast_base_url, "https://api.open-meteo.com/v1");
        assert_eq!(
            config.geocoding_base_url,
            "https://geocoding-api.open-meteo.com/v1"
        );
        assert_eq!(
            config.air_quality_base_url,
            "https://air-quality-api.open-meteo.com/v1"
        );
        assert_eq!(config.search_limit, 5);
        assert_eq!(config.language, "en");
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_config_for_testing() {
        let config = WeatherConfig::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.forecast_base_url, "http://127.0.0.1:9999");
        assert_eq!(config.geocoding_base_url, "http://127.0.0.1:9999");
        assert_eq!(config.air_quality_base_url, "http://127.0.0.1:9999");
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn test_validate_coordinates_valid() {
        assert!(OpenMeteoClient::validate_coordinates(0.0, 0.0).is_ok());
        assert!(OpenMeteoClient::validate_coordinates(90.0, 180.0).is_ok());
        assert!(OpenMeteoClient::validate_coordinates(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_validate_coordinates_invalid() {
        assert!(OpenMeteoClient::validate_coordinates(90.1, 0.0).is_err());
        assert!(OpenMeteoClient::validate_coordinates(0.0, -180.1).is_err());
        assert!(OpenMeteoClient::validate_coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_forecast_params() {
        let params = OpenMeteoClient::forecast_params(48.85, 2.35);
        assert_eq!(param(&params, "latitude"), Some("48.85"));
        assert_eq!(param(&params, "longitude"), Some("2.35"));
        assert_eq!(param(&params, "timezone"), Some("auto"));
        assert_eq!(
            param(&params, "current"),
            Some(
                "temperature_2m,relative_humidity_2m,apparent_temperature,is_day,weather_code,\
                 pressure_msl,wind_speed_10m"
            )
        );
        assert_eq!(param(&params, "hourly"), Some("temperature_2m,weather_code"));
        assert_eq!(
            param(&params, "daily"),
            Some("weather_code,temperature_2m_max,temperature_2m_min")
        );
    }

    #[test]
    fn test_pollen_params() {
        let params = OpenMeteoClient::pollen_params(48.85, 2.35);
        assert_eq!(
            param(&params, "hourly"),
            Some("alder_pollen,birch_pollen,grass_pollen,mugwort_pollen,olive_pollen,ragweed_pollen")
        );
        assert_eq!(param(&params, "timezone"), Some("auto"));
    }

    #[test]
    fn test_search_params() {
        let client = OpenMeteoClient::with_defaults().expect("client creation should succeed");
        let params = client.search_params("São Paulo");
        assert_eq!(param(&params, "name"), Some("São Paulo"));
        assert_eq!(param(&params, "count"), Some("5"));
        assert_eq!(param(&params, "language"), Some("en"));
        assert_eq!(param(&params, "format"), Some("json"));
    }

    #[test]
    fn test_weather_error_display() {
        let err = WeatherError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("longitude"));

        let err = WeatherError::RateLimitExceeded;
        assert!(err.to_string().contains("Rate limit"));
    }

    #[test]
    fn test_client_creation() {
        let client = OpenMeteoClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = WeatherConfig {
            forecast_base_url: "https://custom.api.com".to_string(),
            timeout_secs: Some(60),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).expect("should serialize");
        let deserialized: WeatherConfig = serde_json::from_str(&json).expect("should deserialize");

        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_config_partial_deserialization() {
        let config: WeatherConfig =
            serde_json::from_str(r#"{"search_limit": 3}"#).expect("should deserialize");
        assert_eq!(config.search_limit, 3);
        assert_eq!(config.forecast_base_url, "https://api.open-meteo.com/v1");
    }
}
