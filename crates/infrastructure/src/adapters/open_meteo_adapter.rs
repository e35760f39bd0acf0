//! Open-Meteo adapter - Implements the data ports using integration_weather

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{ForecastPort, GeocodingPort, PollenPort};
use async_trait::async_trait;
use domain::value_objects::{GeoLocation, GeocodingResult};
use domain::{DomainError, ForecastResult, PollenSeries};
use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter exposing one Open-Meteo client through the geocoding, forecast
/// and pollen ports
pub struct OpenMeteoAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for OpenMeteoAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenMeteoAdapter")
            .field("client", &"WeatherClient")
            .finish()
    }
}

impl OpenMeteoAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::from_client(Arc::new(client)))
    }

    /// Wrap an existing client
    #[must_use]
    pub fn from_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::Network(e),
            WeatherError::ParseError(e) => ApplicationError::InvalidResponse(e),
            WeatherError::InvalidCoordinates => {
                ApplicationError::Domain(DomainError::ValidationError("Invalid coordinates".into()))
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }
}

#[async_trait]
impl GeocodingPort for OpenMeteoAdapter {
    #[instrument(skip(self))]
    async fn search_city(&self, name: &str) -> Result<Vec<GeocodingResult>, ApplicationError> {
        let result = self.client.search_city(name).await.map_err(Self::map_error);

        match &result {
            Ok(results) => debug!(count = results.len(), "Retrieved city candidates"),
            Err(e) => debug!(error = %e, "Failed to search city"),
        }

        result
    }
}

#[async_trait]
impl ForecastPort for OpenMeteoAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn get_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<ForecastResult, ApplicationError> {
        let result = self
            .client
            .get_forecast(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(forecast) => {
                debug!(
                    hours = forecast.hourly.len(),
                    days = forecast.daily.len(),
                    timezone = %forecast.timezone,
                    "Retrieved weather forecast"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather forecast");
            },
        }

        result
    }
}

#[async_trait]
impl PollenPort for OpenMeteoAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn get_pollen(&self, location: &GeoLocation) -> Option<PollenSeries> {
        self.client
            .get_pollen(location.latitude(), location.longitude())
            .await
    }
}
