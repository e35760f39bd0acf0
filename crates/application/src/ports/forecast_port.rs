//! Forecast port

use async_trait::async_trait;
use domain::ForecastResult;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for current, hourly and daily forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the forecast for a coordinate pair
    ///
    /// Failures abort the dashboard load for this location.
    async fn get_forecast(&self, location: &GeoLocation) -> Result<ForecastResult, ApplicationError>;
}
