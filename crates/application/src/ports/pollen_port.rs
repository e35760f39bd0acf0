//! Pollen port

use async_trait::async_trait;
use domain::PollenSeries;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

/// Port for hourly pollen concentrations
///
/// Pollen is best-effort: implementations swallow every failure and report
/// `None`, so the dashboard can still be built from the forecast alone.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PollenPort: Send + Sync {
    /// Fetch the pollen series, or `None` when unavailable
    async fn get_pollen(&self, location: &GeoLocation) -> Option<PollenSeries>;
}
