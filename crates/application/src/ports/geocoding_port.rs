//! City search port

use async_trait::async_trait;
use domain::value_objects::GeocodingResult;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for resolving a free-text city name to candidate locations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Search for cities matching `name`
    ///
    /// An empty result is not an error; callers decide how to report it.
    async fn search_city(&self, name: &str) -> Result<Vec<GeocodingResult>, ApplicationError>;
}
