//! Geolocation adapter backed by configuration
//!
//! A terminal has no platform position service, so the "current position"
//! is whatever the user configured. Without one the adapter reports the
//! position as unavailable and the dashboard uses its fallback location.

use application::error::ApplicationError;
use application::ports::GeolocationPort;
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use tracing::debug;

use crate::config::LocationConfig;

/// Reports a fixed, configured position
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredGeolocation {
    position: Option<GeoLocation>,
}

impl ConfiguredGeolocation {
    #[must_use]
    pub const fn new(position: Option<GeoLocation>) -> Self {
        Self { position }
    }

    /// Build from the `location` config section
    ///
    /// # Errors
    ///
    /// Returns an error if the configured coordinates are out of range.
    pub fn from_config(config: &LocationConfig) -> Result<Self, ApplicationError> {
        let position = config
            .position()
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(position))
    }
}

#[async_trait]
impl GeolocationPort for ConfiguredGeolocation {
    async fn current_position(&self) -> Result<GeoLocation, ApplicationError> {
        self.position.ok_or_else(|| {
            debug!("No position configured");
            ApplicationError::LocationUnavailable("no position configured".to_string())
        })
    }
}
