//! Application configuration
//!
//! Layered with the `config` crate:
//! - built-in defaults
//! - optional `config.toml` in the working directory, or an explicit file
//! - environment variables such as `SKYPANEL_WEATHER__TIMEOUT_SECS=10`
//!
//! Sections:
//! - `weather`: Open-Meteo endpoints, search limit and timeout
//! - `location`: fallback location and optional fixed position
//! - `telemetry`: log filter and format

mod location;

use std::path::Path;

use integration_weather::WeatherConfig;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::telemetry::TelemetryConfig;

pub use location::LocationConfig;

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "SKYPANEL";

/// Separator between nested keys in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Default configuration file name, looked up without extension
pub const DEFAULT_CONFIG_FILE: &str = "config";

/// Configuration value rejected during validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    /// URL could not be parsed or uses an unsupported scheme
    #[error("{field} is not a valid http(s) URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    /// Coordinates out of range
    #[error("{field} has invalid coordinates")]
    InvalidCoordinates { field: &'static str },

    /// Numeric setting out of range
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Open-Meteo client configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Fallback and fixed position
    #[serde(default)]
    pub location: LocationConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file
    ///
    /// An explicit path must exist; the default file is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or deserialized.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., SKYPANEL_LOCATION__LATITUDE)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        debug!(
            forecast = %config.weather.forecast_base_url,
            log_format = %config.telemetry.format,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check values serde cannot validate on its own
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        validate_url("weather.forecast_base_url", &self.weather.forecast_base_url)?;
        validate_url("weather.geocoding_base_url", &self.weather.geocoding_base_url)?;
        validate_url("weather.air_quality_base_url", &self.weather.air_quality_base_url)?;

        if self.weather.search_limit == 0 {
            return Err(ConfigValidationError::NotPositive {
                field: "weather.search_limit",
            });
        }
        if self.weather.timeout_secs == Some(0) {
            return Err(ConfigValidationError::NotPositive {
                field: "weather.timeout_secs",
            });
        }

        self.location
            .fallback()
            .map_err(|_| ConfigValidationError::InvalidCoordinates {
                field: "location.fallback",
            })?;
        self.location
            .position()
            .map_err(|_| ConfigValidationError::InvalidCoordinates {
                field: "location.latitude/longitude",
            })?;

        Ok(())
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ConfigValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}
