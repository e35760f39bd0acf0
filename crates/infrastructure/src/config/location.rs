//! Location settings

use domain::value_objects::{GeoLocation, InvalidCoordinates, Location};
use serde::{Deserialize, Serialize};

/// Fallback location and optional fixed device position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Name shown for the fallback location (default: "London")
    #[serde(default = "default_fallback_name")]
    pub fallback_name: String,

    /// Fallback latitude (default: 51.5072)
    #[serde(default = "default_fallback_latitude")]
    pub fallback_latitude: f64,

    /// Fallback longitude (default: -0.1276)
    #[serde(default = "default_fallback_longitude")]
    pub fallback_longitude: f64,

    /// Fixed device position; both coordinates must be set to take effect
    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,
}

fn default_fallback_name() -> String {
    Location::FALLBACK_NAME.to_string()
}

const fn default_fallback_latitude() -> f64 {
    GeoLocation::london().latitude()
}

const fn default_fallback_longitude() -> f64 {
    GeoLocation::london().longitude()
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            fallback_name: default_fallback_name(),
            fallback_latitude: default_fallback_latitude(),
            fallback_longitude: default_fallback_longitude(),
            latitude: None,
            longitude: None,
        }
    }
}

impl LocationConfig {
    /// Location used when no position is available
    ///
    /// # Errors
    ///
    /// Returns an error if the fallback coordinates are out of range.
    pub fn fallback(&self) -> Result<Location, InvalidCoordinates> {
        let coordinates = GeoLocation::new(self.fallback_latitude, self.fallback_longitude)?;
        Ok(Location::new(self.fallback_name.clone(), coordinates))
    }

    /// Configured device position, if both coordinates are present
    ///
    /// # Errors
    ///
    /// Returns an error if the configured coordinates are out of range.
    pub fn position(&self) -> Result<Option<GeoLocation>, InvalidCoordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => GeoLocation::new(latitude, longitude).map(Some),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_falls_back_to_london() {
        let config = LocationConfig::default();
        let fallback = config.fallback().expect("valid fallback");
        assert_eq!(fallback, Location::london());
        assert_eq!(config.position(), Ok(None));
    }

    #[test]
    fn position_requires_both_coordinates() {
        let config = LocationConfig {
            latitude: Some(52.52),
            ..Default::default()
        };
        assert_eq!(config.position(), Ok(None));

        let config = LocationConfig {
            latitude: Some(52.52),
            longitude: Some(13.405),
            ..Default::default()
        };
        let position = config.position().expect("valid position").expect("position set");
        assert!((position.latitude() - 52.52).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_position_is_rejected() {
        let config = LocationConfig {
            latitude: Some(95.0),
            longitude: Some(0.0),
            ..Default::default()
        };
        assert!(config.position().is_err());
    }

    #[test]
    fn partial_input_keeps_defaults() {
        let json = r#"{"fallback_name": "Berlin", "fallback_latitude": 52.52, "fallback_longitude": 13.405}"#;
        let config: LocationConfig = serde_json::from_str(json).expect("valid json");
        let fallback = config.fallback().expect("valid fallback");
        assert_eq!(fallback.name(), "Berlin");
        assert!(config.latitude.is_none());
    }
}
