//! Named locations and geocoding candidates

use serde::{Deserialize, Serialize};
use std::fmt;

use super::geo_location::{GeoLocation, InvalidCoordinates};

/// A place the dashboard can show weather for
///
/// Locations carry no identity beyond their value: two locations with the
/// same name and coordinates are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    coordinates: GeoLocation,
}

impl Location {
    /// Name given to positions reported by the platform
    pub const CURRENT_POSITION_NAME: &'static str = "Current Location";

    /// Name of the fallback location
    pub const FALLBACK_NAME: &'static str = "London";

    /// Create a named location
    #[must_use]
    pub fn new(name: impl Into<String>, coordinates: GeoLocation) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }

    /// Location built from a platform-reported position
    #[must_use]
    pub fn current_position(coordinates: GeoLocation) -> Self {
        Self::new(Self::CURRENT_POSITION_NAME, coordinates)
    }

    /// Fallback used when no position is available
    #[must_use]
    pub fn london() -> Self {
        Self::new(Self::FALLBACK_NAME, GeoLocation::london())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn coordinates(&self) -> GeoLocation {
        self.coordinates
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.coordinates.latitude()
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.coordinates.longitude()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.coordinates)
    }
}

/// One candidate returned by a city search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingResult {
    /// Provider identifier
    pub id: i64,
    /// Place name
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Country name, when the provider knows it
    #[serde(default)]
    pub country: Option<String>,
}

impl GeocodingResult {
    /// Label shown in candidate lists, e.g. "Paris, France"
    #[must_use]
    pub fn label(&self) -> String {
        match &self.country {
            Some(country) if !country.is_empty() => format!("{}, {country}", self.name),
            _ => self.name.clone(),
        }
    }
}

impl TryFrom<&GeocodingResult> for Location {
    type Error = InvalidCoordinates;

    fn try_from(result: &GeocodingResult) -> Result<Self, Self::Error> {
        let coordinates = GeoLocation::new(result.latitude, result.longitude)?;
        Ok(Self::new(result.name.clone(), coordinates))
    }
}
