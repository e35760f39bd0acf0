//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod location;
mod pollen;
mod weather_code;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use location::{GeocodingResult, Location};
pub use pollen::{PollenCategory, PollenLevel, PollenSpecies};
pub use weather_code::{BackgroundTheme, WeatherCode, WeatherInfo, classify};
