//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geolocation_adapter;
mod open_meteo_adapter;

pub use geolocation_adapter::ConfiguredGeolocation;
pub use open_meteo_adapter::OpenMeteoAdapter;
