//! Open-Meteo integration
//!
//! Client for the Open-Meteo geocoding, forecast and air-quality APIs
//! (<https://open-meteo.com>). No API key is required.

pub mod client;
mod models;

pub use client::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
