//! Domain layer for SkyPanel
//!
//! Contains the weather model, the weather-code classifier, pollen
//! categorisation and the time-index rules shared by the dashboard panels.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod time_index;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
