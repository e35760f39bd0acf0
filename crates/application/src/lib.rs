//! Application layer - Use cases and orchestration
//!
//! Holds the dashboard state machine, the service that drives it through the
//! data ports, and the panel view models derived from a loaded forecast.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
