//! Dashboard service
//!
//! Drives [`DashboardState`] through the data ports: resolves the initial
//! position, searches cities and loads forecast plus pollen for the selected
//! location. The state lock is only taken inside synchronous transitions and
//! never held across an await.

use std::fmt;
use std::sync::Arc;

use domain::{Location, WeatherData};
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use super::dashboard_state::DashboardState;
use crate::error::ApplicationError;
use crate::ports::{ForecastPort, GeocodingPort, GeolocationPort, PollenPort};

/// Application service behind the dashboard
pub struct DashboardService {
    geocoding: Arc<dyn GeocodingPort>,
    forecast: Arc<dyn ForecastPort>,
    pollen: Arc<dyn PollenPort>,
    geolocation: Option<Arc<dyn GeolocationPort>>,
    fallback: Location,
    state: Mutex<DashboardState>,
}

impl fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardService")
            .field("has_geolocation", &self.geolocation.is_some())
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl DashboardService {
    /// Create a service with London as the fallback location
    #[must_use]
    pub fn new(
        geocoding: Arc<dyn GeocodingPort>,
        forecast: Arc<dyn ForecastPort>,
        pollen: Arc<dyn PollenPort>,
    ) -> Self {
        Self {
            geocoding,
            forecast,
            pollen,
            geolocation: None,
            fallback: Location::london(),
            state: Mutex::new(DashboardState::new()),
        }
    }

    /// Use a geolocation source for [`locate`](Self::locate)
    #[must_use]
    pub fn with_geolocation(mut self, geolocation: Arc<dyn GeolocationPort>) -> Self {
        self.geolocation = Some(geolocation);
        self
    }

    /// Location used when no position is available
    #[must_use]
    pub fn with_fallback(mut self, fallback: Location) -> Self {
        self.fallback = fallback;
        self
    }

    #[must_use]
    pub const fn fallback(&self) -> &Location {
        &self.fallback
    }

    /// Copy of the current dashboard state
    #[must_use]
    pub fn snapshot(&self) -> DashboardState {
        self.state.lock().clone()
    }

    /// Fetch forecast and pollen concurrently and merge them
    ///
    /// Forecast failures abort the load. Missing pollen only leaves the
    /// pollen panel empty.
    #[instrument(skip(self), fields(location = %location.name()))]
    pub async fn load_weather(&self, location: &Location) -> Result<WeatherData, ApplicationError> {
        let coordinates = location.coordinates();
        let (forecast, pollen) = tokio::join!(
            self.forecast.get_forecast(&coordinates),
            self.pollen.get_pollen(&coordinates)
        );

        let forecast = forecast?;
        if pollen.is_none() {
            debug!("Pollen unavailable, building weather data without it");
        }

        Ok(WeatherData::build(forecast, pollen))
    }

    /// Show `location` and load its weather
    ///
    /// Returns whether the result was applied; `false` means a newer request
    /// was issued while this one was in flight.
    #[instrument(skip(self), fields(location = %location.name()))]
    pub async fn select_location(&self, location: Location) -> bool {
        let ticket = self.state.lock().change_location(location.clone());

        let result = self.load_weather(&location).await;
        if let Err(ref e) = result {
            warn!(error = %e, remote = e.is_remote(), "Failed to load weather");
        }

        let applied = self.state.lock().resolve_fetch(ticket, result);
        if applied {
            info!("Weather updated");
        }
        applied
    }

    /// Search for a city and switch to the first match
    ///
    /// Returns the selected location once its weather has been applied;
    /// `None` on a miss, a failure, or when a newer request replaced this one
    /// while in flight. Misses and failures are recorded in the state and
    /// leave the displayed location unchanged. A blank query is ignored.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Option<Location> {
        if query.trim().is_empty() {
            return None;
        }

        let ticket = self.state.lock().begin_search(query);

        let result = self.geocoding.search_city(query.trim()).await;
        if let Err(ref e) = result {
            warn!(error = %e, "City search failed");
        }

        let location = self.state.lock().resolve_search(ticket, result)?;
        self.select_location(location.clone())
            .await
            .then_some(location)
    }

    /// Resolve the device position and show its weather
    ///
    /// Falls back to the configured fallback location when no geolocation
    /// source is configured or it fails.
    #[instrument(skip(self))]
    pub async fn locate(&self) -> Location {
        let location = match &self.geolocation {
            Some(geolocation) => match geolocation.current_position().await {
                Ok(position) => Location::current_position(position),
                Err(e) => {
                    warn!(error = %e, fallback = %self.fallback, "Position unavailable, using fallback");
                    self.fallback.clone()
                },
            },
            None => {
                debug!("No geolocation source configured");
                self.fallback.clone()
            },
        };

        self.state.lock().set_query(location.name());
        self.select_location(location.clone()).await;
        location
    }
}
