//! Dashboard state container
//!
//! All mutations of the displayed location, weather, loading flag and error
//! go through the transition methods below. Every request that can change
//! what is shown is issued a [`RequestTicket`] carrying the generation at
//! which it started; results arriving with an outdated ticket are dropped, so
//! the most recently issued request always wins regardless of which response
//! arrives last.

use std::fmt;

use domain::{GeocodingResult, Location, WeatherData};
use serde::Serialize;
use tracing::debug;

use crate::error::ApplicationError;

/// Generation stamp handed out when a request is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// User-visible failure shown by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DashboardError {
    /// Forecast could not be loaded for the selected location
    FetchFailed,
    /// City search request failed
    SearchFailed,
    /// City search returned no candidates
    CityNotFound(String),
}

impl DashboardError {
    /// Fixed message displayed to the user
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::FetchFailed => "Failed to fetch weather data. Please try again.".to_string(),
            Self::SearchFailed => {
                "Failed to search for city. Please check your connection.".to_string()
            },
            Self::CityNotFound(query) => format!("Could not find city: {query}"),
        }
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Everything the dashboard displays
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardState {
    location: Option<Location>,
    weather: Option<WeatherData>,
    loading: bool,
    error: Option<DashboardError>,
    query: String,
    generation: u64,
}

impl DashboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    #[must_use]
    pub const fn weather(&self) -> Option<&WeatherData> {
        self.weather.as_ref()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn error(&self) -> Option<&DashboardError> {
        self.error.as_ref()
    }

    /// Last search query, or the name of the last located position
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `ticket` belongs to the most recently issued request
    #[must_use]
    pub const fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.generation == self.generation
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    fn issue(&mut self) -> RequestTicket {
        self.generation = self.generation.wrapping_add(1);
        RequestTicket {
            generation: self.generation,
        }
    }

    /// Start a city search
    ///
    /// The displayed location is kept until the search resolves to a hit.
    pub fn begin_search(&mut self, query: &str) -> RequestTicket {
        self.query = query.trim().to_string();
        self.weather = None;
        self.error = None;
        self.loading = true;
        self.issue()
    }

    /// Apply the outcome of a city search
    ///
    /// Returns the location to load when the search found a city. The
    /// location is not applied here; callers follow up with
    /// [`change_location`](Self::change_location).
    pub fn resolve_search(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<GeocodingResult>, ApplicationError>,
    ) -> Option<Location> {
        if !self.is_current(ticket) {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale search result"
            );
            return None;
        }

        match result {
            Ok(results) => match results.first().map(Location::try_from) {
                Some(Ok(location)) => Some(location),
                Some(Err(_)) => {
                    self.fail(DashboardError::SearchFailed);
                    None
                },
                None => {
                    self.fail(DashboardError::CityNotFound(self.query.clone()));
                    None
                },
            },
            Err(_) => {
                self.fail(DashboardError::SearchFailed);
                None
            },
        }
    }

    /// Switch to a new location and start loading its weather
    pub fn change_location(&mut self, location: Location) -> RequestTicket {
        self.location = Some(location);
        self.weather = None;
        self.error = None;
        self.loading = true;
        self.issue()
    }

    /// Apply the outcome of a weather load
    ///
    /// Returns `false` without touching any field when `ticket` is stale.
    pub fn resolve_fetch(
        &mut self,
        ticket: RequestTicket,
        result: Result<WeatherData, ApplicationError>,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale weather result"
            );
            return false;
        }

        match result {
            Ok(weather) => {
                self.weather = Some(weather);
                self.error = None;
                self.loading = false;
            },
            Err(_) => self.fail(DashboardError::FetchFailed),
        }
        true
    }

    fn fail(&mut self, error: DashboardError) {
        self.error = Some(error);
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, NaiveDate, TimeZone};
    use domain::value_objects::GeoLocation;
    use domain::{CurrentConditions, DailySeries, ForecastResult, HourlySeries};

    fn paris() -> Location {
        Location::new("Paris", GeoLocation::new(48.85, 2.35).expect("valid coordinates"))
    }

    fn candidate(name: &str, latitude: f64, longitude: f64) -> GeocodingResult {
        GeocodingResult {
            id: 1,
            name: name.to_string(),
            latitude,
            longitude,
            country: None,
        }
    }

    fn weather(temperature: f64) -> WeatherData {
        let offset = FixedOffset::east_opt(0).expect("valid offset");
        let start = offset
            .with_ymd_and_hms(2026, 10, 17, 0, 0, 0)
            .single()
            .expect("valid timestamp");
        let time: Vec<_> = (0..3).map(|h| start + Duration::hours(h)).collect();
        let day = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date");

        let forecast = ForecastResult {
            latitude: 51.5,
            longitude: -0.12,
            timezone: "Europe/London".to_string(),
            timezone_abbreviation: "GMT".to_string(),
            utc_offset_seconds: 0,
            current: CurrentConditions {
                time: start,
                temperature_2m: temperature,
                relative_humidity_2m: 80.0,
                apparent_temperature: temperature,
                is_day: true,
                weather_code: 3,
                pressure_msl: 1012.0,
                wind_speed_10m: 9.0,
            },
            hourly: HourlySeries::new(time, vec![temperature; 3], vec![3; 3])
                .expect("valid hourly"),
            daily: DailySeries::new(vec![day], vec![3], vec![14.0], vec![8.0])
                .expect("valid daily"),
        };
        WeatherData::build(forecast, None)
    }

    // ========================================================================
    // Location changes
    // ========================================================================

    #[test]
    fn initial_state_is_empty() {
        let state = DashboardState::new();
        assert!(state.location().is_none());
        assert!(state.weather().is_none());
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn change_location_starts_loading() {
        let mut state = DashboardState::new();
        let ticket = state.change_location(Location::london());

        assert_eq!(ticket.generation(), 1);
        assert!(state.is_loading());
        assert_eq!(state.location().map(Location::name), Some("London"));
    }

    #[test]
    fn successful_fetch_stores_weather() {
        let mut state = DashboardState::new();
        let ticket = state.change_location(Location::london());

        assert!(state.resolve_fetch(ticket, Ok(weather(12.0))));
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert!(state.weather().is_some());
    }

    #[test]
    fn failed_fetch_shows_fixed_message() {
        let mut state = DashboardState::new();
        let ticket = state.change_location(Location::london());

        let applied = state.resolve_fetch(
            ticket,
            Err(ApplicationError::Network("HTTP 500".to_string())),
        );

        assert!(applied);
        assert!(!state.is_loading());
        assert!(state.weather().is_none());
        assert_eq!(
            state.error().map(DashboardError::message).as_deref(),
            Some("Failed to fetch weather data. Please try again.")
        );
    }

    #[test]
    fn change_location_clears_previous_error_and_weather() {
        let mut state = DashboardState::new();
        let first = state.change_location(Location::london());
        state.resolve_fetch(first, Ok(weather(12.0)));
        state.change_location(paris());

        assert!(state.weather().is_none());
        assert!(state.error().is_none());
        assert!(state.is_loading());
    }

    // ========================================================================
    // Stale results
    // ========================================================================

    #[test]
    fn stale_fetch_is_discarded() {
        let mut state = DashboardState::new();
        let london = state.change_location(Location::london());
        let paris_ticket = state.change_location(paris());

        assert!(!state.resolve_fetch(london, Ok(weather(12.0))));
        assert!(state.weather().is_none());
        assert!(state.is_loading());

        assert!(state.resolve_fetch(paris_ticket, Ok(weather(18.0))));
        assert_eq!(state.location().map(Location::name), Some("Paris"));
    }

    #[test]
    fn stale_fetch_after_newer_result_does_not_override() {
        let mut state = DashboardState::new();
        let london = state.change_location(Location::london());
        let paris_ticket = state.change_location(paris());

        state.resolve_fetch(paris_ticket, Ok(weather(18.0)));
        let snapshot = state.clone();

        assert!(!state.resolve_fetch(london, Ok(weather(12.0))));
        assert!(!state.resolve_fetch(
            london,
            Err(ApplicationError::Network("timeout".to_string()))
        ));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn stale_search_result_is_ignored() {
        let mut state = DashboardState::new();
        let search = state.begin_search("Paris");
        state.change_location(Location::london());

        let location = state.resolve_search(search, Ok(vec![candidate("Paris", 48.85, 2.35)]));
        assert!(location.is_none());
        assert_eq!(state.location().map(Location::name), Some("London"));
    }

    // ========================================================================
    // Search
    // ========================================================================

    #[test]
    fn search_hit_returns_first_candidate() {
        let mut state = DashboardState::new();
        let ticket = state.begin_search("  Springfield ");
        assert_eq!(state.query(), "Springfield");

        let location = state
            .resolve_search(
                ticket,
                Ok(vec![
                    candidate("Springfield", 39.8, -89.64),
                    candidate("Springfield", 37.2, -93.29),
                ]),
            )
            .expect("city found");

        assert!((location.latitude() - 39.8).abs() < f64::EPSILON);
        assert!(state.is_loading());
    }

    #[test]
    fn search_miss_keeps_location() {
        let mut state = DashboardState::new();
        let ticket = state.change_location(Location::london());
        state.resolve_fetch(ticket, Ok(weather(12.0)));

        let search = state.begin_search("Atlantis");
        assert!(state.resolve_search(search, Ok(Vec::new())).is_none());

        assert_eq!(state.location().map(Location::name), Some("London"));
        assert!(!state.is_loading());
        assert_eq!(
            state.error().map(DashboardError::message).as_deref(),
            Some("Could not find city: Atlantis")
        );
    }

    #[test]
    fn search_failure_shows_connection_message() {
        let mut state = DashboardState::new();
        let ticket = state.begin_search("Paris");

        let location = state.resolve_search(
            ticket,
            Err(ApplicationError::Network("connection refused".to_string())),
        );

        assert!(location.is_none());
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some(&DashboardError::SearchFailed));
        assert_eq!(
            DashboardError::SearchFailed.to_string(),
            "Failed to search for city. Please check your connection."
        );
    }

    #[test]
    fn search_candidate_with_bad_coordinates_is_a_failure() {
        let mut state = DashboardState::new();
        let ticket = state.begin_search("Nowhere");

        let location = state.resolve_search(ticket, Ok(vec![candidate("Nowhere", 123.0, 0.0)]));
        assert!(location.is_none());
        assert_eq!(state.error(), Some(&DashboardError::SearchFailed));
    }

    #[test]
    fn generations_increase_monotonically() {
        let mut state = DashboardState::new();
        let a = state.begin_search("a");
        let b = state.change_location(Location::london());
        let c = state.begin_search("b");
        assert!(a.generation() < b.generation());
        assert!(b.generation() < c.generation());
        assert!(state.is_current(c));
        assert!(!state.is_current(a));
    }
}
