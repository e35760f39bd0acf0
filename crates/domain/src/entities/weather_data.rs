//! Composite weather record for one location

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Serialize;

use super::forecast::{
    CurrentConditions, DailyEntry, DailySeries, ForecastResult, HourlyEntry, HourlySeries,
};
use super::pollen_series::{PollenSeries, PollenSummary};
use crate::value_objects::WeatherInfo;

/// Forecast and optional pollen data merged into one record
///
/// Missing pollen never prevents construction; the pollen panel then shows
/// three empty category slots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherData {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub utc_offset_seconds: i32,
    pub current: CurrentConditions,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
    pub pollen: Option<PollenSeries>,
}

impl WeatherData {
    /// Merge a forecast with an optional pollen series
    #[must_use]
    pub fn build(forecast: ForecastResult, pollen: Option<PollenSeries>) -> Self {
        let ForecastResult {
            latitude,
            longitude,
            timezone,
            timezone_abbreviation,
            utc_offset_seconds,
            current,
            hourly,
            daily,
        } = forecast;

        Self {
            latitude,
            longitude,
            timezone,
            timezone_abbreviation,
            utc_offset_seconds,
            current,
            hourly,
            daily,
            pollen,
        }
    }

    /// Local offset of the location; UTC if the reported offset is invalid
    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_seconds).unwrap_or_else(|| Utc.fix())
    }

    /// Classifier record for the current conditions
    #[must_use]
    pub const fn current_info(&self) -> WeatherInfo {
        self.current.weather_info()
    }

    /// Hourly panel entries for `now`
    #[must_use]
    pub fn hourly_window(&self, now: DateTime<Utc>) -> Vec<HourlyEntry> {
        self.hourly.window(now)
    }

    /// Daily panel entries; today is shown by the header instead
    #[must_use]
    pub fn upcoming_days(&self) -> Vec<DailyEntry> {
        self.daily.upcoming().collect()
    }

    /// Pollen category slots for `now`
    #[must_use]
    pub fn pollen_summary(&self, now: DateTime<Utc>) -> PollenSummary {
        PollenSummary::from_series(self.pollen.as_ref(), now)
    }
}
