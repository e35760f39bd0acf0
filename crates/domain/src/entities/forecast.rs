//! Forecast entities: current conditions plus hourly and daily series

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Serialize;

use crate::errors::DomainError;
use crate::time_index;
use crate::value_objects::{WeatherInfo, classify};

/// Point-in-time snapshot of the weather
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    /// Observation time in the location's offset
    pub time: DateTime<FixedOffset>,
    /// Temperature in °C
    pub temperature_2m: f64,
    /// Relative humidity in %
    pub relative_humidity_2m: f64,
    /// Apparent temperature in °C
    pub apparent_temperature: f64,
    /// Whether the sun is up at the location
    pub is_day: bool,
    /// WMO weather code
    pub weather_code: i32,
    /// Mean sea level pressure in hPa
    pub pressure_msl: f64,
    /// Wind speed in km/h
    pub wind_speed_10m: f64,
}

impl CurrentConditions {
    /// Classifier record for the current code and daylight
    #[must_use]
    pub const fn weather_info(&self) -> WeatherInfo {
        classify(Some(self.weather_code), self.is_day)
    }
}

/// One hour of the hourly series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyEntry {
    pub time: DateTime<FixedOffset>,
    pub temperature_2m: f64,
    /// Missing codes classify as unknown
    pub weather_code: Option<i32>,
}

/// Hourly forecast as parallel columns
///
/// All columns share one length and `time` is strictly increasing. Values
/// may be missing; an hour without a temperature is not shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlySeries {
    time: Vec<DateTime<FixedOffset>>,
    temperature_2m: Vec<Option<f64>>,
    weather_code: Vec<Option<i32>>,
}

impl HourlySeries {
    /// Build a validated hourly series from complete columns
    ///
    /// # Errors
    ///
    /// Returns `SeriesLengthMismatch` if a column length differs from `time`,
    /// or `NonIncreasingTime` if timestamps are out of order or repeated.
    pub fn new(
        time: Vec<DateTime<FixedOffset>>,
        temperature_2m: Vec<f64>,
        weather_code: Vec<i32>,
    ) -> Result<Self, DomainError> {
        Self::with_gaps(
            time,
            temperature_2m.into_iter().map(Some).collect(),
            weather_code.into_iter().map(Some).collect(),
        )
    }

    /// Build a validated hourly series whose columns may contain gaps
    ///
    /// # Errors
    ///
    /// Same as [`HourlySeries::new`].
    pub fn with_gaps(
        time: Vec<DateTime<FixedOffset>>,
        temperature_2m: Vec<Option<f64>>,
        weather_code: Vec<Option<i32>>,
    ) -> Result<Self, DomainError> {
        ensure_parallel("hourly", "temperature_2m", time.len(), temperature_2m.len())?;
        ensure_parallel("hourly", "weather_code", time.len(), weather_code.len())?;
        ensure_strictly_increasing("hourly", &time)?;
        Ok(Self {
            time,
            temperature_2m,
            weather_code,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    #[must_use]
    pub fn time(&self) -> &[DateTime<FixedOffset>] {
        &self.time
    }

    #[must_use]
    pub fn temperature_2m(&self) -> &[Option<f64>] {
        &self.temperature_2m
    }

    #[must_use]
    pub fn weather_code(&self) -> &[Option<i32>] {
        &self.weather_code
    }

    /// Entry at `index`; `None` if out of range or the temperature is missing
    #[must_use]
    pub fn get(&self, index: usize) -> Option<HourlyEntry> {
        Some(HourlyEntry {
            time: *self.time.get(index)?,
            temperature_2m: (*self.temperature_2m.get(index)?)?,
            weather_code: *self.weather_code.get(index)?,
        })
    }

    /// Entries of the 24-hour window starting at the first upcoming hour
    ///
    /// Hours without a temperature are skipped, so the window may be shorter.
    #[must_use]
    pub fn window(&self, now: DateTime<Utc>) -> Vec<HourlyEntry> {
        time_index::hourly_window(&self.time, now)
            .filter_map(|i| self.get(i))
            .collect()
    }
}

/// One calendar day of the daily series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub weather_code: Option<i32>,
    pub temperature_2m_max: f64,
    pub temperature_2m_min: f64,
}

/// Daily forecast as parallel columns; index 0 is today
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    time: Vec<NaiveDate>,
    weather_code: Vec<Option<i32>>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
}

impl DailySeries {
    /// Build a validated daily series from complete columns
    ///
    /// # Errors
    ///
    /// Returns `SeriesLengthMismatch` if a column length differs from `time`.
    pub fn new(
        time: Vec<NaiveDate>,
        weather_code: Vec<i32>,
        temperature_2m_max: Vec<f64>,
        temperature_2m_min: Vec<f64>,
    ) -> Result<Self, DomainError> {
        Self::with_gaps(
            time,
            weather_code.into_iter().map(Some).collect(),
            temperature_2m_max.into_iter().map(Some).collect(),
            temperature_2m_min.into_iter().map(Some).collect(),
        )
    }

    /// Build a validated daily series whose columns may contain gaps
    ///
    /// # Errors
    ///
    /// Same as [`DailySeries::new`].
    pub fn with_gaps(
        time: Vec<NaiveDate>,
        weather_code: Vec<Option<i32>>,
        temperature_2m_max: Vec<Option<f64>>,
        temperature_2m_min: Vec<Option<f64>>,
    ) -> Result<Self, DomainError> {
        ensure_parallel("daily", "weather_code", time.len(), weather_code.len())?;
        ensure_parallel("daily", "temperature_2m_max", time.len(), temperature_2m_max.len())?;
        ensure_parallel("daily", "temperature_2m_min", time.len(), temperature_2m_min.len())?;
        Ok(Self {
            time,
            weather_code,
            temperature_2m_max,
            temperature_2m_min,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    #[must_use]
    pub fn time(&self) -> &[NaiveDate] {
        &self.time
    }

    /// Day at `index`; `None` if out of range or a temperature is missing
    #[must_use]
    pub fn get(&self, index: usize) -> Option<DailyEntry> {
        Some(DailyEntry {
            date: *self.time.get(index)?,
            weather_code: *self.weather_code.get(index)?,
            temperature_2m_max: (*self.temperature_2m_max.get(index)?)?,
            temperature_2m_min: (*self.temperature_2m_min.get(index)?)?,
        })
    }

    /// All complete days in order
    pub fn entries(&self) -> impl Iterator<Item = DailyEntry> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }

    /// Complete days after today
    pub fn upcoming(&self) -> impl Iterator<Item = DailyEntry> + '_ {
        (1..self.len()).filter_map(|i| self.get(i))
    }
}

/// Forecast response for one pair of coordinates, without pollen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone name inferred by the provider
    pub timezone: String,
    pub timezone_abbreviation: String,
    /// Offset of the location's local time from UTC
    pub utc_offset_seconds: i32,
    pub current: CurrentConditions,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

pub(crate) fn ensure_parallel(
    series: &str,
    field: &str,
    expected: usize,
    actual: usize,
) -> Result<(), DomainError> {
    if expected == actual {
        Ok(())
    } else {
        Err(DomainError::length_mismatch(series, field, expected, actual))
    }
}

pub(crate) fn ensure_strictly_increasing(
    series: &str,
    time: &[DateTime<FixedOffset>],
) -> Result<(), DomainError> {
    match time.windows(2).position(|pair| pair[0] >= pair[1]) {
        Some(i) => Err(DomainError::non_increasing(series, i + 1)),
        None => Ok(()),
    }
}
