//! Raw Open-Meteo payloads and their conversion into domain types
//!
//! All endpoints are queried with `timezone=auto`, so timestamps arrive as
//! local wall-clock strings ("2026-10-17T14:00") next to `utc_offset_seconds`.
//! They are pinned to that offset here.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use domain::{
    CurrentConditions, DailySeries, ForecastResult, GeocodingResult, HourlySeries, PollenSeries,
    PollenSpecies,
};
use serde::Deserialize;
use tracing::warn;

use crate::client::WeatherError;

/// Geocoding search response
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    /// Absent when nothing matched
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
}

/// Forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    #[serde(default)]
    pub timezone_abbreviation: String,
    #[serde(default)]
    pub utc_offset_seconds: i32,
    pub current: Option<CurrentData>,
    pub hourly: Option<HourlyData>,
    pub daily: Option<DailyData>,
}

/// Raw current block
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentData {
    pub time: String,
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub apparent_temperature: f64,
    pub is_day: u8,
    pub weather_code: i32,
    pub pressure_msl: f64,
    pub wind_speed_10m: f64,
}

/// Raw hourly block; values may be null
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub weather_code: Vec<Option<i32>>,
}

/// Raw daily block; values may be null
#[derive(Debug, Clone, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    pub weather_code: Vec<Option<i32>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
}

/// Air-quality response carrying hourly pollen
#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityResponse {
    #[serde(default)]
    pub utc_offset_seconds: i32,
    pub hourly: Option<PollenData>,
}

/// Raw hourly pollen block
///
/// Every species column may be absent, null, or hold null values.
#[derive(Debug, Clone, Deserialize)]
pub struct PollenData {
    pub time: Option<Vec<String>>,
    #[serde(default)]
    pub alder_pollen: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub birch_pollen: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub grass_pollen: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub mugwort_pollen: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub olive_pollen: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub ragweed_pollen: Option<Vec<Option<f64>>>,
}

impl ForecastResponse {
    /// Convert into a validated forecast
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if a block is missing, a timestamp is malformed,
    /// or the parallel columns of a series disagree.
    pub fn into_forecast(self) -> Result<ForecastResult, WeatherError> {
        let offset = offset_from_seconds(self.utc_offset_seconds)?;

        let current = self.current.ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })?;
        let hourly = self.hourly.ok_or_else(|| {
            WeatherError::ParseError("No hourly forecast data in response".to_string())
        })?;
        let daily = self.daily.ok_or_else(|| {
            WeatherError::ParseError("No daily forecast data in response".to_string())
        })?;

        Ok(ForecastResult {
            latitude: self.latitude,
            longitude: self.longitude,
            timezone: self.timezone,
            timezone_abbreviation: self.timezone_abbreviation,
            utc_offset_seconds: self.utc_offset_seconds,
            current: current.into_conditions(offset)?,
            hourly: hourly.into_series(offset)?,
            daily: daily.into_series()?,
        })
    }
}

impl CurrentData {
    fn into_conditions(self, offset: FixedOffset) -> Result<CurrentConditions, WeatherError> {
        Ok(CurrentConditions {
            time: parse_local_datetime(&self.time, offset)?,
            temperature_2m: self.temperature_2m,
            relative_humidity_2m: self.relative_humidity_2m,
            apparent_temperature: self.apparent_temperature,
            is_day: self.is_day != 0,
            weather_code: self.weather_code,
            pressure_msl: self.pressure_msl,
            wind_speed_10m: self.wind_speed_10m,
        })
    }
}

impl HourlyData {
    fn into_series(self, offset: FixedOffset) -> Result<HourlySeries, WeatherError> {
        let time = parse_time_axis(&self.time, offset)?;
        HourlySeries::with_gaps(time, self.temperature_2m, self.weather_code)
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

impl DailyData {
    fn into_series(self) -> Result<DailySeries, WeatherError> {
        let time = self
            .time
            .iter()
            .map(|d| {
                NaiveDate::parse_from_str(d, "%Y-%m-%d")
                    .map_err(|e| WeatherError::ParseError(format!("Invalid date {d}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        DailySeries::with_gaps(
            time,
            self.weather_code,
            self.temperature_2m_max,
            self.temperature_2m_min,
        )
        .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

impl AirQualityResponse {
    /// Convert into a pollen series
    ///
    /// `Ok(None)` means the payload carries no hourly time axis. A species
    /// column that is missing, null, or misaligned with the time axis is
    /// left empty and reads as 0; the other species are kept.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for malformed or unordered timestamps.
    pub fn into_pollen_series(self) -> Result<Option<PollenSeries>, WeatherError> {
        let Some(hourly) = self.hourly else {
            return Ok(None);
        };
        let Some(raw_time) = hourly.time else {
            return Ok(None);
        };

        let offset = offset_from_seconds(self.utc_offset_seconds)?;
        let time = parse_time_axis(&raw_time, offset)?;

        let columns = [
            (PollenSpecies::Alder, hourly.alder_pollen),
            (PollenSpecies::Birch, hourly.birch_pollen),
            (PollenSpecies::Grass, hourly.grass_pollen),
            (PollenSpecies::Mugwort, hourly.mugwort_pollen),
            (PollenSpecies::Olive, hourly.olive_pollen),
            (PollenSpecies::Ragweed, hourly.ragweed_pollen),
        ];

        let mut series =
            PollenSeries::new(time).map_err(|e| WeatherError::ParseError(e.to_string()))?;
        for (species, values) in columns {
            let Some(values) = values else {
                continue;
            };
            if values.len() != series.len() {
                warn!(
                    species = species.api_field(),
                    expected = series.len(),
                    actual = values.len(),
                    "Ignoring misaligned pollen column"
                );
                continue;
            }
            series = series
                .with_species(species, values)
                .map_err(|e| WeatherError::ParseError(e.to_string()))?;
        }

        Ok(Some(series))
    }
}

fn offset_from_seconds(seconds: i32) -> Result<FixedOffset, WeatherError> {
    FixedOffset::east_opt(seconds)
        .ok_or_else(|| WeatherError::ParseError(format!("Invalid UTC offset: {seconds}s")))
}

fn parse_time_axis(
    raw: &[String],
    offset: FixedOffset,
) -> Result<Vec<DateTime<FixedOffset>>, WeatherError> {
    raw.iter()
        .map(|s| parse_local_datetime(s, offset))
        .collect()
}

/// Parse a provider timestamp and pin it to the location's offset
fn parse_local_datetime(
    s: &str,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, WeatherError> {
    // Local wall-clock time (2026-10-17T14:00)
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return pin_to_offset(&naive, offset, s);
    }

    // With seconds
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return pin_to_offset(&naive, offset, s);
    }

    // RFC 3339 carries its own offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&offset));
    }

    Err(WeatherError::ParseError(format!(
        "Invalid datetime format: {s}"
    )))
}

fn pin_to_offset(
    naive: &NaiveDateTime,
    offset: FixedOffset,
    raw: &str,
) -> Result<DateTime<FixedOffset>, WeatherError> {
    offset
        .from_local_datetime(naive)
        .single()
        .ok_or_else(|| WeatherError::ParseError(format!("Ambiguous local time: {raw}")))
}
