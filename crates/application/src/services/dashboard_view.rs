//! Panel view models
//!
//! Turns a loaded [`WeatherData`] into the values each dashboard panel
//! displays. Times are shown in the location's own offset; daily weekday
//! names come straight from the calendar date.

use chrono::{DateTime, Utc};
use domain::value_objects::{BackgroundTheme, PollenCategory, PollenLevel, classify};
use domain::{Location, WeatherData};
use serde::Serialize;

use super::dashboard_state::DashboardState;

/// Round half up, matching how temperatures are displayed everywhere
#[allow(clippy::cast_possible_truncation)]
fn round_display(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Current conditions panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub location_name: String,
    /// Long date, e.g. "Saturday, October 17, 2026"
    pub date: String,
    pub emoji: &'static str,
    pub temperature: i64,
    pub description: &'static str,
    pub recommendation: &'static str,
    pub theme: BackgroundTheme,
}

/// One column of the hourly strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyView {
    /// 12-hour label, e.g. "3 PM"
    pub label: String,
    pub emoji: &'static str,
    pub temperature: i64,
}

/// One row of the daily list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyView {
    pub weekday: String,
    pub emoji: &'static str,
    pub description: &'static str,
    pub max: i64,
    pub min: i64,
}

/// Detail tiles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailsView {
    pub feels_like: i64,
    /// Relative humidity as reported
    pub humidity: f64,
    /// km/h
    pub wind_speed: i64,
    /// hPa
    pub pressure: i64,
}

/// One pollen category gauge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollenSlotView {
    pub category: PollenCategory,
    pub name: &'static str,
    pub icon: &'static str,
    pub score: u8,
    pub max_score: u8,
    pub level: &'static str,
}

impl PollenSlotView {
    /// Gauge caption, e.g. "2/4"
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.score, self.max_score)
    }
}

/// Pollen panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollenView {
    pub slots: Vec<PollenSlotView>,
    /// False when no pollen series was available for this location
    pub available: bool,
}

/// Everything rendered for one location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub header: HeaderView,
    pub hourly: Vec<HourlyView>,
    pub daily: Vec<DailyView>,
    pub details: DetailsView,
    pub pollen: PollenView,
}

impl DashboardView {
    /// Build all panels for `location` as of `now`
    #[must_use]
    pub fn build(location: &Location, data: &WeatherData, now: DateTime<Utc>) -> Self {
        let current = &data.current;
        let info = data.current_info();

        let header = HeaderView {
            location_name: location.name().to_string(),
            date: now
                .with_timezone(&data.offset())
                .format("%A, %B %-d, %Y")
                .to_string(),
            emoji: info.emoji,
            temperature: round_display(current.temperature_2m),
            description: info.description,
            recommendation: info.recommendation,
            theme: info.theme,
        };

        let hourly = data
            .hourly_window(now)
            .into_iter()
            .map(|entry| HourlyView {
                label: entry.time.format("%-I %p").to_string(),
                emoji: classify(entry.weather_code, true).emoji,
                temperature: round_display(entry.temperature_2m),
            })
            .collect();

        let daily = data
            .upcoming_days()
            .into_iter()
            .map(|day| {
                let info = classify(day.weather_code, true);
                DailyView {
                    weekday: day.date.format("%A").to_string(),
                    emoji: info.emoji,
                    description: info.description,
                    max: round_display(day.temperature_2m_max),
                    min: round_display(day.temperature_2m_min),
                }
            })
            .collect();

        let details = DetailsView {
            feels_like: round_display(current.apparent_temperature),
            humidity: current.relative_humidity_2m,
            wind_speed: round_display(current.wind_speed_10m),
            pressure: round_display(current.pressure_msl),
        };

        let summary = data.pollen_summary(now);
        let pollen = PollenView {
            slots: summary
                .readings()
                .iter()
                .map(|reading| PollenSlotView {
                    category: reading.category,
                    name: reading.category.label(),
                    icon: reading.category.icon(),
                    score: reading.score(),
                    max_score: PollenLevel::MAX_SCORE,
                    level: reading.level.label(),
                })
                .collect(),
            available: summary.is_available(),
        };

        Self {
            header,
            hourly,
            daily,
            details,
            pollen,
        }
    }

    /// Build from a state snapshot, if it holds a loaded location
    #[must_use]
    pub fn from_state(state: &DashboardState, now: DateTime<Utc>) -> Option<Self> {
        Some(Self::build(state.location()?, state.weather()?, now))
    }
}
