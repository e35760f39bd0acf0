//! Domain entities - forecast series and the composite weather record

mod forecast;
mod pollen_series;
mod weather_data;

pub use forecast::{
    CurrentConditions, DailyEntry, DailySeries, ForecastResult, HourlyEntry, HourlySeries,
};
pub use pollen_series::{CategoryReading, PollenSeries, PollenSummary};
pub use weather_data::WeatherData;
