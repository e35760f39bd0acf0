//! Plain-text rendering of dashboard panels

use std::fmt;

use application::DashboardView;
use domain::value_objects::{BackgroundTheme, GeocodingResult, WeatherInfo};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Terminal styling; `Plain` emits no escape codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Color,
}

impl Style {
    fn accent(self, theme: BackgroundTheme) -> String {
        match self {
            Self::Plain => String::new(),
            Self::Color => format!("\x1b[38;5;{}m", theme.ansi_accent()),
        }
    }

    const fn bold(self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Color => BOLD,
        }
    }

    const fn reset(self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Color => RESET,
        }
    }
}

/// Full dashboard as text
pub struct DashboardText<'a> {
    pub view: &'a DashboardView,
    pub style: Style,
}

impl fmt::Display for DashboardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view;
        let header = &view.header;
        let accent = self.style.accent(header.theme);
        let bold = self.style.bold();
        let reset = self.style.reset();

        writeln!(f, "{accent}{bold}{}{reset}", header.location_name)?;
        writeln!(f, "{}", header.date)?;
        writeln!(
            f,
            "{}  {accent}{bold}{}°C{reset}  {}",
            header.emoji, header.temperature, header.description
        )?;
        writeln!(f, "{}", header.recommendation)?;

        writeln!(f)?;
        writeln!(f, "{bold}Hourly forecast{reset}")?;
        for hour in &view.hourly {
            writeln!(f, "  {:>5}  {}  {:>4}°", hour.label, hour.emoji, hour.temperature)?;
        }

        writeln!(f)?;
        writeln!(f, "{bold}Daily forecast{reset}")?;
        for day in &view.daily {
            writeln!(
                f,
                "  {:<9}  {}  {:>4}° / {:>4}°  {}",
                day.weekday, day.emoji, day.max, day.min, day.description
            )?;
        }

        let details = &view.details;
        writeln!(f)?;
        writeln!(f, "{bold}Details{reset}")?;
        writeln!(f, "  Feels Like  {}°C", details.feels_like)?;
        writeln!(f, "  Humidity    {}%", details.humidity)?;
        writeln!(f, "  Wind Speed  {} km/h", details.wind_speed)?;
        writeln!(f, "  Pressure    {} hPa", details.pressure)?;

        writeln!(f)?;
        writeln!(f, "{bold}Pollen Levels{reset}")?;
        for slot in &view.pollen.slots {
            writeln!(
                f,
                "  {} {:<6} {}  {}",
                slot.icon,
                slot.name,
                slot.score_label(),
                slot.level
            )?;
        }
        if !view.pollen.available {
            writeln!(f, "  No pollen data available")?;
        }

        Ok(())
    }
}

/// Classifier record for one code
pub struct ClassificationText {
    pub code: i32,
    pub info: WeatherInfo,
}

impl fmt::Display for ClassificationText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = &self.info;
        writeln!(f, "{} {} (code {})", info.emoji, info.description, self.code)?;
        writeln!(f, "{}", info.recommendation)?;
        write!(f, "Theme: {:?}", info.theme)
    }
}

/// Numbered list of city search candidates
pub struct CandidatesText<'a> {
    pub query: &'a str,
    pub results: &'a [GeocodingResult],
}

impl fmt::Display for CandidatesText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.results.is_empty() {
            return write!(f, "No cities found for \"{}\"", self.query);
        }
        for (i, result) in self.results.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}. {} ({:.4}, {:.4})",
                i + 1,
                result.label(),
                result.latitude,
                result.longitude
            )?;
        }
        Ok(())
    }
}
