//! SkyPanel CLI
//!
//! Terminal front end for the weather dashboard.

#![allow(clippy::print_stdout)]

mod render;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use application::ports::GeocodingPort;
use application::{DashboardService, DashboardView};
use clap::{Parser, Subcommand};
use domain::value_objects::{GeoLocation, Location, classify};
use infrastructure::{AppConfig, ConfiguredGeolocation, OpenMeteoAdapter, init_telemetry};
use tracing::debug;

use render::{CandidatesText, ClassificationText, DashboardText, Style};

/// SkyPanel CLI
#[derive(Parser)]
#[command(name = "skypanel-cli")]
#[command(author, version, about = "SkyPanel weather dashboard", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "SKYPANEL_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard for a city, coordinates or the current position
    ///
    /// Without arguments the configured position is used, falling back to
    /// London.
    Show {
        /// City to search for; the first match is shown
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        city: Option<String>,

        /// Latitude in degrees
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude in degrees
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Display name for explicit coordinates
        #[arg(long, requires = "lat")]
        name: Option<String>,
    },

    /// List city candidates for a search query
    Search {
        /// City name
        query: String,
    },

    /// Describe a WMO weather code
    Classify {
        /// WMO weather code
        #[arg(allow_negative_numbers = true)]
        code: i32,

        /// Use the night variant of the theme
        #[arg(long)]
        night: bool,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Target chosen by the `show` arguments
#[derive(Debug, Clone, PartialEq)]
enum ShowTarget {
    City(String),
    Coordinates(Location),
    CurrentPosition,
}

fn show_target(
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    name: Option<String>,
) -> anyhow::Result<ShowTarget> {
    match (city, lat, lon) {
        (Some(city), _, _) => Ok(ShowTarget::City(city)),
        (None, Some(lat), Some(lon)) => {
            let coordinates = GeoLocation::new(lat, lon)?;
            let name = name.unwrap_or_else(|| format!("{coordinates}"));
            Ok(ShowTarget::Coordinates(Location::new(name, coordinates)))
        },
        (None, None, None) => Ok(ShowTarget::CurrentPosition),
        _ => bail!("--lat and --lon must be given together"),
    }
}

fn style(no_color: bool) -> Style {
    if no_color || !std::io::stdout().is_terminal() {
        Style::Plain
    } else {
        Style::Color
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config =
        AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    // Set up logging; -v flags override the configured filter
    let mut telemetry = config.telemetry.clone();
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        telemetry = telemetry.with_log_filter(filter);
    }
    init_telemetry(&telemetry)?;

    let command = cli.command.unwrap_or(Commands::Show {
        city: None,
        lat: None,
        lon: None,
        name: None,
    });

    match command {
        Commands::Classify { code, night } => {
            let info = classify(Some(code), !night);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", ClassificationText { code, info });
            }
        },

        Commands::Search { query } => {
            let adapter = OpenMeteoAdapter::with_config(config.weather.clone())?;
            let results = adapter.search_city(query.trim()).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!(
                    "{}",
                    CandidatesText {
                        query: &query,
                        results: &results,
                    }
                );
            }
        },

        Commands::Show {
            city,
            lat,
            lon,
            name,
        } => {
            let target = show_target(city, lat, lon, name)?;
            debug!(?target, "Resolved dashboard target");

            let adapter = Arc::new(OpenMeteoAdapter::with_config(config.weather.clone())?);
            let geolocation = ConfiguredGeolocation::from_config(&config.location)?;
            let service = DashboardService::new(adapter.clone(), adapter.clone(), adapter)
                .with_geolocation(Arc::new(geolocation))
                .with_fallback(config.location.fallback()?);

            match target {
                ShowTarget::City(city) => {
                    service.search(&city).await;
                },
                ShowTarget::Coordinates(location) => {
                    service.select_location(location).await;
                },
                ShowTarget::CurrentPosition => {
                    service.locate().await;
                },
            }

            let state = service.snapshot();
            if let Some(error) = state.error() {
                bail!("{error}");
            }
            let Some(view) = DashboardView::from_state(&state, chrono::Utc::now()) else {
                bail!("No weather data available");
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!(
                    "{}",
                    DashboardText {
                        view: &view,
                        style: style(cli.no_color),
                    }
                );
            }
        },
    }

    Ok(())
}
