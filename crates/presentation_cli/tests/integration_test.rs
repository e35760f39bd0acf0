//! Integration tests for CLI
//!
//! These tests verify CLI functionality without running actual commands,
//! but instead test the command parsing and structure.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "skypanel-cli")]
#[command(author, version, about = "SkyPanel weather dashboard", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(short, long, env = "SKYPANEL_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    json: bool,

    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    Show {
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        city: Option<String>,
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        #[arg(long, requires = "lat")]
        name: Option<String>,
    },
    Search {
        query: String,
    },
    Classify {
        #[arg(allow_negative_numbers = true)]
        code: i32,
        #[arg(long)]
        night: bool,
    },
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_without_command_defaults_to_none() {
    let cli = parse_args(&["skypanel-cli"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_parses_show_without_arguments() {
    let cli = parse_args(&["skypanel-cli", "show"]).unwrap();
    if let Some(Commands::Show {
        city,
        lat,
        lon,
        name,
    }) = cli.command
    {
        assert!(city.is_none());
        assert!(lat.is_none());
        assert!(lon.is_none());
        assert!(name.is_none());
    } else {
        panic!("Expected Show command");
    }
}

#[test]
fn cli_parses_show_city() {
    let cli = parse_args(&["skypanel-cli", "show", "--city", "São Paulo"]).unwrap();
    if let Some(Commands::Show { city, .. }) = cli.command {
        assert_eq!(city.as_deref(), Some("São Paulo"));
    } else {
        panic!("Expected Show command");
    }
}

#[test]
fn cli_parses_show_negative_coordinates() {
    let cli = parse_args(&[
        "skypanel-cli",
        "show",
        "--lat",
        "-33.8688",
        "--lon",
        "151.2093",
        "--name",
        "Sydney",
    ])
    .unwrap();
    if let Some(Commands::Show { lat, lon, name, .. }) = cli.command {
        assert_eq!(lat, Some(-33.8688));
        assert_eq!(lon, Some(151.2093));
        assert_eq!(name.as_deref(), Some("Sydney"));
    } else {
        panic!("Expected Show command");
    }
}

#[test]
fn cli_rejects_latitude_without_longitude() {
    assert!(parse_args(&["skypanel-cli", "show", "--lat", "48.85"]).is_err());
}

#[test]
fn cli_rejects_city_with_coordinates() {
    let result = parse_args(&[
        "skypanel-cli",
        "show",
        "--city",
        "Paris",
        "--lat",
        "48.85",
        "--lon",
        "2.35",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_rejects_name_without_coordinates() {
    assert!(parse_args(&["skypanel-cli", "show", "--name", "Home"]).is_err());
}

#[test]
fn cli_parses_search() {
    let cli = parse_args(&["skypanel-cli", "search", "Springfield"]).unwrap();
    if let Some(Commands::Search { query }) = cli.command {
        assert_eq!(query, "Springfield");
    } else {
        panic!("Expected Search command");
    }
}

#[test]
fn cli_search_requires_query() {
    assert!(parse_args(&["skypanel-cli", "search"]).is_err());
}

#[test]
fn cli_parses_classify() {
    let cli = parse_args(&["skypanel-cli", "classify", "95"]).unwrap();
    if let Some(Commands::Classify { code, night }) = cli.command {
        assert_eq!(code, 95);
        assert!(!night);
    } else {
        panic!("Expected Classify command");
    }
}

#[test]
fn cli_parses_classify_negative_code_at_night() {
    let cli = parse_args(&["skypanel-cli", "classify", "-1", "--night"]).unwrap();
    if let Some(Commands::Classify { code, night }) = cli.command {
        assert_eq!(code, -1);
        assert!(night);
    } else {
        panic!("Expected Classify command");
    }
}

#[test]
fn cli_rejects_non_numeric_code() {
    assert!(parse_args(&["skypanel-cli", "classify", "sunny"]).is_err());
}

#[test]
fn cli_parses_global_flags_after_subcommand() {
    let cli = parse_args(&[
        "skypanel-cli",
        "show",
        "--city",
        "Oslo",
        "-vv",
        "--json",
        "--no-color",
        "--config",
        "/etc/skypanel/config.toml",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 2);
    assert!(cli.json);
    assert!(cli.no_color);
    assert_eq!(cli.config, Some(PathBuf::from("/etc/skypanel/config.toml")));
}

#[test]
fn cli_verbose_flag_counts() {
    let cli = parse_args(&["skypanel-cli", "-vvv", "show"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn cli_rejects_unknown_command() {
    assert!(parse_args(&["skypanel-cli", "forecast"]).is_err());
}

#[test]
fn cli_help_flag() {
    let result = parse_args(&["skypanel-cli", "--help"]);
    assert!(result.is_err()); // --help causes early exit
}

#[test]
fn cli_version_flag() {
    let result = parse_args(&["skypanel-cli", "--version"]);
    assert!(result.is_err()); // --version causes early exit
}
