// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use color_eyre::{Result, eyre::Context};
use simcal::{BuildingCalendar, EngineCalendarConfig, WeatherMetadata, resolve_calendar};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Simcal - resolves the simulation run period and daylight saving window
///
/// Prints the engine calendar settings as JSON on stdout. Logs go to stderr.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON file with the building's calendar settings.
    /// Defaults apply when omitted.
    #[arg(short, long)]
    building: Option<PathBuf>,

    /// Path to an EPW weather file. Without it a typical-year file is assumed.
    #[arg(short, long)]
    epw: Option<PathBuf>,

    /// Calendar year override (ignored for actual-year weather data)
    #[arg(short, long)]
    year: Option<i32>,

    /// Disable daylight saving
    #[arg(long)]
    no_dst: bool,

    /// Treat the weather data as containing Feb 29 (needs a leap `--year`)
    #[arg(long, conflicts_with = "epw", requires = "year")]
    leap_year: bool,
}

impl Args {
    /// Loads the building calendar and applies command-line overrides.
    fn building_calendar(&self) -> Result<BuildingCalendar> {
        let mut building: BuildingCalendar = match &self.building {
            Some(path) => {
                info!("Reading building calendar from: {}", path.display());
                let text: String = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&text)
                    .wrap_err_with(|| format!("invalid building calendar in {}", path.display()))?
            }
            None => BuildingCalendar::default(),
        };

        if let Some(year) = self.year {
            building.calendar_year = Some(year);
        }
        if self.no_dst {
            building.daylight_saving_enabled = false;
        }
        Ok(building)
    }

    /// Loads weather metadata from the EPW file, if any.
    fn weather_metadata(&self) -> Result<WeatherMetadata> {
        let Some(path) = &self.epw else {
            return Ok(WeatherMetadata {
                is_leap_year: self.leap_year,
                ..WeatherMetadata::typical_year()
            });
        };

        info!("Reading weather metadata from: {}", path.display());
        let text: String = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        WeatherMetadata::from_epw(&text)
            .wrap_err_with(|| format!("invalid weather file {}", path.display()))
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let building: BuildingCalendar = args.building_calendar()?;
    let weather: WeatherMetadata = args.weather_metadata()?;

    let config: EngineCalendarConfig = resolve_calendar(&building, &weather)
        .wrap_err("failed to resolve simulation calendar")?
        .to_engine_config();

    info!(
        "Resolved {} hours for calendar year {}",
        config.num_hours, config.calendar_year
    );
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
