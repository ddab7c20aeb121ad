use clap::Parser;

use crate::errors::{AppError, AppResult};
use crate::models::{City, Day, Month};

/// Command-line interface definition for bikeshare
/// Interactive CLI to explore US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare trip data: filters, descriptive statistics, raw-data viewer",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the city CSV files
    #[arg(long = "data-dir")]
    pub data_dir: Option<String>,

    /// Pre-seed the city for the first session (chicago, new york city, washington)
    #[arg(long = "city")]
    pub city: Option<String>,

    /// Pre-seed the month filter (january..june, or all)
    #[arg(long = "month")]
    pub month: Option<String>,

    /// Pre-seed the day filter (monday..sunday, or all)
    #[arg(long = "day")]
    pub day: Option<String>,
}

/// Filter fields supplied on the command line, already validated.
/// Fields left as None are collected interactively.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedFilters {
    pub city: Option<City>,
    pub month: Option<Option<Month>>,
    pub day: Option<Option<Day>>,
}

impl Cli {
    /// Validate any pre-seeded filter fields against their closed
    /// enumerations. "all" is accepted for month and day.
    pub fn seed_filters(&self) -> AppResult<SeedFilters> {
        let mut seed = SeedFilters::default();

        if let Some(c) = &self.city {
            seed.city =
                Some(City::from_input(c).ok_or_else(|| AppError::InvalidCity(c.clone()))?);
        }

        if let Some(m) = &self.month {
            seed.month = Some(if m.eq_ignore_ascii_case("all") {
                None
            } else {
                Some(Month::from_input(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?)
            });
        }

        if let Some(d) = &self.day {
            seed.day = Some(if d.eq_ignore_ascii_case("all") {
                None
            } else {
                Some(Day::from_input(d).ok_or_else(|| AppError::InvalidDay(d.clone()))?)
            });
        }

        Ok(seed)
    }
}
