//! CSV loading and month/day filtering.

use std::path::Path;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{FilterSpec, TripRecord};

/// The in-memory trip collection for one session iteration.
///
/// Column presence for the optional Gender / Birth Year columns is
/// captured from the CSV header at load time, so the user stats can
/// branch on it without probing individual rows.
#[derive(Debug, Clone)]
pub struct Table {
    pub rows: Vec<TripRecord>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Retain only rows matching the month/day filters (logical AND).
    /// An empty result is a valid Table, not an error.
    pub fn filter(mut self, spec: &FilterSpec) -> Table {
        if let Some(month) = spec.month {
            self.rows.retain(|t| t.month() == month.number());
        }
        if let Some(day) = spec.day {
            self.rows.retain(|t| t.weekday() == day.weekday());
        }
        self
    }
}

/// Loads data for the specified city and filters by month and day if
/// applicable. The city CSV path is resolved through the config mapping.
pub fn load(cfg: &Config, spec: &FilterSpec) -> AppResult<Table> {
    let path = cfg.source_path(spec.city);
    let table = read_table(&path)?;
    Ok(table.filter(spec))
}

fn read_table(path: &Path) -> AppResult<Table> {
    if !path.exists() {
        return Err(AppError::DataFileNotFound(path.display().to_string()));
    }

    let mut rdr = csv::Reader::from_path(path)?;

    let headers = rdr.headers()?.clone();
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let mut rows = Vec::new();
    for record in rdr.deserialize::<TripRecord>() {
        rows.push(record?);
    }

    Ok(Table {
        rows,
        has_gender,
        has_birth_year,
    })
}
