//! Descriptive statistics over one filtered trip table.
//! Four independent groups: temporal, station, duration, user.

pub mod duration;
pub mod freq;
pub mod station;
pub mod time;
pub mod user;

use std::fmt::Display;
use std::time::Instant;

use crate::utils::colors::{GREEN, GREY, RESET};

/// Render a statistic value, or the grey empty-table fallback.
pub(crate) fn fmt_or_no_data<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => format!("{GREEN}{v}{RESET}"),
        None => format!("{GREY}no data available{RESET}"),
    }
}

/// Per-group elapsed-time diagnostic.
pub(crate) fn print_elapsed(started: Instant) {
    println!(
        "\nThis took {:.6} seconds.",
        started.elapsed().as_secs_f64()
    );
}
