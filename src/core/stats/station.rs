//! Most popular stations and start/end combination.

use std::time::Instant;

use crate::core::stats::{fmt_or_no_data, freq, print_elapsed};
use crate::data::Table;
use crate::ui::messages;
use crate::utils::colors::{CYAN, RESET};

#[derive(Debug, PartialEq, Eq)]
pub struct StationStats {
    pub common_start: Option<String>,
    pub common_end: Option<String>,
    pub common_combo: Option<String>,
}

pub fn compute(table: &Table) -> StationStats {
    StationStats {
        common_start: freq::mode(table.rows.iter().map(|t| t.start_station.as_str()))
            .map(str::to_string),
        common_end: freq::mode(table.rows.iter().map(|t| t.end_station.as_str()))
            .map(str::to_string),
        common_combo: freq::mode(table.rows.iter().map(|t| t.station_combo())),
    }
}

pub fn report(table: &Table) {
    messages::header("Calculating The Most Popular Stations and Trip...");
    let started = Instant::now();

    let stats = compute(table);
    println!(
        "{}• Most common start station:{} {}",
        CYAN,
        RESET,
        fmt_or_no_data(stats.common_start)
    );
    println!(
        "{}• Most common end station:{} {}",
        CYAN,
        RESET,
        fmt_or_no_data(stats.common_end)
    );
    println!(
        "{}• Most common combination of stations:{} {}",
        CYAN,
        RESET,
        fmt_or_no_data(stats.common_combo)
    );

    print_elapsed(started);
}
