//! Most frequent times of travel: month, weekday, hour of day.

use std::time::Instant;

use crate::core::stats::{fmt_or_no_data, freq, print_elapsed};
use crate::data::Table;
use crate::models::trip::weekday_name;
use crate::ui::messages;
use crate::utils::colors::{CYAN, RESET};

#[derive(Debug, PartialEq, Eq)]
pub struct TimeStats {
    pub common_month: Option<u32>,
    pub common_day: Option<&'static str>,
    pub common_hour: Option<u32>,
}

pub fn compute(table: &Table) -> TimeStats {
    TimeStats {
        common_month: freq::mode(table.rows.iter().map(|t| t.month())),
        common_day: freq::mode(table.rows.iter().map(|t| t.weekday())).map(weekday_name),
        // Hour of day is derived here, not at load time.
        common_hour: freq::mode(table.rows.iter().map(|t| t.hour())),
    }
}

pub fn report(table: &Table) {
    messages::header("Calculating The Most Frequent Times of Travel...");
    let started = Instant::now();

    let stats = compute(table);
    println!(
        "{}• Most common month:{} {}",
        CYAN,
        RESET,
        fmt_or_no_data(stats.common_month)
    );
    println!(
        "{}• Most common day of the week:{} {}",
        CYAN,
        RESET,
        fmt_or_no_data(stats.common_day)
    );
    println!(
        "{}• Most common hour:{} {}",
        CYAN,
        RESET,
        fmt_or_no_data(stats.common_hour)
    );

    print_elapsed(started);
}
