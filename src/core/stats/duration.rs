//! Total and average trip duration.

use std::time::Instant;

use crate::core::stats::{fmt_or_no_data, print_elapsed};
use crate::data::Table;
use crate::ui::messages;
use crate::utils::colors::{CYAN, GREEN, RESET};
use crate::utils::formatting::{Hms, Ms};

#[derive(Debug, PartialEq, Eq)]
pub struct DurationStats {
    /// Decomposed sum of all trip durations. A true sum: zero for an
    /// empty table.
    pub total: Hms,
    /// Decomposed mean duration; undefined for an empty table.
    pub mean: Option<Ms>,
}

pub fn compute(table: &Table) -> DurationStats {
    let total: f64 = table.rows.iter().map(|t| t.trip_duration).sum();
    let mean = if table.is_empty() {
        None
    } else {
        Some(Ms::from_secs(total / table.len() as f64))
    };

    DurationStats {
        total: Hms::from_secs(total),
        mean,
    }
}

pub fn report(table: &Table) {
    messages::header("Calculating Trip Duration...");
    let started = Instant::now();

    let stats = compute(table);
    println!(
        "{}• Total time traveled:{} {}{}{}",
        CYAN, RESET, GREEN, stats.total, RESET
    );
    println!(
        "{}• Average travel time:{} {}",
        CYAN,
        RESET,
        fmt_or_no_data(stats.mean)
    );

    print_elapsed(started);
}
