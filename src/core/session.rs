//! One interactive round: collect filters, load, run the four stats
//! groups, offer the raw-data viewer, ask to restart.

use crate::cli::parser::SeedFilters;
use crate::config::Config;
use crate::core::paginator::Paginator;
use crate::core::stats;
use crate::data::{self, Table};
use crate::errors::AppResult;
use crate::models::{City, Day, FilterSpec, Month, TripRecord};
use crate::ui::prompt;
use crate::utils::table::Table as TextTable;

const SEPARATOR_WIDTH: usize = 40;

pub fn run_session(cfg: &Config, seed: SeedFilters) -> AppResult<()> {
    println!("Hello! Let's explore some US bikeshare data!");

    // CLI-provided filters apply to the first iteration only; a restart
    // goes back to interactive prompts, like the original cycle.
    let mut seed = Some(seed);

    loop {
        let spec = collect_filters(seed.take().unwrap_or_default())?;
        separator();

        let table = data::load(cfg, &spec)?;

        stats::time::report(&table);
        separator();
        stats::station::report(&table);
        separator();
        stats::duration::report(&table);
        separator();
        stats::user::report(&table);
        separator();

        display_raw(&table, cfg.page_size)?;

        if !prompt::confirm("\nWould you like to restart? Enter yes or no: ")? {
            break;
        }
    }

    Ok(())
}

fn collect_filters(seed: SeedFilters) -> AppResult<FilterSpec> {
    let city = match seed.city {
        Some(city) => city,
        None => prompt::ask_until(
            "Input city (chicago, new york city, washington): ",
            "Not a valid city!",
            City::from_input,
        )?,
    };

    let month = match seed.month {
        Some(month) => month,
        None => prompt::ask_until(
            "Input month (all, january, february, march, april, may, june): ",
            "Not a valid month!",
            parse_month_filter,
        )?,
    };

    let day = match seed.day {
        Some(day) => day,
        None => prompt::ask_until(
            "Input day of the week (all, monday .. sunday): ",
            "Not a valid day!",
            parse_day_filter,
        )?,
    };

    Ok(FilterSpec::new(city, month, day))
}

fn parse_month_filter(s: &str) -> Option<Option<Month>> {
    if s == "all" {
        Some(None)
    } else {
        Month::from_input(s).map(Some)
    }
}

fn parse_day_filter(s: &str) -> Option<Option<Day>> {
    if s == "all" {
        Some(None)
    } else {
        Day::from_input(s).map(Some)
    }
}

fn display_raw(table: &Table, page_size: usize) -> AppResult<()> {
    if table.is_empty() {
        return Ok(());
    }

    let first = format!(
        "Would you like to see {} rows of raw trip data? Enter yes or no: ",
        page_size
    );
    if !prompt::confirm(&first)? {
        return Ok(());
    }

    let mut pager = Paginator::new(&table.rows, page_size);
    while let Some(window) = pager.next_window() {
        print!("{}", render_rows(window, table));
        if !pager.has_more() {
            break;
        }
        if !prompt::confirm("Would you like to see the next rows of data? Enter yes or no: ")? {
            break;
        }
    }

    Ok(())
}

fn render_rows(window: &[TripRecord], table: &Table) -> String {
    let mut headers = vec!["Start Time", "Start Station", "End Station", "Duration", "User Type"];
    if table.has_gender {
        headers.push("Gender");
    }
    if table.has_birth_year {
        headers.push("Birth Year");
    }

    let mut out = TextTable::new(headers);
    for trip in window {
        let mut row = vec![
            trip.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            trip.start_station.clone(),
            trip.end_station.clone(),
            format!("{}", trip.trip_duration.floor() as i64),
            trip.user_type.clone().unwrap_or_default(),
        ];
        if table.has_gender {
            row.push(trip.gender.clone().unwrap_or_default());
        }
        if table.has_birth_year {
            row.push(
                trip.birth_year
                    .map(|y| format!("{}", y as i32))
                    .unwrap_or_default(),
            );
        }
        out.add_row(row);
    }

    out.render()
}

fn separator() {
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}
