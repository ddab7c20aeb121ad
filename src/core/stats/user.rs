//! User demographics: type, gender, birth year.

use std::time::Instant;

use crate::core::stats::{freq, print_elapsed};
use crate::data::Table;
use crate::ui::messages;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};

#[derive(Debug, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Gender and birth-year figures are only meaningful when the matching
/// column exists in the source file; `report` branches on the Table's
/// presence flags so one absent column never skips the other sub-steps.
#[derive(Debug, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Vec<(String, usize)>,
    pub birth_years: Option<BirthYearStats>,
}

pub fn compute(table: &Table) -> UserStats {
    // Blank cells are excluded from the counts.
    let user_types = freq::value_counts(
        table
            .rows
            .iter()
            .filter_map(|t| t.user_type.as_deref())
            .filter(|s| !s.trim().is_empty()),
    );
    let genders = freq::value_counts(
        table
            .rows
            .iter()
            .filter_map(|t| t.gender.as_deref())
            .filter(|s| !s.trim().is_empty()),
    );

    let years: Vec<i32> = table
        .rows
        .iter()
        .filter_map(|t| t.birth_year)
        .map(|y| y as i32)
        .collect();
    let birth_years = match (
        years.iter().min().copied(),
        years.iter().max().copied(),
        freq::mode(years.iter().copied()),
    ) {
        (Some(earliest), Some(most_recent), Some(most_common)) => Some(BirthYearStats {
            earliest,
            most_recent,
            most_common,
        }),
        _ => None,
    };

    UserStats {
        user_types: owned_counts(user_types),
        genders: owned_counts(genders),
        birth_years,
    }
}

fn owned_counts(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(v, n)| (v.to_string(), n))
        .collect()
}

pub fn report(table: &Table) {
    messages::header("Calculating User Stats...");
    let started = Instant::now();

    let stats = compute(table);

    println!("{}• User types:{}", CYAN, RESET);
    print_counts(&stats.user_types);

    if table.has_gender {
        println!("{}• Genders:{}", CYAN, RESET);
        print_counts(&stats.genders);
    } else {
        println!(
            "{}• Genders:{} {}no gender data{}",
            CYAN, RESET, GREY, RESET
        );
    }

    if table.has_birth_year {
        match &stats.birth_years {
            Some(by) => {
                println!(
                    "{}• Earliest birth year:{} {}{}{}",
                    CYAN, RESET, GREEN, by.earliest, RESET
                );
                println!(
                    "{}• Most recent birth year:{} {}{}{}",
                    CYAN, RESET, GREEN, by.most_recent, RESET
                );
                println!(
                    "{}• Most common birth year:{} {}{}{}",
                    CYAN, RESET, GREEN, by.most_common, RESET
                );
            }
            None => println!(
                "{}• Birth years:{} {}no data available{}",
                CYAN, RESET, GREY, RESET
            ),
        }
    } else {
        println!(
            "{}• Birth years:{} {}no birth-year data{}",
            CYAN, RESET, GREY, RESET
        );
    }

    print_elapsed(started);
}

fn print_counts(counts: &[(String, usize)]) {
    if counts.is_empty() {
        println!("    {}no data available{}", GREY, RESET);
        return;
    }
    for (value, count) in counts {
        println!("    {}{:<12}{} {}{}{}", YELLOW, value, RESET, GREEN, count, RESET);
    }
}
