mod common;

use bikeshare::core::paginator::Paginator;
use bikeshare::core::stats::{duration, freq, station, time, user};
use bikeshare::data::{Table, load};
use bikeshare::models::{City, FilterSpec};
use common::test_config;

fn chicago_all() -> Table {
    load(&test_config(), &FilterSpec::new(City::Chicago, None, None)).expect("load chicago")
}

fn empty_table() -> Table {
    Table {
        rows: Vec::new(),
        has_gender: false,
        has_birth_year: false,
    }
}

#[test]
fn mode_breaks_ties_by_first_encounter() {
    assert_eq!(freq::mode(["b", "a", "b", "a"]), Some("b"));
    assert_eq!(freq::mode(["a", "b", "b"]), Some("b"));
    assert_eq!(freq::mode(Vec::<&str>::new()), None);
}

#[test]
fn value_counts_sorts_by_descending_frequency() {
    let counts = freq::value_counts(["x", "y", "y", "z", "y", "z"]);
    assert_eq!(counts, vec![("y", 3), ("z", 2), ("x", 1)]);
}

#[test]
fn time_stats_find_modal_month_day_hour() {
    let stats = time::compute(&chicago_all());
    assert_eq!(stats.common_month, Some(6));
    assert_eq!(stats.common_day, Some("Monday"));
    assert_eq!(stats.common_hour, Some(8));
}

#[test]
fn station_stats_find_modal_stations_and_combo() {
    let stats = station::compute(&chicago_all());
    assert_eq!(stats.common_start.as_deref(), Some("A St"));
    assert_eq!(stats.common_combo.as_deref(), Some("A St + B St"));
}

#[test]
fn duration_sum_decomposition_round_trips() {
    let table = chicago_all();
    let total: f64 = table.rows.iter().map(|t| t.trip_duration).sum();

    let stats = duration::compute(&table);
    assert_eq!(stats.total.total_secs(), total.floor() as i64);
    assert_eq!(stats.total.hours, 2);
    assert_eq!(stats.total.minutes, 3);
    assert_eq!(stats.total.seconds, 50);
}

#[test]
fn duration_mean_decomposition_round_trips() {
    let table = chicago_all();
    let total: f64 = table.rows.iter().map(|t| t.trip_duration).sum();
    let mean = total / table.len() as f64;

    let stats = duration::compute(&table);
    let ms = stats.mean.expect("non-empty table has a mean");
    assert_eq!(ms.total_secs(), mean.floor() as i64);
}

#[test]
fn user_stats_count_types_in_descending_order() {
    let stats = user::compute(&chicago_all());
    assert_eq!(
        stats.user_types,
        vec![
            ("Subscriber".to_string(), 8),
            ("Customer".to_string(), 3),
            ("Dependent".to_string(), 1),
        ]
    );
}

#[test]
fn user_stats_report_birth_year_extremes_and_mode() {
    let stats = user::compute(&chicago_all());
    let by = stats.birth_years.expect("chicago has birth years");
    assert_eq!(by.earliest, 1964);
    assert_eq!(by.most_recent, 2001);
    assert_eq!(by.most_common, 1992);
}

#[test]
fn washington_has_no_gender_or_birth_year_values() {
    let table = load(
        &test_config(),
        &FilterSpec::new(City::Washington, None, None),
    )
    .expect("load washington");

    let stats = user::compute(&table);
    assert!(!stats.user_types.is_empty());
    assert!(stats.genders.is_empty());
    assert!(stats.birth_years.is_none());
}

#[test]
fn empty_table_stats_fall_back_instead_of_panicking() {
    let table = empty_table();

    let t = time::compute(&table);
    assert_eq!(t.common_month, None);
    assert_eq!(t.common_day, None);
    assert_eq!(t.common_hour, None);

    let s = station::compute(&table);
    assert_eq!(s.common_start, None);
    assert_eq!(s.common_combo, None);

    let d = duration::compute(&table);
    assert_eq!(d.total.total_secs(), 0);
    assert!(d.mean.is_none());

    let u = user::compute(&table);
    assert!(u.user_types.is_empty());
    assert!(u.birth_years.is_none());
}

#[test]
fn blank_cells_are_excluded_from_counts() {
    // Rows 2 and 6 of the fixture have blank gender cells.
    let stats = user::compute(&chicago_all());
    let total_gendered: usize = stats.genders.iter().map(|(_, n)| n).sum();
    assert_eq!(total_gendered, 10);
}

#[test]
fn paginator_reveals_fixed_windows_then_stops() {
    let rows: Vec<u32> = (0..12).collect();
    let mut pager = Paginator::new(&rows, 5);

    assert_eq!(pager.next_window(), Some(&rows[0..5]));
    assert!(pager.has_more());
    assert_eq!(pager.next_window(), Some(&rows[5..10]));
    assert!(pager.has_more());
    assert_eq!(pager.next_window(), Some(&rows[10..12]));
    assert!(!pager.has_more());
    assert_eq!(pager.next_window(), None);
}

#[test]
fn paginator_handles_empty_input() {
    let rows: Vec<u32> = Vec::new();
    let mut pager = Paginator::new(&rows, 5);
    assert!(!pager.has_more());
    assert_eq!(pager.next_window(), None);
}
