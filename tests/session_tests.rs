use predicates::str::contains;

mod common;
use common::{bks, data_dir};

#[test]
fn full_session_with_cli_filters() {
    bks()
        .args([
            "--data-dir",
            &data_dir(),
            "--city",
            "chicago",
            "--month",
            "all",
            "--day",
            "all",
        ])
        .write_stdin("no\nno\n")
        .assert()
        .success()
        .stdout(contains("Most common month:"))
        .stdout(contains("Most common day of the week:"))
        .stdout(contains("Most common start station:"))
        .stdout(contains("Total time traveled:"))
        .stdout(contains("User types:"));
}

#[test]
fn interactive_prompts_collect_the_filters() {
    bks()
        .args(["--data-dir", &data_dir()])
        .write_stdin("chicago\njune\nmonday\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Monday"));
}

#[test]
fn invalid_prompt_input_reprompts() {
    bks()
        .args(["--data-dir", &data_dir()])
        .write_stdin("atlantis\nchicago\nsometime\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Not a valid city!"))
        .stdout(contains("Not a valid month!"));
}

#[test]
fn invalid_cli_city_fails_at_startup() {
    bks()
        .args(["--data-dir", &data_dir(), "--city", "atlantis"])
        .assert()
        .failure()
        .stderr(contains("Invalid city"));
}

#[test]
fn washington_reports_missing_optional_columns() {
    bks()
        .args([
            "--data-dir",
            &data_dir(),
            "--city",
            "washington",
            "--month",
            "all",
            "--day",
            "all",
        ])
        .write_stdin("no\nno\n")
        .assert()
        .success()
        .stdout(contains("no gender data"))
        .stdout(contains("no birth-year data"))
        .stdout(contains("User types:"));
}

#[test]
fn empty_filter_result_reports_no_data() {
    // The only February fixture row is a Monday.
    bks()
        .args([
            "--data-dir",
            &data_dir(),
            "--city",
            "chicago",
            "--month",
            "february",
            "--day",
            "tuesday",
        ])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(contains("no data available"));
}

#[test]
fn raw_viewer_pages_through_all_windows() {
    // 12 fixture rows, page size 5: windows [0,5), [5,10), [10,12).
    bks()
        .args([
            "--data-dir",
            &data_dir(),
            "--city",
            "chicago",
            "--month",
            "all",
            "--day",
            "all",
        ])
        .write_stdin("yes\nyes\nyes\nno\n")
        .assert()
        .success()
        .stdout(contains("Start Station"))
        .stdout(contains("2017-06-05 08:00:00"))
        .stdout(contains("2017-05-02 17:45:00"))
        .stdout(contains("2017-01-09 22:30:00"));
}

#[test]
fn restart_runs_a_second_cycle() {
    bks()
        .args([
            "--data-dir",
            &data_dir(),
            "--city",
            "chicago",
            "--month",
            "all",
            "--day",
            "all",
        ])
        .write_stdin("no\nyes\nwashington\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("no gender data"));
}

#[test]
fn closed_stdin_ends_the_session_cleanly() {
    // EOF at a yes/no prompt counts as "no".
    bks()
        .args([
            "--data-dir",
            &data_dir(),
            "--city",
            "washington",
            "--month",
            "all",
            "--day",
            "all",
        ])
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn closed_stdin_at_a_filter_prompt_is_an_error() {
    bks()
        .args(["--data-dir", &data_dir()])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("Input stream closed"));
}

#[test]
fn missing_data_file_terminates_with_an_error() {
    bks()
        .args([
            "--data-dir",
            "/definitely/not/here",
            "--city",
            "chicago",
            "--month",
            "all",
            "--day",
            "all",
        ])
        .assert()
        .failure()
        .stderr(contains("Data file not found"));
}
