#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::PathBuf;

pub fn bks() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Path of the fixture CSV directory shipped with the tests.
pub fn data_dir() -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.to_string_lossy().to_string()
}

/// Config pointing at the fixture directory, for library-level tests.
pub fn test_config() -> bikeshare::config::Config {
    bikeshare::config::Config {
        data_dir: data_dir(),
        ..Default::default()
    }
}
