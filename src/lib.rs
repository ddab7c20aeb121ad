//! bikeshare library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; apply any data-dir override from the command line.
    let mut cfg = Config::load();
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    // Filter fields given on the command line are validated up front and
    // pre-seed the first session iteration.
    let seed = cli.seed_filters()?;

    core::session::run_session(&cfg, seed)
}
