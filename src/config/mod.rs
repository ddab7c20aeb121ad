use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::models::City;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the city CSV files.
    pub data_dir: String,
    /// Rows revealed per window in the raw-data viewer.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Explicit city → CSV file name mapping, passed into the loader.
    #[serde(default = "default_city_files")]
    pub city_files: BTreeMap<String, String>,
}

fn default_page_size() -> usize {
    5
}

fn default_city_files() -> BTreeMap<String, String> {
    City::ALL
        .iter()
        .map(|c| (c.key().to_string(), c.default_file().to_string()))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: ".".to_string(),
            page_size: default_page_size(),
            city_files: default_city_files(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("bikeshare")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".bikeshare")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikeshare.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed config file falls back to defaults rather than aborting.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Resolve the CSV path for a city through the configured mapping.
    pub fn source_path(&self, city: City) -> PathBuf {
        let file = self
            .city_files
            .get(city.key())
            .map(String::as_str)
            .unwrap_or_else(|| city.default_file());
        PathBuf::from(&self.data_dir).join(file)
    }
}
