use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer};

const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// One trip row as it appears in the city CSV files.
///
/// Gender and Birth Year exist only in the Chicago and New York City
/// files; User Type and End Time have blank cells even where the column
/// exists. The leading unnamed index column of the source files is
/// ignored by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Start Time", deserialize_with = "de_timestamp")]
    pub start_time: NaiveDateTime,

    #[serde(rename = "End Time", default, deserialize_with = "de_opt_timestamp")]
    pub end_time: Option<NaiveDateTime>,

    /// Seconds; kept as f64 because the NYC file stores floats.
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,

    #[serde(rename = "Start Station")]
    pub start_station: String,

    #[serde(rename = "End Station")]
    pub end_station: String,

    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,

    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,

    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

impl TripRecord {
    /// Month number (1-12) derived from the start time.
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Title-cased weekday name derived from the start time.
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.start_time.weekday())
    }

    /// Hour of day (0-23) derived from the start time.
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// Literal `<start> + <end>` pair used for the station-combo mode.
    pub fn station_combo(&self) -> String {
        format!("{} + {}", self.start_station, self.end_station)
    }
}

pub fn weekday_name(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn de_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&s, TIMESTAMP_FMT).map_err(serde::de::Error::custom)
}

fn de_opt_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => NaiveDateTime::parse_from_str(&s, TIMESTAMP_FMT)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
