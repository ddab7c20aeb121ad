//! Duration decomposition helpers used by the duration stats.

use std::fmt;

/// Whole hours / minutes / seconds, largest unit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hms {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Hms {
    /// Floor decomposition of a seconds total. Fractions below the
    /// seconds unit are truncated, not rounded.
    pub fn from_secs(total: f64) -> Self {
        let t = total.floor() as i64;
        Self {
            hours: t / 3600,
            minutes: (t % 3600) / 60,
            seconds: t % 60,
        }
    }

    pub fn total_secs(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hours, {} minutes, {} seconds",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Whole minutes / seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ms {
    pub minutes: i64,
    pub seconds: i64,
}

impl Ms {
    pub fn from_secs(total: f64) -> Self {
        let t = total.floor() as i64;
        Self {
            minutes: t / 60,
            seconds: t % 60,
        }
    }

    pub fn total_secs(&self) -> i64 {
        self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for Ms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes, {} seconds", self.minutes, self.seconds)
    }
}
