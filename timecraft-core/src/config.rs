//! Configuration for the balance calculation

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Calculation settings consumed by [`crate::BalanceCalculator`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Expected working hours per week
    pub expected_per_week: f64,
    /// Minimum hours per day before an alert is raised (weekdays only)
    pub min_daily: f64,
    /// Minimum hours per week before an alert is raised
    pub min_weekly: f64,
    /// Header text of the duration column (exact, case-sensitive)
    pub duration_column: String,
    /// Header text of the date column (exact, case-sensitive)
    pub date_column: String,
    /// Reject rows whose parsed date falls before this year
    pub min_year: Option<i32>,
    /// First day of the week used for bucketing
    #[serde(
        serialize_with = "serialize_weekday",
        deserialize_with = "deserialize_weekday"
    )]
    pub week_start: Weekday,
    /// Decimal places for displayed hour values (negative clamps to 0)
    pub decimals: i64,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            expected_per_week: 40.0,
            min_daily: 0.0,
            min_weekly: 0.0,
            duration_column: String::new(),
            date_column: String::new(),
            min_year: None,
            week_start: Weekday::Mon,
            decimals: 2,
        }
    }
}

impl CalcConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CalcConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check the settings before any processing starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expected_per_week < 0.0 {
            return Err(ConfigError::NegativeExpected(self.expected_per_week));
        }
        if self.min_daily < 0.0 {
            return Err(ConfigError::NegativeMinDaily(self.min_daily));
        }
        if self.min_weekly < 0.0 {
            return Err(ConfigError::NegativeMinWeekly(self.min_weekly));
        }
        if self.duration_column.is_empty() {
            return Err(ConfigError::MissingDurationColumn);
        }
        if self.date_column.is_empty() {
            return Err(ConfigError::MissingDateColumn);
        }
        Ok(())
    }
}

/// Configuration problems that abort the whole run
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("working hours per week must be >= 0, was {0}")]
    NegativeExpected(f64),
    #[error("minimum hours per day must be >= 0, was {0}")]
    NegativeMinDaily(f64),
    #[error("minimum hours per week must be >= 0, was {0}")]
    NegativeMinWeekly(f64),
    #[error("a duration column name must be given")]
    MissingDurationColumn,
    #[error("a date column name must be given")]
    MissingDateColumn,
}

/// Parse a weekday from names like "mon" or "Monday"
pub fn parse_weekday(s: &str) -> Result<Weekday, String> {
    s.parse::<Weekday>()
        .map_err(|_| format!("invalid weekday: {s:?}"))
}

fn serialize_weekday<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&day.to_string())
}

fn deserialize_weekday<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
    let s = String::deserialize(deserializer)?;
    parse_weekday(&s).map_err(serde::de::Error::custom)
}
