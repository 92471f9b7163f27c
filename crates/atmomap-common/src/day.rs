//! UTC calendar-day handling.
//!
//! Dates appear in two wire forms: the 8-digit `YYYYMMDD` folder segment
//! used in resource paths, and the hyphenated `YYYY-MM-DD` shown in date
//! controls. Conversion between them is pure string/date work with no
//! locale or timezone shifting.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NaiveDate);

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The current UTC calendar day.
    pub fn today_utc() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Parse the 8-digit folder form, e.g. "20260805".
    pub fn from_folder(s: &str) -> Result<Self, DayParseError> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DayParseError::Invalid(s.to_string()));
        }
        NaiveDate::parse_from_str(s, "%Y%m%d")
            .map(Self)
            .map_err(|_| DayParseError::Invalid(s.to_string()))
    }

    /// Parse the hyphenated form, e.g. "2026-08-05".
    pub fn from_iso(s: &str) -> Result<Self, DayParseError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DayParseError::Invalid(s.to_string()))
    }

    /// 8-digit folder form used in resource paths.
    pub fn folder(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// Hyphenated form used in date controls and legends.
    pub fn iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iso())
    }
}

impl std::str::FromStr for Day {
    type Err = DayParseError;

    /// Accepts either wire form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::from_iso(s).or_else(|_| Day::from_folder(s))
    }
}

// Days serialize as the folder form, matching the producer's JSON.
impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.folder())
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Day::from_folder(&s).map_err(serde::de::Error::custom)
    }
}

/// Convert "YYYY-MM-DD" to the folder form "YYYYMMDD".
pub fn iso_to_folder(iso: &str) -> Result<String, DayParseError> {
    Day::from_iso(iso).map(|d| d.folder())
}

/// Convert the folder form "YYYYMMDD" to "YYYY-MM-DD".
pub fn folder_to_iso(folder: &str) -> Result<String, DayParseError> {
    Day::from_folder(folder).map(|d| d.iso())
}

#[derive(Debug, thiserror::Error)]
pub enum DayParseError {
    #[error("invalid calendar day: {0}")]
    Invalid(String),
}
