//! Observation date selector

use crate::error::{DataCommonsError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const LATEST: &str = "LATEST";

/// Which observation date to request
///
/// `Latest` asks the API for the most recent observation per facet; a
/// `Date` is forwarded verbatim after validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateSelector {
    #[default]
    Latest,
    Date(String),
}

impl DateSelector {
    /// Wire form sent as the `date` query parameter
    pub fn as_query_value(&self) -> &str {
        match self {
            Self::Latest => LATEST,
            Self::Date(date) => date,
        }
    }
}

impl FromStr for DateSelector {
    type Err = DataCommonsError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(LATEST) {
            return Ok(Self::Latest);
        }

        if calendar_date(s).is_some() {
            Ok(Self::Date(s.to_string()))
        } else {
            Err(DataCommonsError::InvalidDate(s.to_string()))
        }
    }
}

/// Parse `YYYY`, `YYYY-MM` or `YYYY-MM-DD` as a date in year 1 or later
fn calendar_date(s: &str) -> Option<NaiveDate> {
    let full = match s.len() {
        4 => format!("{s}-01-01"),
        7 => format!("{s}-01"),
        10 => s.to_string(),
        _ => return None,
    };
    if !s.bytes().take(4).all(|b| b.is_ascii_digit()) {
        return None;
    }

    NaiveDate::parse_from_str(&full, "%Y-%m-%d")
        .ok()
        .filter(|date| date.year() >= 1)
}

impl fmt::Display for DateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl Serialize for DateSelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_query_value())
    }
}

impl<'de> Deserialize<'de> for DateSelector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
