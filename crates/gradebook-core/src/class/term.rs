//! Grading terms and YYYYMMDD dates

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// chrono format for the fixed-width dates used in class and gradebook files
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Length of a YYYYMMDD date
pub const DATE_LEN: usize = 8;

/// A grading period, such as a quarter or a semester.
///
/// Both bounds are YYYYMMDD strings. Because the format is fixed-width and
/// zero-padded, string order is date order, and all comparisons stay on the
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub start: String,
    pub end: String,
}

impl Term {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Whether `date` falls within the term, inclusive at both ends
    pub fn includes(&self, date: &str) -> bool {
        self.start.as_str() <= date && date <= self.end.as_str()
    }
}

/// Parse a YYYYMMDD string into a calendar date.
///
/// chrono alone accepts signed and short years, so the fixed shape is
/// checked first.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != DATE_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

pub fn is_valid_date(s: &str) -> bool {
    parse_date(s).is_some()
}

/// Today's local date as YYYYMMDD
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}
