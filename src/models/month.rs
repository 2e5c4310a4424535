//! Month descriptor shown by the month picker

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One calendar month in a generated range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDescriptor {
    /// Zero-based position in the generated sequence
    pub id: usize,

    /// First day of the month
    pub date: NaiveDate,

    /// Lowercase, localized month name
    pub name: String,

    pub year: i32,
}

impl MonthDescriptor {
    /// Midnight on the first day of the month
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(chrono::NaiveTime::MIN)
    }

    /// Check whether a date falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.date.month()
    }
}

impl fmt::Display for MonthDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.year)
    }
}
