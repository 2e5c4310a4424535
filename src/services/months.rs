//! Month range generation for the month picker
//!
//! Produces ordered, inclusive sequences of [`MonthDescriptor`]s, either
//! between two fixed dates or as a window around the current month.

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::config::Settings;
use crate::error::{PocketError, PocketResult};
use crate::models::{Language, MonthDescriptor};

/// Generate one descriptor per calendar month from `start` to `end`, inclusive
///
/// Only the year and month of the boundaries matter. Fails with
/// [`PocketError::InvalidRange`] if `start` falls in a later month than `end`.
pub fn generate_months(
    start: NaiveDate,
    end: NaiveDate,
    language: Language,
) -> PocketResult<Vec<MonthDescriptor>> {
    let first = first_of_month(start);
    let last = first_of_month(end);

    if first > last {
        return Err(PocketError::InvalidRange { start, end });
    }

    let mut months = Vec::new();
    let mut current = first;
    while current <= last {
        months.push(describe(months.len(), current, language));
        match current.checked_add_months(Months::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }

    Ok(months)
}

/// Generate `back + forward + 1` months centred on the month of `today`
///
/// The month containing `today` is at index `back`.
pub fn month_window(
    back: u32,
    forward: u32,
    today: NaiveDate,
    language: Language,
) -> PocketResult<Vec<MonthDescriptor>> {
    let anchor = first_of_month(today);
    let out_of_range =
        || PocketError::Validation(format!("Month window {}/{} is out of range", back, forward));

    let start = anchor
        .checked_sub_months(Months::new(back))
        .ok_or_else(out_of_range)?;
    let end = anchor
        .checked_add_months(Months::new(forward))
        .ok_or_else(out_of_range)?;

    generate_months(start, end, language)
}

/// Window around the current local month
pub fn current_month_window(
    back: u32,
    forward: u32,
    language: Language,
) -> PocketResult<Vec<MonthDescriptor>> {
    month_window(back, forward, Local::now().date_naive(), language)
}

/// Find the position of the descriptor containing `date`
pub fn month_index(months: &[MonthDescriptor], date: NaiveDate) -> Option<usize> {
    months.iter().position(|m| m.contains(date))
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn describe(id: usize, date: NaiveDate, language: Language) -> MonthDescriptor {
    MonthDescriptor {
        id,
        date,
        name: language
            .month_name(date.month())
            .unwrap_or_default()
            .to_string(),
        year: date.year(),
    }
}

/// Month picker driven by the configured window size
pub struct MonthService<'a> {
    settings: &'a Settings,
}

impl<'a> MonthService<'a> {
    /// Create a new month service
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Months for the picker around `today`, with the index of today's month
    pub fn picker(
        &self,
        today: NaiveDate,
        language: Language,
    ) -> PocketResult<(Vec<MonthDescriptor>, usize)> {
        let back = self.settings.month_window_back;
        let months = month_window(back, self.settings.month_window_forward, today, language)?;
        Ok((months, back as usize))
    }

    /// Parse a month argument such as "2024-06", "2024-06-15" or "current"
    pub fn parse_month(&self, s: &str) -> PocketResult<NaiveDate> {
        let s = s.trim();
        if matches!(s.to_lowercase().as_str(), "current" | "now" | "this") {
            return Ok(first_of_month(Local::now().date_naive()));
        }

        NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
            .map(first_of_month)
            .map_err(|_| PocketError::Validation(format!("Invalid month format: {}", s)))
    }
}
