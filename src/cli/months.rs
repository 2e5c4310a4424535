//! Month picker command

use chrono::Local;

use crate::config::Settings;
use crate::display::month::format_month_list;
use crate::error::PocketResult;
use crate::models::Language;
use crate::services::{month_window, MonthService};

/// Print the month window around today, marking the current month
///
/// `back` and `forward` override the configured window when given.
pub fn handle_months(
    settings: &Settings,
    language: Language,
    back: Option<u32>,
    forward: Option<u32>,
) -> PocketResult<()> {
    let today = Local::now().date_naive();

    let (months, selected) = match (back, forward) {
        (None, None) => MonthService::new(settings).picker(today, language)?,
        (back, forward) => {
            let back = back.unwrap_or(settings.month_window_back);
            let forward = forward.unwrap_or(settings.month_window_forward);
            (month_window(back, forward, today, language)?, back as usize)
        }
    };

    print!("{}", format_month_list(&months, selected));
    Ok(())
}
