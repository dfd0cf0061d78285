use chrono::{Datelike, NaiveDate};

use crate::error::{AppError, AppResult};

/// Length of the default trailing window shown on the monthly charts.
pub const DEFAULT_WINDOW_MONTHS: usize = 12;

/// Upper bound accepted for a requested window length.
pub const MAX_WINDOW_MONTHS: usize = 120;

/// Month bucket key (`YYYY-MM`) of an ISO-like date string.
///
/// Returns `None` when the string is too short to carry a year and month.
pub fn month_key(date: &str) -> Option<&str> {
    date.get(..7)
}

/// Format a date as its `YYYY-MM` month key.
pub fn format_month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn parse_reference_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid reference date '{}'", s)))
}

/// The `count` month keys ending at `reference`'s month, oldest first.
///
/// The walk goes backward from the reference month and crosses year
/// boundaries; the result is sorted ascending, which is chronological for
/// zero-padded keys.
pub fn trailing_months(reference: NaiveDate, count: usize) -> Vec<String> {
    let start = month_start(reference);
    let mut months: Vec<String> = (0..count)
        .map(|offset| format_month(shift_months(start, -(offset as i32))))
        .collect();
    months.sort();
    months
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Move a first-of-month date by `months` (negative goes back).
fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total_months = date.year() * 12 + date.month() as i32 - 1 + months;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    NaiveDate::from_ymd_opt(new_year, new_month, 1).unwrap_or(date)
}
