//! Date windows for rating queries

use crate::error::{Error, Result};
use chrono::NaiveDate;

/// Date format expected by the ratings API (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// First day of `(year, month)` and first day of the following month
///
/// December rolls over into January of the next year.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_argument(
            "month",
            format!("{month} is not in 1..=12"),
        ));
    }

    let out_of_range = || Error::invalid_argument("year", format!("{year} is out of range"));

    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1).ok_or_else(out_of_range)?, 1)
    } else {
        (year, month + 1)
    };

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(out_of_range)?;

    Ok((start, end))
}

/// Format a date for the API
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `month_bounds` formatted as API date strings
pub fn month_window(year: i32, month: u32) -> Result<(String, String)> {
    let (start, end) = month_bounds(year, month)?;
    Ok((format_date(start), format_date(end)))
}
