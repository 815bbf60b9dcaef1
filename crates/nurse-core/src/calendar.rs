//! Date rules for the record date
//!
//! The record date must be strictly earlier than today. "Today" is always
//! passed in by the caller so the rules stay pure.

use chrono::{Datelike, Days, NaiveDate};

use crate::constants::{RECORD_DATE_FORMAT, WEEKDAYS_JA};

/// Latest date the picker allows: the day before `today`
pub fn latest_selectable(today: NaiveDate) -> NaiveDate {
    // Only fails at NaiveDate::MIN, which no clock returns
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}

/// Record date used when the screen opens
pub fn default_record_date(today: NaiveDate) -> NaiveDate {
    latest_selectable(today)
}

pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Format a committed record date as `yyyy/MM/dd`
pub fn format_record_date(date: NaiveDate) -> String {
    date.format(RECORD_DATE_FORMAT).to_string()
}

/// Japanese long form used inside the picker, e.g. `2024年10月15日(火)`
pub fn format_japanese(date: NaiveDate) -> String {
    format!(
        "{}年{}月{}日({})",
        date.year(),
        date.month(),
        date.day(),
        weekday_ja(date)
    )
}

pub fn weekday_ja(date: NaiveDate) -> &'static str {
    WEEKDAYS_JA[date.weekday().num_days_from_sunday() as usize]
}

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}
