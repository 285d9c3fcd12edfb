// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use thiserror::Error;

/// How far back a requested date may lie.
pub const MAX_LOOKBACK_DAYS: u64 = 365;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Could not parse date \"{0}\".")]
    Unparseable(String),
    #[error("Date must be in the past.")]
    NotInPast,
    #[error("Date must be within the last year.")]
    TooOld,
}

/// Most recent weekday strictly before `today`. Holidays are not considered.
pub fn previous_weekday(today: NaiveDate) -> NaiveDate {
    let mut date = today - Days::new(1);
    while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        date = date - Days::new(1);
    }
    date
}

/// Parses a free-text date relative to `today`.
///
/// Understands `today`, `yesterday`, `tomorrow`, `N days ago`, `N weeks ago`,
/// common calendar layouts and date-times (the time part is dropped).
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, DateError> {
    let trimmed = input.trim();
    let lowered = trimmed.to_lowercase();

    match lowered.as_str() {
        "today" | "now" => return Ok(today),
        "yesterday" => return Ok(today - Days::new(1)),
        "tomorrow" => return Ok(today + Days::new(1)),
        _ => {}
    }

    if let Some(date) = parse_relative(&lowered, today) {
        return Ok(date);
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }

    Err(DateError::Unparseable(input.to_string()))
}

// "3 days ago", "1 week ago"
fn parse_relative(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let mut parts = input.split_whitespace();
    let amount: u64 = parts.next()?.parse().ok()?;
    let unit = parts.next()?;
    if parts.next()? != "ago" || parts.next().is_some() {
        return None;
    }

    let days = match unit {
        "day" | "days" => amount,
        "week" | "weeks" => amount.checked_mul(7)?,
        _ => return None,
    };
    today.checked_sub_days(Days::new(days))
}

/// An explicit date must lie strictly before `today`.
pub fn ensure_in_past(date: NaiveDate, today: NaiveDate) -> Result<(), DateError> {
    if date >= today {
        return Err(DateError::NotInPast);
    }
    Ok(())
}

/// Rejects dates more than [`MAX_LOOKBACK_DAYS`] before `today`.
pub fn ensure_within_last_year(date: NaiveDate, today: NaiveDate) -> Result<(), DateError> {
    match today.checked_sub_days(Days::new(MAX_LOOKBACK_DAYS)) {
        Some(earliest) if date < earliest => Err(DateError::TooOld),
        _ => Ok(()),
    }
}
