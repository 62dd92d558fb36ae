// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-date handling.
//!
//! All scheduling logic works at day granularity: a range covers both of
//! its end days completely and there is no time-of-day or offset anywhere.
//! The only wall-clock input is "today", resolved in the office timezone.

use crate::error::DomainError;
use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use time::{Date, Month};

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    /// First day of the range.
    #[serde(with = "crate::iso_date")]
    pub start: Date,
    /// Last day of the range.
    #[serde(with = "crate::iso_date")]
    pub end: Date,
}

impl DateRange {
    /// Creates a new range. A range whose end precedes its start covers no day.
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Returns whether the day falls inside the range, both ends included.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns whether the two ranges share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

/// Parses a date cell in `YYYY-MM-DD` or `DD/MM/YYYY` form.
///
/// A trailing time component (`2026-02-01 00:00:00`) is ignored. Anything
/// else yields `None`, which callers treat as "cannot evaluate".
#[must_use]
pub fn parse_sheet_date(value: &str) -> Option<Date> {
    let token: &str = value.split_whitespace().next()?;

    let (year, month, day): (&str, &str, &str) = if token.contains('-') {
        let mut parts = token.split('-');
        let parsed = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        parsed
    } else if token.contains('/') {
        let mut parts = token.split('/');
        let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        (year, month, day)
    } else {
        return None;
    };

    let year: i32 = year.parse().ok()?;
    let month: Month = Month::try_from(month.parse::<u8>().ok()?).ok()?;
    let day: u8 = day.parse().ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Parses an IANA timezone name such as `Asia/Jayapura`.
///
/// # Errors
///
/// Returns an error if the name is not a known timezone.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.parse()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

/// Returns the current calendar date in the given timezone.
///
/// # Errors
///
/// Returns an error if the wall-clock date cannot be represented.
pub fn today_in(tz: Tz) -> Result<Date, DomainError> {
    let local: NaiveDate = Utc::now().with_timezone(&tz).date_naive();
    naive_to_date(local)
}

fn naive_to_date(date: NaiveDate) -> Result<Date, DomainError> {
    let month: Month = u8::try_from(date.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| DomainError::DateConversion {
            reason: format!("month out of range in {date}"),
        })?;
    let day: u8 = u8::try_from(date.day()).map_err(|_| DomainError::DateConversion {
        reason: format!("day out of range in {date}"),
    })?;

    Date::from_calendar_date(date.year(), month, day).map_err(|e| DomainError::DateConversion {
        reason: e.to_string(),
    })
}

/// How close an assignment is to its last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeadlineStatus {
    /// The last day has passed.
    Finished,
    /// Three or fewer duty days remain, today included.
    EndingSoon,
    /// More than three duty days remain.
    Ongoing,
}

impl DeadlineStatus {
    /// Classifies an end date relative to today.
    #[must_use]
    pub fn from_end_date(end: Date, today: Date) -> Self {
        let remaining_days: i64 = (end - today).whole_days() + 1;
        if remaining_days <= 0 {
            Self::Finished
        } else if remaining_days <= 3 {
            Self::EndingSoon
        } else {
            Self::Ongoing
        }
    }
}
