// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::DateDay;
use thiserror::Error;

/// Errors that can occur during calendar validation.
///
/// Calendar validity is deterministic, so none of these are retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The month is outside 1..=12 or the day exceeds the month's length.
    #[error("Invalid calendar date {month}/{day} (leap year: {is_leap_year})")]
    InvalidCalendarDate {
        /// The month that was supplied.
        month: u8,
        /// The day of month that was supplied.
        day: u8,
        /// The leap state the date was validated against.
        is_leap_year: bool,
    },
    /// The day of year is zero or beyond the end of the year.
    #[error("Invalid day of year {day_of_year} (leap year: {is_leap_year})")]
    InvalidDayOfYear {
        /// The day of year that was supplied.
        day_of_year: u16,
        /// The leap state the value was validated against.
        is_leap_year: bool,
    },
    /// A run period ends strictly before it begins.
    #[error("Invalid run period: end {end} is before begin {begin}")]
    InvalidRunPeriodOrdering {
        /// The begin date of the rejected period.
        begin: DateDay,
        /// The end date of the rejected period.
        end: DateDay,
    },
    /// The year cannot be represented on the civil calendar.
    #[error("Invalid calendar year: {year}")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },
    /// The requested occurrence of a weekday does not exist in the month.
    #[error("There is no occurrence {nth} of the weekday in {month}/{year}")]
    NoSuchWeekday {
        /// The year searched.
        year: i32,
        /// The month searched.
        month: u8,
        /// The 1-based occurrence that was requested.
        nth: u8,
    },
}
