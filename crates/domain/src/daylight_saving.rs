// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Default daylight saving schedule.
//!
//! The default follows the US rule in force since 2007:
//! - Clocks go forward on the second Sunday of March
//! - Clocks go back on the first Sunday of November
//!
//! Dates are recomputed for every year from the weekday of the 1st of the
//! month, so the window shifts between years. Weather files recorded in a
//! specific year may observe other dates; those are handled by the caller
//! as an explicit schedule and never pass through here.

use crate::error::CalendarError;
use crate::types::{DateDay, DaylightSavingPeriod};
use time::{Date, Month, Weekday};

/// Returns the date of the `nth` (1-based) occurrence of `weekday` in a month.
///
/// # Errors
///
/// Returns an error if:
/// - The year is outside the range supported by `time`
/// - `nth` is zero or the month has fewer than `nth` such weekdays
pub fn nth_weekday_of_month(
    year: i32,
    month: Month,
    weekday: Weekday,
    nth: u8,
) -> Result<Date, CalendarError> {
    let missing: CalendarError = CalendarError::NoSuchWeekday {
        year,
        month: u8::from(month),
        nth,
    };
    if nth == 0 {
        return Err(missing);
    }

    let first: Date = Date::from_calendar_date(year, month, 1)
        .map_err(|_| CalendarError::InvalidYear { year })?;

    // Days from the 1st to the first matching weekday (0..=6)
    let offset: u8 =
        (7 + weekday.number_days_from_sunday() - first.weekday().number_days_from_sunday()) % 7;
    let day: u8 = 7_u8
        .checked_mul(nth - 1)
        .and_then(|weeks| weeks.checked_add(1 + offset))
        .ok_or(missing)?;

    first.replace_day(day).map_err(|_| missing)
}

/// Computes the default daylight saving period for a year.
///
/// # Arguments
///
/// * `year` - The calendar year, used only for weekday arithmetic
///
/// # Returns
///
/// The period from the second Sunday of March to the first Sunday of November.
///
/// # Errors
///
/// Returns `CalendarError::InvalidYear` if the year cannot be represented.
pub fn default_daylight_saving_period(year: i32) -> Result<DaylightSavingPeriod, CalendarError> {
    let begin: Date = nth_weekday_of_month(year, Month::March, Weekday::Sunday, 2)?;
    let end: Date = nth_weekday_of_month(year, Month::November, Weekday::Sunday, 1)?;
    Ok(DaylightSavingPeriod::new(
        DateDay::from(begin),
        DateDay::from(end),
    ))
}
