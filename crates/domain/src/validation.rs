// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::days_in_month;
use crate::error::CalendarError;
use crate::types::DateDay;

/// Validates a month/day pair against a leap state.
///
/// # Arguments
///
/// * `month` - The month (1..=12)
/// * `day` - The day of month
/// * `is_leap_year` - Whether February has 29 days
///
/// # Returns
///
/// * `Ok(())` if the date exists in such a year
/// * `Err(CalendarError::InvalidCalendarDate)` otherwise
///
/// # Errors
///
/// Returns an error if:
/// - The month is not in 1..=12
/// - The day is zero or exceeds the month's day count
pub fn validate_date_day(month: u8, day: u8, is_leap_year: bool) -> Result<(), CalendarError> {
    let invalid: CalendarError = CalendarError::InvalidCalendarDate {
        month,
        day,
        is_leap_year,
    };

    // Rule: month must exist
    let max_day: u8 = days_in_month(month, is_leap_year).ok_or(invalid)?;

    // Rule: day must fall within the month
    if day == 0 || day > max_day {
        return Err(invalid);
    }

    Ok(())
}

/// Validates that a run period does not end before it begins.
///
/// Equal dates are accepted (a single-day run). Wrapping past Dec 31 is
/// not supported, so any end before begin is rejected.
///
/// # Errors
///
/// Returns `CalendarError::InvalidRunPeriodOrdering` if `end < begin`.
pub fn validate_run_period_ordering(begin: DateDay, end: DateDay) -> Result<(), CalendarError> {
    if end < begin {
        return Err(CalendarError::InvalidRunPeriodOrdering { begin, end });
    }
    Ok(())
}
