// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leap-year-aware day and hour counting.
//!
//! These are pure, total functions over the leap state. They carry no
//! knowledge of the year number itself; whether a Feb 29 exists is decided
//! by the caller (usually from the weather file).

/// Number of days in each month of a non-leap year, January first.
const NON_LEAP_DAYS_PER_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Hours in a civil day.
pub const HOURS_PER_DAY: u16 = 24;

/// Returns the number of days in each month, January first.
///
/// February has 29 days when `is_leap_year` is true.
#[must_use]
pub const fn days_per_month(is_leap_year: bool) -> [u8; 12] {
    let mut days: [u8; 12] = NON_LEAP_DAYS_PER_MONTH;
    if is_leap_year {
        days[1] += 1;
    }
    days
}

/// Returns the number of days in the given month (1..=12).
///
/// Returns `None` when `month` is outside 1..=12.
#[must_use]
pub const fn days_in_month(month: u8, is_leap_year: bool) -> Option<u8> {
    if month == 0 || month > 12 {
        return None;
    }
    Some(days_per_month(is_leap_year)[(month - 1) as usize])
}

/// Returns the number of days in the year as a float (365.0 or 366.0).
#[must_use]
pub fn days_per_year(is_leap_year: bool) -> f64 {
    let days: u16 = days_per_month(is_leap_year)
        .iter()
        .map(|&d| u16::from(d))
        .sum();
    f64::from(days)
}

/// Returns the number of hours in the year as a float (8760.0 or 8784.0).
#[must_use]
pub fn hours_per_year(is_leap_year: bool) -> f64 {
    days_per_year(is_leap_year) * f64::from(HOURS_PER_DAY)
}
