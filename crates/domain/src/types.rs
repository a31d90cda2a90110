// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::{HOURS_PER_DAY, days_per_month};
use crate::error::CalendarError;
use crate::validation::{validate_date_day, validate_run_period_ordering};
use serde::{Deserialize, Serialize};

/// The calendar year a simulation runs in.
///
/// The leap flag is stored rather than derived so that a weather file
/// without a Feb 29 can be simulated against any year number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarYear {
    /// The year number, used for weekday arithmetic.
    year: i32,
    /// Whether the simulated year contains Feb 29.
    is_leap_year: bool,
}

impl CalendarYear {
    /// Creates a calendar year with an explicit leap state.
    #[must_use]
    pub const fn new(year: i32, is_leap_year: bool) -> Self {
        Self { year, is_leap_year }
    }

    /// Creates a calendar year whose leap state follows the Gregorian rule.
    #[must_use]
    pub const fn from_year(year: i32) -> Self {
        Self {
            year,
            is_leap_year: time::util::is_leap_year(year),
        }
    }

    /// Returns the year number.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns whether this year contains Feb 29.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        self.is_leap_year
    }

    /// Returns the number of days in each month of this year.
    #[must_use]
    pub const fn days_per_month(&self) -> [u8; 12] {
        days_per_month(self.is_leap_year)
    }
}

/// A month/day pair within a single year.
///
/// Field order gives chronological ordering: month first, then day.
/// Deserialized values are checked against a leap year, so Feb 29 is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateDayFields")]
pub struct DateDay {
    /// The month (1..=12).
    month: u8,
    /// The day of month (1..=31).
    day: u8,
}

impl DateDay {
    /// Creates a new `DateDay`, validated against the given leap state.
    ///
    /// # Arguments
    ///
    /// * `month` - The month (1..=12)
    /// * `day` - The day of month
    /// * `is_leap_year` - The leap state to validate against
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidCalendarDate` if the month is out of
    /// range or the day exceeds that month's length.
    pub fn new(month: u8, day: u8, is_leap_year: bool) -> Result<Self, CalendarError> {
        validate_date_day(month, day, is_leap_year)?;
        Ok(Self { month, day })
    }

    /// January 1.
    pub const JANUARY_FIRST: Self = Self { month: 1, day: 1 };

    /// December 31.
    pub const DECEMBER_THIRTY_FIRST: Self = Self { month: 12, day: 31 };

    /// Returns the month (1..=12).
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of month.
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Creates a `DateDay` from a 1-based day of year.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidDayOfYear` if `day_of_year` is zero or
    /// beyond the last day of the year.
    pub fn from_day_of_year(day_of_year: u16, is_leap_year: bool) -> Result<Self, CalendarError> {
        let invalid: CalendarError = CalendarError::InvalidDayOfYear {
            day_of_year,
            is_leap_year,
        };
        if day_of_year == 0 {
            return Err(invalid);
        }

        let mut remaining: u16 = day_of_year;
        for (month, length) in (1_u8..).zip(days_per_month(is_leap_year)) {
            let length: u16 = u16::from(length);
            if remaining <= length {
                let day: u8 = u8::try_from(remaining).map_err(|_| invalid)?;
                return Ok(Self { month, day });
            }
            remaining -= length;
        }

        Err(invalid)
    }

    /// Returns the 1-based day of year of this date.
    #[must_use]
    pub fn day_of_year(&self, is_leap_year: bool) -> u16 {
        let preceding: u16 = days_per_month(is_leap_year)
            .iter()
            .take(usize::from(self.month.saturating_sub(1)))
            .map(|&d| u16::from(d))
            .sum();
        preceding + u16::from(self.day)
    }
}

/// Unvalidated wire form of [`DateDay`].
#[derive(Deserialize)]
struct DateDayFields {
    month: u8,
    day: u8,
}

impl TryFrom<DateDayFields> for DateDay {
    type Error = CalendarError;

    fn try_from(fields: DateDayFields) -> Result<Self, Self::Error> {
        Self::new(fields.month, fields.day, true)
    }
}

impl std::fmt::Display for DateDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.day)
    }
}

impl From<time::Date> for DateDay {
    fn from(date: time::Date) -> Self {
        Self {
            month: u8::from(date.month()),
            day: date.day(),
        }
    }
}

/// The calendar window over which the simulation engine runs.
///
/// `begin <= end` always holds; windows never wrap past Dec 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RunPeriodFields")]
pub struct RunPeriod {
    /// First simulated day (inclusive).
    begin: DateDay,
    /// Last simulated day (inclusive).
    end: DateDay,
}

impl RunPeriod {
    /// Creates a run period from two validated dates.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidRunPeriodOrdering` if `end` is before `begin`.
    pub fn new(begin: DateDay, end: DateDay) -> Result<Self, CalendarError> {
        validate_run_period_ordering(begin, end)?;
        Ok(Self { begin, end })
    }

    /// The full calendar year, Jan 1 through Dec 31.
    #[must_use]
    pub const fn full_year() -> Self {
        Self {
            begin: DateDay::JANUARY_FIRST,
            end: DateDay::DECEMBER_THIRTY_FIRST,
        }
    }

    /// Returns the first simulated day.
    #[must_use]
    pub const fn begin(&self) -> DateDay {
        self.begin
    }

    /// Returns the last simulated day.
    #[must_use]
    pub const fn end(&self) -> DateDay {
        self.end
    }

    /// Returns whether this period covers the whole year.
    #[must_use]
    pub fn is_full_year(&self) -> bool {
        *self == Self::full_year()
    }

    /// Returns the number of simulated days, both ends inclusive.
    #[must_use]
    pub fn num_days(&self, is_leap_year: bool) -> u16 {
        self.end.day_of_year(is_leap_year) - self.begin.day_of_year(is_leap_year) + 1
    }

    /// Returns the number of simulated hours.
    #[must_use]
    pub fn num_hours(&self, is_leap_year: bool) -> u32 {
        u32::from(self.num_days(is_leap_year)) * u32::from(HOURS_PER_DAY)
    }
}

/// Unvalidated wire form of [`RunPeriod`].
#[derive(Deserialize)]
struct RunPeriodFields {
    begin: DateDay,
    end: DateDay,
}

impl TryFrom<RunPeriodFields> for RunPeriod {
    type Error = CalendarError;

    fn try_from(fields: RunPeriodFields) -> Result<Self, Self::Error> {
        Self::new(fields.begin, fields.end)
    }
}

/// The window during which the engine applies a one-hour clock offset.
///
/// No ordering is imposed; observed-year windows are kept exactly as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DaylightSavingPeriod {
    /// Day the offset starts.
    begin: DateDay,
    /// Day the offset ends.
    end: DateDay,
}

impl DaylightSavingPeriod {
    /// Creates a daylight saving period from two validated dates.
    #[must_use]
    pub const fn new(begin: DateDay, end: DateDay) -> Self {
        Self { begin, end }
    }

    /// Returns the day the offset starts.
    #[must_use]
    pub const fn begin(&self) -> DateDay {
        self.begin
    }

    /// Returns the day the offset ends.
    #[must_use]
    pub const fn end(&self) -> DateDay {
        self.end
    }
}
