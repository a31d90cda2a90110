// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use simcal_domain::{CalendarError, DateDay};

/// A begin/end pair of month and day integers, as supplied by collaborators.
///
/// Values are unchecked until resolved against a leap state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthDayRange {
    /// Begin month (1..=12).
    pub begin_month: u8,
    /// Begin day of month.
    pub begin_day: u8,
    /// End month (1..=12).
    pub end_month: u8,
    /// End day of month.
    pub end_day: u8,
}

impl MonthDayRange {
    /// Creates a new range from four integers.
    #[must_use]
    pub const fn new(begin_month: u8, begin_day: u8, end_month: u8, end_day: u8) -> Self {
        Self {
            begin_month,
            begin_day,
            end_month,
            end_day,
        }
    }

    /// Validates both ends against a leap state.
    ///
    /// Begin is checked before end, so the first invalid date is reported.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidCalendarDate` for the first invalid end.
    pub fn to_dates(self, is_leap_year: bool) -> Result<(DateDay, DateDay), CalendarError> {
        let begin: DateDay = DateDay::new(self.begin_month, self.begin_day, is_leap_year)?;
        let end: DateDay = DateDay::new(self.end_month, self.end_day, is_leap_year)?;
        Ok((begin, end))
    }
}

/// How daylight saving should be applied to a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DstMode {
    /// No clock offset is applied.
    Disabled,
    /// The standard rule, recomputed for the calendar year.
    #[default]
    DefaultSchedule,
    /// Dates supplied by the caller, typically observed in an actual-year weather record.
    ExplicitSchedule(MonthDayRange),
}

/// The inputs to period resolution, as data only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The calendar year. Only used for weekday arithmetic.
    pub year: i32,
    /// Whether the simulated year contains Feb 29.
    pub is_leap_year: bool,
    /// Optional sub-year run window. `None` runs the whole year.
    pub run_period: Option<MonthDayRange>,
    /// Daylight saving mode.
    pub daylight_saving: DstMode,
}

/// Calendar settings taken from the building description.
///
/// Every field is optional in the source document; absent values fall back
/// to the weather file and then to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingCalendar {
    /// Explicit calendar year override.
    pub calendar_year: Option<i32>,
    /// Explicit run period.
    pub run_period: Option<MonthDayRange>,
    /// Whether daylight saving is observed at all.
    pub daylight_saving_enabled: bool,
    /// Explicit daylight saving dates.
    pub daylight_saving_period: Option<MonthDayRange>,
}

impl Default for BuildingCalendar {
    fn default() -> Self {
        Self {
            calendar_year: None,
            run_period: None,
            daylight_saving_enabled: true,
            daylight_saving_period: None,
        }
    }
}
