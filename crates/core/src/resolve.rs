// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::request::{DstMode, MonthDayRange, PeriodRequest};
use crate::resolved::ResolvedPeriods;
use simcal_domain::{
    CalendarError, CalendarYear, DateDay, DaylightSavingPeriod, RunPeriod,
    default_daylight_saving_period, days_per_month,
};
use tracing::debug;

/// Resolves the run period and daylight saving window for one simulation.
///
/// # Arguments
///
/// * `request` - The year, leap state, optional run window and DST mode
///
/// # Returns
///
/// * `Ok(ResolvedPeriods)` when every date is valid for the leap state
/// * `Err(CoreError)` on the first invalid value
///
/// # Errors
///
/// Returns an error if:
/// - A run period or explicit DST date does not exist in the year
/// - The run period ends before it begins
/// - The year cannot be used for weekday arithmetic (default DST only)
pub fn resolve_periods(request: &PeriodRequest) -> Result<ResolvedPeriods, CoreError> {
    let calendar_year: CalendarYear = CalendarYear::new(request.year, request.is_leap_year);

    let run_period: RunPeriod = resolve_run_period(request.run_period, request.is_leap_year)?;
    let daylight_saving: Option<DaylightSavingPeriod> =
        resolve_daylight_saving(request.daylight_saving, calendar_year)?;

    debug!(
        year = calendar_year.year(),
        is_leap_year = calendar_year.is_leap_year(),
        run_begin = %run_period.begin(),
        run_end = %run_period.end(),
        dst = ?daylight_saving,
        "resolved simulation periods"
    );

    Ok(ResolvedPeriods {
        calendar_year,
        run_period,
        daylight_saving,
    })
}

/// Resolves the run period, defaulting to the full year.
fn resolve_run_period(
    run_period: Option<MonthDayRange>,
    is_leap_year: bool,
) -> Result<RunPeriod, CalendarError> {
    let Some(range) = run_period else {
        // Defaults go through the same day-count validation as overrides
        let last_day: u8 = days_per_month(is_leap_year)[11];
        let begin: DateDay = DateDay::new(1, 1, is_leap_year)?;
        let end: DateDay = DateDay::new(12, last_day, is_leap_year)?;
        return RunPeriod::new(begin, end);
    };

    let (begin, end): (DateDay, DateDay) = range.to_dates(is_leap_year)?;
    RunPeriod::new(begin, end)
}

fn resolve_daylight_saving(
    mode: DstMode,
    calendar_year: CalendarYear,
) -> Result<Option<DaylightSavingPeriod>, CalendarError> {
    match mode {
        DstMode::Disabled => Ok(None),
        DstMode::DefaultSchedule => default_daylight_saving_period(calendar_year.year()).map(Some),
        DstMode::ExplicitSchedule(range) => {
            let (begin, end): (DateDay, DateDay) = range.to_dates(calendar_year.is_leap_year())?;
            Ok(Some(DaylightSavingPeriod::new(begin, end)))
        }
    }
}
