// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reconciles the building description with the weather file's calendar.
//!
//! ## Precedence
//!
//! - Year: actual-year weather data, then the building's calendar year,
//!   then [`DEFAULT_CALENDAR_YEAR`]
//! - Leap state: always the weather data's; a leap file in a non-leap year
//!   is rejected
//! - Daylight saving: disabled by the building, then building dates, then
//!   weather dates, then the default schedule

use crate::error::CoreError;
use crate::request::{BuildingCalendar, DstMode, PeriodRequest};
use crate::resolve::resolve_periods;
use crate::resolved::ResolvedPeriods;
use crate::weather::WeatherMetadata;
use simcal_domain::CalendarYear;
use tracing::warn;

/// The calendar year used when neither input supplies one.
///
/// Its default daylight saving window is 3/11 through 11/4.
pub const DEFAULT_CALENDAR_YEAR: i32 = 2007;

/// Builds a period request from the building and weather inputs.
///
/// # Arguments
///
/// * `building` - Calendar settings from the building description
/// * `weather` - Calendar metadata from the weather file
///
/// # Errors
///
/// Returns `CoreError::LeapYearMismatch` if the weather data contains Feb 29
/// but the chosen year is not a leap year.
pub fn build_request(
    building: &BuildingCalendar,
    weather: &WeatherMetadata,
) -> Result<PeriodRequest, CoreError> {
    let year: i32 = select_year(building, weather);

    let is_gregorian_leap: bool = CalendarYear::from_year(year).is_leap_year();
    if weather.is_leap_year && !is_gregorian_leap {
        return Err(CoreError::LeapYearMismatch { year });
    }
    if is_gregorian_leap && !weather.is_leap_year {
        warn!(
            year,
            "calendar year is a leap year but weather data has no Feb 29; simulating 365 days"
        );
    }

    let daylight_saving: DstMode = if building.daylight_saving_enabled {
        building
            .daylight_saving_period
            .or(weather.daylight_saving_period)
            .map_or(DstMode::DefaultSchedule, DstMode::ExplicitSchedule)
    } else {
        DstMode::Disabled
    };

    Ok(PeriodRequest {
        year,
        is_leap_year: weather.is_leap_year,
        run_period: building.run_period,
        daylight_saving,
    })
}

/// Reconciles both inputs and resolves the simulation periods.
///
/// # Errors
///
/// Returns an error if reconciliation fails or any resolved date is invalid.
pub fn resolve_calendar(
    building: &BuildingCalendar,
    weather: &WeatherMetadata,
) -> Result<ResolvedPeriods, CoreError> {
    let request: PeriodRequest = build_request(building, weather)?;
    resolve_periods(&request)
}

fn select_year(building: &BuildingCalendar, weather: &WeatherMetadata) -> i32 {
    match (weather.data_year, building.calendar_year) {
        (Some(data_year), Some(calendar_year)) => {
            if calendar_year != data_year {
                warn!(
                    calendar_year,
                    data_year, "ignoring building calendar year for actual-year weather data"
                );
            }
            data_year
        }
        (Some(data_year), None) => data_year,
        (None, Some(calendar_year)) => calendar_year,
        (None, None) => DEFAULT_CALENDAR_YEAR,
    }
}
