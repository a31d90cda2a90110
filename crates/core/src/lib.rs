// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod output;
mod reconcile;
mod request;
mod resolve;
mod resolved;
mod weather;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::CoreError;
pub use output::{DaylightSavingConfig, EngineCalendarConfig, EngineRunPeriod};
pub use reconcile::{DEFAULT_CALENDAR_YEAR, build_request, resolve_calendar};
pub use request::{BuildingCalendar, DstMode, MonthDayRange, PeriodRequest};
pub use resolve::resolve_periods;
pub use resolved::ResolvedPeriods;
pub use weather::WeatherMetadata;

pub use simcal_domain::{
    CalendarError, CalendarYear, DateDay, DaylightSavingPeriod, RunPeriod, days_per_month,
    days_per_year, hours_per_year,
};
