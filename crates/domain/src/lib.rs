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

mod calendar;
mod daylight_saving;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar::{HOURS_PER_DAY, days_in_month, days_per_month, days_per_year, hours_per_year};
pub use daylight_saving::{default_daylight_saving_period, nth_weekday_of_month};

// Re-export public types
pub use error::CalendarError;
pub use types::{CalendarYear, DateDay, DaylightSavingPeriod, RunPeriod};
pub use validation::{validate_date_day, validate_run_period_ordering};
