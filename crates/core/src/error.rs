// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use simcal_domain::CalendarError;
use thiserror::Error;

/// Errors that can occur while resolving a simulation calendar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A calendar rule was violated.
    #[error("Calendar violation: {0}")]
    Calendar(#[from] CalendarError),
    /// The weather data contains Feb 29 but the calendar year does not.
    #[error("Weather data is flagged as a leap year but {year} is not a leap year")]
    LeapYearMismatch {
        /// The calendar year the weather data was matched against.
        year: i32,
    },
    /// The weather file header could not be interpreted.
    #[error("Malformed weather header: {reason}")]
    MalformedWeatherHeader {
        /// Description of the problem.
        reason: String,
    },
}
