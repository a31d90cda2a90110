// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use simcal_domain::{CalendarYear, DaylightSavingPeriod, RunPeriod};

/// The result of a successful period resolution.
///
/// Resolution is atomic: either both periods are valid or nothing is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedPeriods {
    /// The calendar year the periods were resolved against.
    pub calendar_year: CalendarYear,
    /// The simulation run period.
    pub run_period: RunPeriod,
    /// The daylight saving window, or `None` when daylight saving is disabled.
    pub daylight_saving: Option<DaylightSavingPeriod>,
}

impl ResolvedPeriods {
    /// Returns the number of simulated hours in the run period.
    #[must_use]
    pub fn num_hours(&self) -> u32 {
        self.run_period.num_hours(self.calendar_year.is_leap_year())
    }
}
