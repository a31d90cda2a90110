// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-integer calendar settings handed to the simulation engine.

use crate::resolved::ResolvedPeriods;
use serde::{Deserialize, Serialize};
use simcal_domain::{DaylightSavingPeriod, RunPeriod};

/// Run period as four integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngineRunPeriod {
    /// Begin month.
    pub begin_month: u8,
    /// Begin day of month.
    pub begin_day_of_month: u8,
    /// End month.
    pub end_month: u8,
    /// End day of month.
    pub end_day_of_month: u8,
}

impl From<RunPeriod> for EngineRunPeriod {
    fn from(period: RunPeriod) -> Self {
        Self {
            begin_month: period.begin().month(),
            begin_day_of_month: period.begin().day(),
            end_month: period.end().month(),
            end_day_of_month: period.end().day(),
        }
    }
}

/// Daylight saving as four integers, or an explicit marker that there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DaylightSavingConfig {
    /// The engine must not apply a clock offset.
    NoDaylightSaving,
    /// The engine applies a one-hour offset between these dates.
    Observed {
        /// Start month.
        start_month: u8,
        /// Start day of month.
        start_day_of_month: u8,
        /// End month.
        end_month: u8,
        /// End day of month.
        end_day_of_month: u8,
    },
}

impl From<Option<DaylightSavingPeriod>> for DaylightSavingConfig {
    fn from(period: Option<DaylightSavingPeriod>) -> Self {
        period.map_or(Self::NoDaylightSaving, |period| Self::Observed {
            start_month: period.begin().month(),
            start_day_of_month: period.begin().day(),
            end_month: period.end().month(),
            end_day_of_month: period.end().day(),
        })
    }
}

/// Everything the engine configuration layer needs from a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngineCalendarConfig {
    /// Calendar year for weekday alignment.
    pub calendar_year: i32,
    /// Whether Feb 29 is simulated.
    pub is_leap_year: bool,
    /// Number of hourly timesteps in the run period.
    pub num_hours: u32,
    /// The run period.
    pub run_period: EngineRunPeriod,
    /// The daylight saving setting.
    pub daylight_saving: DaylightSavingConfig,
}

impl ResolvedPeriods {
    /// Flattens the resolved periods into engine settings.
    #[must_use]
    pub fn to_engine_config(&self) -> EngineCalendarConfig {
        EngineCalendarConfig {
            calendar_year: self.calendar_year.year(),
            is_leap_year: self.calendar_year.is_leap_year(),
            num_hours: self.num_hours(),
            run_period: EngineRunPeriod::from(self.run_period),
            daylight_saving: DaylightSavingConfig::from(self.daylight_saving),
        }
    }
}
