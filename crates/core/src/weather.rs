// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar metadata carried by an EPW weather file.
//!
//! Only the header lines that affect the simulation calendar are read:
//!
//! ```text
//! HOLIDAYS/DAYLIGHT SAVINGS,<leap Yes|No>,<dst start>,<dst end>,<holiday count>,...
//! DATA PERIODS,<count>,<records per hour>,<name>,<start weekday>,<start date>,<end date>
//! ```
//!
//! Daylight saving dates are `m/d`, a 1-based day of year, or `0` for none.
//! A record is tied to an actual year when the data period start carries a
//! year (`1/1/2012`) or, failing that, when every hourly row has the same year.

use crate::error::CoreError;
use crate::request::MonthDayRange;
use serde::{Deserialize, Serialize};
use simcal_domain::DateDay;
use tracing::debug;

const HOLIDAYS_HEADER: &str = "HOLIDAYS/DAYLIGHT SAVINGS";
const DATA_PERIODS_HEADER: &str = "DATA PERIODS";

/// Calendar facts reported by the weather file reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherMetadata {
    /// The recorded year for actual-year data, `None` for typical-year data.
    pub data_year: Option<i32>,
    /// Whether the data contains Feb 29.
    pub is_leap_year: bool,
    /// Daylight saving dates observed in the recorded year.
    pub daylight_saving_period: Option<MonthDayRange>,
}

impl WeatherMetadata {
    /// Metadata for a typical-year file: no recorded year, no leap day, no DST dates.
    #[must_use]
    pub const fn typical_year() -> Self {
        Self {
            data_year: None,
            is_leap_year: false,
            daylight_saving_period: None,
        }
    }

    /// Extracts calendar metadata from the text of an EPW file.
    ///
    /// # Arguments
    ///
    /// * `content` - The EPW file contents; data rows are optional
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MalformedWeatherHeader` if:
    /// - Either required header line is missing
    /// - The leap flag is not `Yes` or `No`
    /// - A daylight saving date cannot be parsed, or only one end is given
    /// - The data is not hourly
    /// - A data row does not start with a year
    ///
    /// Returns `CoreError::Calendar` if a day-of-year DST date is out of range.
    pub fn from_epw(content: &str) -> Result<Self, CoreError> {
        let lines: Vec<&str> = content.lines().collect();

        let (_, holidays) = find_header(&lines, HOLIDAYS_HEADER)?;
        let is_leap_year: bool = parse_leap_flag(holidays.get(1).copied())?;
        let daylight_saving_period: Option<MonthDayRange> = parse_daylight_saving(
            holidays.get(2).copied(),
            holidays.get(3).copied(),
            is_leap_year,
        )?;

        let (data_periods_index, data_periods) = find_header(&lines, DATA_PERIODS_HEADER)?;
        check_hourly(data_periods.get(2).copied())?;
        let mut data_year: Option<i32> = data_period_start_year(data_periods.get(5).copied())?;
        if data_year.is_none() {
            data_year = uniform_row_year(&lines[data_periods_index + 1..])?;
        }

        debug!(
            ?data_year,
            is_leap_year,
            dst = ?daylight_saving_period,
            "read weather calendar metadata"
        );

        Ok(Self {
            data_year,
            is_leap_year,
            daylight_saving_period,
        })
    }

    /// Returns whether this data is tied to a specific recorded year.
    #[must_use]
    pub const fn is_actual_year(&self) -> bool {
        self.data_year.is_some()
    }
}

fn malformed(reason: impl Into<String>) -> CoreError {
    CoreError::MalformedWeatherHeader {
        reason: reason.into(),
    }
}

/// Finds a header line by its leading keyword and splits it into trimmed fields.
fn find_header<'a>(lines: &[&'a str], keyword: &str) -> Result<(usize, Vec<&'a str>), CoreError> {
    lines
        .iter()
        .position(|line| line.trim_start().starts_with(keyword))
        .map(|index| (index, lines[index].split(',').map(str::trim).collect()))
        .ok_or_else(|| malformed(format!("missing {keyword} line")))
}

fn parse_leap_flag(field: Option<&str>) -> Result<bool, CoreError> {
    match field {
        Some(value) if value.eq_ignore_ascii_case("yes") => Ok(true),
        Some(value) if value.eq_ignore_ascii_case("no") => Ok(false),
        other => Err(malformed(format!(
            "leap year flag must be Yes or No, got {other:?}"
        ))),
    }
}

fn parse_daylight_saving(
    start: Option<&str>,
    end: Option<&str>,
    is_leap_year: bool,
) -> Result<Option<MonthDayRange>, CoreError> {
    let start: Option<DateDay> = parse_daylight_saving_date(start, is_leap_year)?;
    let end: Option<DateDay> = parse_daylight_saving_date(end, is_leap_year)?;
    match (start, end) {
        (None, None) => Ok(None),
        (Some(begin), Some(end)) => Ok(Some(MonthDayRange::new(
            begin.month(),
            begin.day(),
            end.month(),
            end.day(),
        ))),
        _ => Err(malformed(
            "daylight saving start and end must both be given or both be 0",
        )),
    }
}

fn parse_daylight_saving_date(
    field: Option<&str>,
    is_leap_year: bool,
) -> Result<Option<DateDay>, CoreError> {
    let value: &str = field.unwrap_or("0");
    if value.is_empty() || value == "0" {
        return Ok(None);
    }

    if let Some((month, day)) = value.split_once('/') {
        let month: u8 = parse_number(month, value)?;
        let day: u8 = parse_number(day, value)?;
        return Ok(Some(DateDay::new(month, day, is_leap_year)?));
    }

    let day_of_year: u16 = parse_number(value, value)?;
    Ok(Some(DateDay::from_day_of_year(day_of_year, is_leap_year)?))
}

fn parse_number<T: std::str::FromStr>(text: &str, field: &str) -> Result<T, CoreError> {
    text.trim()
        .parse()
        .map_err(|_| malformed(format!("unsupported date '{field}'")))
}

fn check_hourly(records_per_hour: Option<&str>) -> Result<(), CoreError> {
    match records_per_hour.map(str::parse::<u32>) {
        Some(Ok(1)) => Ok(()),
        Some(Ok(n)) => Err(malformed(format!(
            "only hourly data is supported, got {n} records per hour"
        ))),
        _ => Err(malformed("missing or invalid records per hour")),
    }
}

/// Returns the year in a `m/d/yyyy` data period start, `None` for `m/d`.
fn data_period_start_year(start: Option<&str>) -> Result<Option<i32>, CoreError> {
    let start: &str = start.ok_or_else(|| malformed("missing data period start date"))?;
    let parts: Vec<&str> = start.split('/').collect();
    match parts.as_slice() {
        [_, _] => Ok(None),
        [_, _, year] => parse_number(year, start).map(Some),
        _ => Err(malformed(format!("unsupported data period start '{start}'"))),
    }
}

/// Returns the common year of all data rows, if there is one.
fn uniform_row_year(rows: &[&str]) -> Result<Option<i32>, CoreError> {
    let mut common: Option<i32> = None;
    for row in rows.iter().filter(|row| !row.trim().is_empty()) {
        let field: &str = row.split(',').next().unwrap_or_default();
        let year: i32 = field
            .trim()
            .parse()
            .map_err(|_| malformed(format!("data row does not start with a year: '{row}'")))?;
        match common {
            None => common = Some(year),
            Some(seen) if seen != year => return Ok(None),
            Some(_) => {}
        }
    }
    Ok(common)
}
