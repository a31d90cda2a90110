// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DstMode, MonthDayRange, PeriodRequest, WeatherMetadata};

pub fn create_test_request(is_leap_year: bool) -> PeriodRequest {
    PeriodRequest {
        year: 2007,
        is_leap_year,
        run_period: None,
        daylight_saving: DstMode::DefaultSchedule,
    }
}

pub fn create_actual_year_weather() -> WeatherMetadata {
    WeatherMetadata {
        data_year: Some(2012),
        is_leap_year: true,
        daylight_saving_period: Some(MonthDayRange::new(3, 12, 11, 6)),
    }
}

/// Builds EPW text with the given header fields and data row years.
pub fn create_test_epw(holidays: &str, data_periods: &str, row_years: &[i32]) -> String {
    let mut lines: Vec<String> = vec![
        String::from("LOCATION,Denver Intl Ap,CO,USA,TMY3,725650,39.83,-104.65,-7.0,1650.0"),
        String::from("DESIGN CONDITIONS,0"),
        String::from("TYPICAL/EXTREME PERIODS,0"),
        String::from("GROUND TEMPERATURES,0"),
        format!("HOLIDAYS/DAYLIGHT SAVINGS,{holidays}"),
        String::from("COMMENTS 1,Test data"),
        String::from("COMMENTS 2,"),
        format!("DATA PERIODS,{data_periods}"),
    ];
    for (hour, year) in row_years.iter().enumerate() {
        lines.push(format!(
            "{year},1,1,{},0,?9?9?9?9E0?9?9?9?9?9?9?9?9?9?9?9?9?9?9?9*9*9?9*9,-3.3,-7.8,71",
            hour + 1
        ));
    }
    lines.join("\n")
}
