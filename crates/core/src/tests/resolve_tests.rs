// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for run period and daylight saving resolution.

use crate::{
    CalendarError, CoreError, DateDay, DaylightSavingPeriod, DstMode, MonthDayRange,
    PeriodRequest, ResolvedPeriods, RunPeriod, resolve_periods,
};

use super::helpers::create_test_request;

#[test]
fn test_default_run_period_is_full_year_regardless_of_leap_year() {
    for is_leap_year in [false, true] {
        let resolved: ResolvedPeriods =
            resolve_periods(&create_test_request(is_leap_year)).unwrap();
        assert_eq!(resolved.run_period, RunPeriod::full_year());
        assert_eq!(resolved.run_period.begin(), DateDay::new(1, 1, false).unwrap());
        assert_eq!(resolved.run_period.end(), DateDay::new(12, 31, false).unwrap());
    }
}

#[test]
fn test_default_run_period_hours() {
    let resolved: ResolvedPeriods = resolve_periods(&create_test_request(false)).unwrap();
    assert_eq!(resolved.num_hours(), 8760);

    let resolved: ResolvedPeriods = resolve_periods(&create_test_request(true)).unwrap();
    assert_eq!(resolved.num_hours(), 8784);
}

#[test]
fn test_one_month_override_is_independent_of_leap_year() {
    for is_leap_year in [false, true] {
        let request: PeriodRequest = PeriodRequest {
            run_period: Some(MonthDayRange::new(1, 1, 1, 31)),
            ..create_test_request(is_leap_year)
        };
        let resolved: ResolvedPeriods = resolve_periods(&request).unwrap();
        assert_eq!(resolved.run_period.begin(), DateDay::new(1, 1, false).unwrap());
        assert_eq!(resolved.run_period.end(), DateDay::new(1, 31, false).unwrap());
        assert_eq!(resolved.num_hours(), 744);
    }
}

#[test]
fn test_override_february_29_requires_leap_year() {
    let request: PeriodRequest = PeriodRequest {
        run_period: Some(MonthDayRange::new(2, 1, 2, 29)),
        ..create_test_request(true)
    };
    let resolved: ResolvedPeriods = resolve_periods(&request).unwrap();
    assert_eq!(resolved.num_hours(), 29 * 24);

    let request: PeriodRequest = PeriodRequest {
        is_leap_year: false,
        ..request
    };
    assert_eq!(
        resolve_periods(&request),
        Err(CoreError::Calendar(CalendarError::InvalidCalendarDate {
            month: 2,
            day: 29,
            is_leap_year: false,
        }))
    );
}

#[test]
fn test_override_invalid_day_fails_regardless_of_leap_year() {
    for is_leap_year in [false, true] {
        let request: PeriodRequest = PeriodRequest {
            run_period: Some(MonthDayRange::new(4, 1, 4, 31)),
            ..create_test_request(is_leap_year)
        };
        let result: Result<ResolvedPeriods, CoreError> = resolve_periods(&request);
        assert!(matches!(
            result,
            Err(CoreError::Calendar(CalendarError::InvalidCalendarDate {
                month: 4,
                day: 31,
                ..
            }))
        ));
    }
}

#[test]
fn test_override_end_before_begin_fails() {
    let request: PeriodRequest = PeriodRequest {
        run_period: Some(MonthDayRange::new(12, 1, 1, 31)),
        ..create_test_request(false)
    };
    let result: Result<ResolvedPeriods, CoreError> = resolve_periods(&request);
    assert!(matches!(
        result,
        Err(CoreError::Calendar(
            CalendarError::InvalidRunPeriodOrdering { .. }
        ))
    ));
}

#[test]
fn test_override_single_day_is_allowed() {
    let request: PeriodRequest = PeriodRequest {
        run_period: Some(MonthDayRange::new(7, 4, 7, 4)),
        ..create_test_request(false)
    };
    let resolved: ResolvedPeriods = resolve_periods(&request).unwrap();
    assert_eq!(resolved.num_hours(), 24);
}

#[test]
fn test_default_daylight_saving_for_reference_year() {
    let resolved: ResolvedPeriods = resolve_periods(&create_test_request(false)).unwrap();
    let dst: DaylightSavingPeriod = resolved.daylight_saving.unwrap();
    assert_eq!((dst.begin().month(), dst.begin().day()), (3, 11));
    assert_eq!((dst.end().month(), dst.end().day()), (11, 4));
}

#[test]
fn test_default_daylight_saving_follows_year() {
    let request: PeriodRequest = PeriodRequest {
        year: 2021,
        ..create_test_request(false)
    };
    let resolved: ResolvedPeriods = resolve_periods(&request).unwrap();
    let dst: DaylightSavingPeriod = resolved.daylight_saving.unwrap();
    assert_eq!((dst.begin().month(), dst.begin().day()), (3, 14));
    assert_eq!((dst.end().month(), dst.end().day()), (11, 7));
}

#[test]
fn test_explicit_daylight_saving_is_passed_through() {
    let request: PeriodRequest = PeriodRequest {
        year: 2012,
        is_leap_year: true,
        run_period: None,
        daylight_saving: DstMode::ExplicitSchedule(MonthDayRange::new(3, 12, 11, 6)),
    };
    let resolved: ResolvedPeriods = resolve_periods(&request).unwrap();
    let dst: DaylightSavingPeriod = resolved.daylight_saving.unwrap();
    assert_eq!((dst.begin().month(), dst.begin().day()), (3, 12));
    assert_eq!((dst.end().month(), dst.end().day()), (11, 6));
}

#[test]
fn test_explicit_daylight_saving_is_validated() {
    let request: PeriodRequest = PeriodRequest {
        daylight_saving: DstMode::ExplicitSchedule(MonthDayRange::new(3, 12, 11, 31)),
        ..create_test_request(false)
    };
    assert_eq!(
        resolve_periods(&request),
        Err(CoreError::Calendar(CalendarError::InvalidCalendarDate {
            month: 11,
            day: 31,
            is_leap_year: false,
        }))
    );
}

#[test]
fn test_invalid_daylight_saving_fails_whole_resolution() {
    // A valid run period does not produce a partial result
    let request: PeriodRequest = PeriodRequest {
        run_period: Some(MonthDayRange::new(1, 1, 1, 31)),
        daylight_saving: DstMode::ExplicitSchedule(MonthDayRange::new(2, 30, 11, 1)),
        ..create_test_request(true)
    };
    assert!(resolve_periods(&request).is_err());
}

#[test]
fn test_disabled_daylight_saving_is_absent() {
    let request: PeriodRequest = PeriodRequest {
        daylight_saving: DstMode::Disabled,
        ..create_test_request(false)
    };
    let resolved: ResolvedPeriods = resolve_periods(&request).unwrap();
    assert_eq!(resolved.daylight_saving, None);
}

#[test]
fn test_resolution_is_idempotent() {
    let request: PeriodRequest = PeriodRequest {
        run_period: Some(MonthDayRange::new(6, 1, 8, 31)),
        ..create_test_request(false)
    };
    let first: ResolvedPeriods = resolve_periods(&request).unwrap();
    let second: ResolvedPeriods = resolve_periods(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_default_year_out_of_range_fails() {
    let request: PeriodRequest = PeriodRequest {
        year: 100_000,
        ..create_test_request(false)
    };
    assert_eq!(
        resolve_periods(&request),
        Err(CoreError::Calendar(CalendarError::InvalidYear { year: 100_000 }))
    );
}

#[test]
fn test_resolved_periods_deserialize_rejects_reversed_run_period() {
    let json: &str = r#"{
        "calendar_year": {"year": 2007, "is_leap_year": false},
        "run_period": {"begin": {"month": 6, "day": 30}, "end": {"month": 6, "day": 1}},
        "daylight_saving": null
    }"#;
    let result: Result<ResolvedPeriods, serde_json::Error> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_resolved_periods_deserializes_resolved_output() {
    let resolved: ResolvedPeriods = resolve_periods(&create_test_request(false)).unwrap();
    let json: String = serde_json::to_string(&resolved).unwrap();
    let back: ResolvedPeriods = serde_json::from_str(&json).unwrap();
    assert_eq!(back, resolved);
    assert_eq!(back.num_hours(), 8760);
}
