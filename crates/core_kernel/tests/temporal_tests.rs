//! Tests for calendar helpers

use chrono::{NaiveDate, TimeZone, Utc};
use core_kernel::{add_days, DateRange, TemporalError, Timezone};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_date_range_rejects_reversed_bounds() {
    let result = DateRange::new(date(2024, 2, 1), date(2024, 1, 1));
    assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
}

#[test]
fn test_single_day_range() {
    let range = DateRange::new(date(2024, 2, 1), date(2024, 2, 1)).unwrap();
    assert_eq!(range.days(), 1);
    assert!(range.contains(date(2024, 2, 1)));
}

#[test]
fn test_service_period_february_non_leap() {
    let period = DateRange::one_month_from(date(2023, 2, 1)).unwrap();
    assert_eq!(period.end, date(2023, 2, 28));
    assert_eq!(period.days(), 28);
}

#[test]
fn test_service_period_mid_month() {
    let period = DateRange::one_month_from(date(2024, 6, 10)).unwrap();
    assert_eq!(period.start, date(2024, 6, 10));
    assert_eq!(period.end, date(2024, 7, 9));
    assert!(!period.contains(date(2024, 7, 10)));
}

#[test]
fn test_add_days() {
    assert_eq!(add_days(date(2024, 12, 30), 0).unwrap(), date(2024, 12, 30));
    assert_eq!(add_days(date(2024, 12, 30), 7).unwrap(), date(2025, 1, 6));
}

#[test]
fn test_timezone_serde_round_trip() {
    let tz: Timezone = serde_json::from_str("\"Asia/Kolkata\"").unwrap();
    assert_eq!(serde_json::to_string(&tz).unwrap(), "\"Asia/Kolkata\"");
}

#[test]
fn test_timezone_local_time() {
    let tz: Timezone = "UTC".parse().unwrap();
    let utc = Utc.with_ymd_and_hms(2024, 5, 1, 23, 30, 0).unwrap();
    assert_eq!(tz.local_date(utc), date(2024, 5, 1));
}
