//! Date utilities: recurrence dates, month bounds and the due-soon window.

use anyhow::Result;
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};
use chrono_tz::Tz;

/// Width of the due-soon window, inclusive of both ends.
pub const DUE_SOON_DAYS: u64 = 3;

/// Day of month a bill actually falls on. Missing and 0 both mean the 1st.
pub fn effective_day(day: Option<u32>) -> u32 {
    match day {
        Some(d) if d > 0 => d,
        _ => 1,
    }
}

/// First day of the reference date's month.
pub fn start_of_month(reference: NaiveDate) -> NaiveDate {
    reference - Days::new(u64::from(reference.day0()))
}

/// Last day of the reference date's month.
pub fn end_of_month(reference: NaiveDate) -> NaiveDate {
    start_of_month(reference)
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Inclusive `(start, end)` of the reference date's month.
pub fn month_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    (start_of_month(reference), end_of_month(reference))
}

/// Inclusive `(today, today + DUE_SOON_DAYS)`.
pub fn due_soon_window(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = reference
        .checked_add_days(Days::new(DUE_SOON_DAYS))
        .unwrap_or(NaiveDate::MAX);
    (reference, end)
}

/// Date a bill recurs on in the reference month.
///
/// Days past the end of the month carry into the next one: day 31 in
/// June lands on 1 July rather than being clamped to 30 June.
pub fn recurrence_date(reference: NaiveDate, day: Option<u32>) -> NaiveDate {
    let offset = u64::from(effective_day(day) - 1);
    start_of_month(reference)
        .checked_add_days(Days::new(offset))
        .unwrap_or(NaiveDate::MAX)
}

/// Calendar date of `now` in an IANA tz like "America/Chicago".
pub fn today_in_tz(now: DateTime<Utc>, tz: &str) -> Result<NaiveDate> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;

    Ok(now.with_timezone(&tz).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_effective_day_defaults() {
        assert_eq!(effective_day(None), 1);
        assert_eq!(effective_day(Some(0)), 1);
        assert_eq!(effective_day(Some(17)), 17);
    }

    #[test]
    fn test_month_bounds_leap_february() {
        assert_eq!(month_bounds(ymd(2024, 2, 14)), (ymd(2024, 2, 1), ymd(2024, 2, 29)));
        assert_eq!(month_bounds(ymd(2023, 12, 31)), (ymd(2023, 12, 1), ymd(2023, 12, 31)));
    }

    #[test]
    fn test_due_soon_window_crosses_month() {
        assert_eq!(due_soon_window(ymd(2024, 6, 29)), (ymd(2024, 6, 29), ymd(2024, 7, 2)));
    }

    #[test]
    fn test_due_soon_window_spans_due_soon_days() {
        let today = ymd(2024, 6, 10);
        let (start, end) = due_soon_window(today);
        assert_eq!(start, today);
        assert_eq!((end - start).num_days(), 3);
        assert_eq!(end, today + Days::new(DUE_SOON_DAYS));
    }

    #[test]
    fn test_recurrence_date_in_month() {
        assert_eq!(recurrence_date(ymd(2024, 6, 10), Some(5)), ymd(2024, 6, 5));
        assert_eq!(recurrence_date(ymd(2024, 6, 10), None), ymd(2024, 6, 1));
    }

    #[test]
    fn test_recurrence_date_overflow_carries() {
        assert_eq!(recurrence_date(ymd(2024, 6, 10), Some(31)), ymd(2024, 7, 1));
        assert_eq!(recurrence_date(ymd(2023, 2, 1), Some(30)), ymd(2023, 3, 2));
        assert_eq!(recurrence_date(ymd(2024, 12, 1), Some(40)), ymd(2025, 1, 9));
    }

    #[test]
    fn test_today_in_chicago() {
        // 03:30 UTC on the 11th is still the evening of the 10th in CDT
        let now = Utc.with_ymd_and_hms(2024, 6, 11, 3, 30, 0).unwrap();
        assert_eq!(today_in_tz(now, "America/Chicago").unwrap(), ymd(2024, 6, 10));
        assert_eq!(today_in_tz(now, "UTC").unwrap(), ymd(2024, 6, 11));
    }

    #[test]
    fn test_invalid_timezone() {
        let err = today_in_tz(Utc::now(), "Mars/Olympus").unwrap_err();
        assert!(err.to_string().contains("invalid timezone"));
    }
}
