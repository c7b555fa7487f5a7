//! Calendar-aligned aggregation windows
//!
//! Windows are fixed calendar periods in UTC, not sliding durations. Weeks
//! start on Monday 00:00:00 regardless of locale.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

/// Smallest representable step between two timestamps
pub fn tick() -> Duration {
    Duration::nanoseconds(1)
}

/// A calendar period `[start, end)`
///
/// Membership is tested as `start - tick < t < end`, so the instant that opens
/// a period (midnight, Monday 00:00) belongs to it and the instant that opens
/// the next one does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl CalendarWindow {
    /// The calendar day containing `time`
    pub fn day_of(time: DateTime<Utc>) -> Self {
        let start = midnight(time.date_naive());
        Self {
            start,
            end: start + Duration::days(1),
        }
    }

    /// The Monday-based calendar week containing `time`
    pub fn week_of(time: DateTime<Utc>) -> Self {
        let date = time.date_naive();
        let days_since_monday = i64::from(date.weekday().num_days_from_monday());
        let start = midnight(date - Duration::days(days_since_monday));
        Self {
            start,
            end: start + Duration::days(7),
        }
    }

    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        time > self.start - tick() && time < self.end
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}
