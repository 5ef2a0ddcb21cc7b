//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};

/// Page timestamp layout: day name, day-month-year, 24h clock, zone abbreviation.
///
/// Example: `Tuesday, 04-May-21 10:00:00 UTC`.
pub const PAGE_TIMESTAMP_FORMAT: &str = "%A, %d-%b-%y %H:%M:%S %Z";

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Formats the timestamp the way rendered pages display revision times.
    pub fn to_page_string(&self) -> String {
        self.0.format(PAGE_TIMESTAMP_FORMAT).to_string()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn page_string_matches_expected_layout() {
        let dt = Utc.with_ymd_and_hms(2021, 5, 4, 10, 0, 0).unwrap();
        let ts = Timestamp::from_datetime(dt);

        assert_eq!(ts.to_page_string(), "Tuesday, 04-May-21 10:00:00 UTC");
    }

    #[test]
    fn page_string_pads_day_and_uses_24h_clock() {
        let dt = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        let ts = Timestamp::from_datetime(dt);

        assert_eq!(ts.to_page_string(), "Monday, 02-Jan-06 15:04:05 UTC");
    }
}
