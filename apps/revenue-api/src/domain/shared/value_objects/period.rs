//! Revenue period value object: a calendar month as a UTC instant range.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;
use crate::domain::shared::value_objects::Timestamp;

/// Latest year accepted for a revenue period.
///
/// Keeps the month arithmetic inside chrono's calendar range.
pub const MAX_PERIOD_YEAR: i32 = 9999;

/// A `(year, month)` pair mapped to the half-open UTC range `[start, end)`.
///
/// The mapping is pure and timezone-independent: `start` is the first
/// instant of the month in UTC and `end` the first instant of the following
/// month in UTC, regardless of any property's local timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevenuePeriod {
    year: i32,
    month: u32,
}

impl RevenuePeriod {
    /// Create a validated period.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPeriod`] unless `year` is in
    /// `1..=9999` and `month` in `1..=12`.
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=MAX_PERIOD_YEAR).contains(&year) {
            return Err(DomainError::InvalidPeriod {
                year,
                month,
                message: format!("year must be in 1..={MAX_PERIOD_YEAR}"),
            });
        }
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidPeriod {
                year,
                month,
                message: "month must be in 1..=12".to_string(),
            });
        }
        Ok(Self { year, month })
    }

    /// The period's year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The period's month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// First instant of the month, UTC. Included in the period.
    #[must_use]
    pub fn start(&self) -> Timestamp {
        Timestamp::new(Self::month_start(self.year, self.month))
    }

    /// First instant of the following month, UTC. Excluded from the period.
    #[must_use]
    pub fn end(&self) -> Timestamp {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        Timestamp::new(Self::month_start(year, month))
    }

    /// Half-open membership test: `start <= instant < end`.
    #[must_use]
    pub fn contains(&self, instant: Timestamp) -> bool {
        self.start() <= instant && instant < self.end()
    }

    /// Canonical label, e.g. `2024-03`. Used in cache keys and responses.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Construction is validated, so the first of the month always exists.
    #[allow(clippy::expect_used)]
    fn month_start(year: i32, month: u32) -> DateTime<Utc> {
        let date = NaiveDate::from_ymd_opt(year, month, 1)
            .expect("validated year/month always has a first day");
        Utc.from_utc_datetime(
            &date
                .and_hms_opt(0, 0, 0)
                .expect("midnight exists on every date"),
        )
    }
}

impl fmt::Display for RevenuePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn rejects_out_of_range_month() {
        assert!(matches!(
            RevenuePeriod::new(2024, 0),
            Err(DomainError::InvalidPeriod { .. })
        ));
        assert!(matches!(
            RevenuePeriod::new(2024, 13),
            Err(DomainError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_year() {
        assert!(RevenuePeriod::new(0, 1).is_err());
        assert!(RevenuePeriod::new(10_000, 1).is_err());
        assert!(RevenuePeriod::new(1, 1).is_ok());
    }

    #[test_case(2024, 3, "2024-03-01T00:00:00+00:00", "2024-04-01T00:00:00+00:00"; "mid year")]
    #[test_case(2024, 12, "2024-12-01T00:00:00+00:00", "2025-01-01T00:00:00+00:00"; "december rolls into next year")]
    #[test_case(2024, 2, "2024-02-01T00:00:00+00:00", "2024-03-01T00:00:00+00:00"; "leap february")]
    #[test_case(2023, 2, "2023-02-01T00:00:00+00:00", "2023-03-01T00:00:00+00:00"; "non leap february")]
    fn start_and_end(year: i32, month: u32, start: &str, end: &str) {
        let period = RevenuePeriod::new(year, month).unwrap();
        assert_eq!(period.start().to_rfc3339(), start);
        assert_eq!(period.end().to_rfc3339(), end);
    }

    #[test]
    fn contains_is_half_open() {
        let march = RevenuePeriod::new(2024, 3).unwrap();

        // Exactly start: included.
        assert!(march.contains(Timestamp::parse("2024-03-01T00:00:00Z").unwrap()));
        // Exactly end: belongs to the next period.
        assert!(!march.contains(Timestamp::parse("2024-04-01T00:00:00Z").unwrap()));
        // One second before end: included.
        assert!(march.contains(Timestamp::parse("2024-03-31T23:59:59Z").unwrap()));
    }

    #[test]
    fn utc_boundary_booking_stays_in_prior_month() {
        // Local civil time March 1st 00:30 at UTC+1 is 2024-02-29T23:30Z.
        let instant = Timestamp::parse("2024-03-01T00:30:00+01:00").unwrap();

        let february = RevenuePeriod::new(2024, 2).unwrap();
        let march = RevenuePeriod::new(2024, 3).unwrap();

        assert!(february.contains(instant));
        assert!(!march.contains(instant));
    }

    #[test]
    fn label_is_zero_padded() {
        let period = RevenuePeriod::new(2024, 3).unwrap();
        assert_eq!(period.label(), "2024-03");
        assert_eq!(format!("{period}"), "2024-03");

        let early = RevenuePeriod::new(33, 11).unwrap();
        assert_eq!(early.label(), "0033-11");
    }

    #[test]
    fn serde_roundtrip() {
        let period = RevenuePeriod::new(2024, 3).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        let parsed: RevenuePeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, period);
    }
}
