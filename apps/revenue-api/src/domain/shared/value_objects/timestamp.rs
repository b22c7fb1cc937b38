//! Timestamp value object for temporal data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC instant.
///
/// All check-in timestamps are stored and compared in UTC. Parsing accepts
/// any RFC 3339 offset and normalizes it, so a wall-clock value like
/// `2024-03-01T00:30:00+01:00` compares as `2024-02-29T23:30:00Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a new Timestamp from a `DateTime<Utc>`.
    #[must_use]
    pub const fn new(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Get the current timestamp.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parse from an RFC 3339 string, normalizing any offset to UTC.
    ///
    /// # Errors
    ///
    /// Returns error if the string is not a valid RFC 3339 timestamp.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        let dt = DateTime::parse_from_rfc3339(s)?;
        Ok(Self(dt.with_timezone(&Utc)))
    }

    /// Get the inner `DateTime<Utc>`.
    #[must_use]
    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Format as RFC 3339 string.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Calculate duration since another timestamp.
    #[must_use]
    pub fn duration_since(&self, other: Self) -> chrono::Duration {
        self.0 - other.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_utc() {
        let ts = Timestamp::parse("2024-02-29T23:30:00Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-02-29T23:30:00+00:00");
    }

    #[test]
    fn parse_normalizes_offset_to_utc() {
        // Local civil time March 1st 00:30 in UTC+1 is still February in UTC.
        let local = Timestamp::parse("2024-03-01T00:30:00+01:00").unwrap();
        let utc = Timestamp::parse("2024-02-29T23:30:00Z").unwrap();
        assert_eq!(local, utc);
    }

    #[test]
    fn parse_invalid() {
        assert!(Timestamp::parse("not-a-date").is_err());
    }

    #[test]
    fn ordering() {
        let ts1 = Timestamp::parse("2024-03-01T00:00:00Z").unwrap();
        let ts2 = Timestamp::parse("2024-03-01T00:00:01Z").unwrap();
        assert!(ts1 < ts2);
    }

    #[test]
    fn duration_since() {
        let ts1 = Timestamp::parse("2024-03-10T12:00:00Z").unwrap();
        let ts2 = Timestamp::parse("2024-03-10T13:00:00Z").unwrap();
        assert_eq!(ts2.duration_since(ts1).num_hours(), 1);
    }

    #[test]
    fn from_datetime_roundtrip() {
        let dt = Utc::now();
        let ts: Timestamp = dt.into();
        let back: DateTime<Utc> = ts.into();
        assert_eq!(back, dt);
    }

    #[test]
    fn serde_roundtrip() {
        let ts = Timestamp::parse("2024-03-10T12:00:00Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ts);
    }
}
