//! ISO8601 timestamp handling.
//!
//! The API encodes most timestamps as `2019-06-23T04:30:00-04:00`, but some
//! attributes (service calendars, alert active periods) arrive date-only as
//! `2019-06-23`. Filter parameters additionally accept the literal token
//! `NOW`, meaning "relative to current server time".

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MbtaError, Result};

const FULL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A timestamp as encoded by the MBTA API.
///
/// Decoding tries the full ISO8601 format first and falls back to the
/// date-only form, which resolves to midnight at a zero offset. The `now`
/// flag only affects filter encoding; it is never set by decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeIso8601 {
    pub time: DateTime<FixedOffset>,
    /// When set, the value encodes as the literal `NOW` in filters.
    pub now: bool,
}

impl TimeIso8601 {
    /// Wrap an existing instant.
    pub fn from_datetime(time: DateTime<FixedOffset>) -> Self {
        Self { time, now: false }
    }

    /// Midnight at the start of `date`, zero offset.
    pub fn from_date(date: NaiveDate) -> Self {
        let time = NaiveDateTime::new(date, NaiveTime::MIN)
            .and_utc()
            .fixed_offset();
        Self { time, now: false }
    }

    /// A value that encodes as `NOW` in filter parameters.
    pub fn now_sentinel() -> Self {
        Self {
            time: Utc::now().fixed_offset(),
            now: true,
        }
    }

    /// Parse either the full ISO8601 format or the date-only form.
    pub fn parse(s: &str) -> Result<Self> {
        if let Ok(time) = DateTime::parse_from_str(s, FULL_FORMAT) {
            return Ok(Self { time, now: false });
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
            return Ok(Self::from_date(date));
        }
        Err(MbtaError::MalformedTimestamp(s.to_string()))
    }

    /// Render the full ISO8601 form.
    pub fn format(&self) -> String {
        self.time.format(FULL_FORMAT).to_string()
    }

    /// Render the date-only form.
    pub fn format_only_date(&self) -> String {
        self.time.format(DATE_FORMAT).to_string()
    }

    /// The encoding used in query filters: `NOW` when the flag is set,
    /// otherwise the date-only form.
    pub(crate) fn to_filter_value(&self) -> String {
        if self.now {
            "NOW".to_string()
        } else {
            self.format_only_date()
        }
    }
}

impl Serialize for TimeIso8601 {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for TimeIso8601 {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_full_format() {
        let parsed = TimeIso8601::parse("2019-06-23T04:30:00-04:00").unwrap();
        let expected = FixedOffset::west_opt(4 * 3600)
            .unwrap()
            .with_ymd_and_hms(2019, 6, 23, 4, 30, 0)
            .unwrap();
        assert_eq!(parsed.time, expected);
        assert!(!parsed.now);
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        let parsed = TimeIso8601::parse("2019-06-23").unwrap();
        let expected = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2019, 6, 23, 0, 0, 0)
            .unwrap();
        assert_eq!(parsed.time, expected);
    }

    #[test]
    fn test_parse_garbage_is_malformed_timestamp() {
        let err = TimeIso8601::parse("not-a-date").unwrap_err();
        assert!(matches!(err, MbtaError::MalformedTimestamp(_)));
    }

    #[test]
    fn test_filter_value_is_date_only() {
        let time = TimeIso8601::parse("2019-06-23T04:30:00-04:00").unwrap();
        assert_eq!(time.to_filter_value(), "2019-06-23");
    }

    #[test]
    fn test_filter_value_now_sentinel() {
        assert_eq!(TimeIso8601::now_sentinel().to_filter_value(), "NOW");
    }

    #[test]
    fn test_json_round_trip() {
        let time: TimeIso8601 = serde_json::from_str("\"2019-06-23T04:30:00-04:00\"").unwrap();
        let encoded = serde_json::to_string(&time).unwrap();
        assert_eq!(encoded, "\"2019-06-23T04:30:00-04:00\"");
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        let result: core::result::Result<TimeIso8601, _> =
            serde_json::from_str("\"23/06/2019\"");
        assert!(result.is_err());
    }
}
