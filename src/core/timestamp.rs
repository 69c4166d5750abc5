//! Timestamp formatting utilities
//!
//! Provides the timestamp formats a [`Timestamper`](crate::decorators::Timestamper)
//! can prefix messages with. The default is local wall-clock time in
//! `YYYY-MM-DD HH:MM:SS` form.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

/// strftime pattern of [`TimestampFormat::LocalDateTime`]
pub const LOCAL_DATE_TIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use layered_logger::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::LocalDateTime.format(&at), "2025-01-08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Date and time to the second: `2025-01-08 10:30:45`
    #[default]
    LocalDateTime,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456789+01:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// A pattern chrono cannot render falls back to `LocalDateTime`.
    ///
    /// ```
    /// use layered_logger::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format `datetime` according to this format
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::LocalDateTime => datetime.format(LOCAL_DATE_TIME_PATTERN).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                // chrono reports a malformed pattern only while writing it out
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    return datetime.format(LOCAL_DATE_TIME_PATTERN).to_string();
                }
                out
            }
        }
    }

    /// Format the current local time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, Utc};

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_local_date_time_format() {
        let result = TimestampFormat::LocalDateTime.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08 10:30:45");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123+00:00");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45"));
        assert!(DateTime::parse_from_rfc3339(&result).is_ok());
    }

    #[test]
    fn test_unix_formats() {
        let secs: i64 = TimestampFormat::Unix
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix timestamp");
        let millis: i64 = TimestampFormat::UnixMillis
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix millis timestamp");
        assert_eq!(secs, 1736332245);
        assert_eq!(millis, 1736332245123);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08");
    }

    #[test]
    fn test_now_parses_back() {
        let stamp = TimestampFormat::LocalDateTime.now();
        assert!(NaiveDateTime::parse_from_str(&stamp, LOCAL_DATE_TIME_PATTERN).is_ok());
    }

    #[test]
    fn test_invalid_custom_pattern_falls_back() {
        for pattern in ["%Q", "%", "%Y-%"] {
            let format = TimestampFormat::Custom(pattern.to_string());
            assert_eq!(format.format(&fixed_datetime()), "2025-01-08 10:30:45");
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let format = TimestampFormat::Custom("%H:%M".to_string());
        let json = serde_json::to_string(&format).expect("serialize");
        let back: TimestampFormat = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(format, back);
    }
}
