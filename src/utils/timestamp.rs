//! Timestamp parsing for booking dates.
//!
//! Clients send check-in and check-out either as full RFC 3339 timestamps or
//! as bare calendar dates.

use chrono::{DateTime, NaiveDate, Utc};

/// Errors that can occur while parsing a timestamp.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TimestampError {
    #[error("Timestamp is empty")]
    Empty,

    #[error("Unrecognized timestamp format: {0}")]
    InvalidFormat(String),
}

/// Parses a booking timestamp.
///
/// # Accepted Formats
///
/// 1. **RFC 3339**: `2024-01-01T14:00:00Z`, `2024-01-01T14:00:00+02:00`
/// 2. **Calendar date**: `2024-01-01`, read as midnight UTC
///
/// Surrounding whitespace is ignored. Offsets are converted to UTC.
///
/// # Errors
///
/// Returns [`TimestampError::Empty`] for blank input and
/// [`TimestampError::InvalidFormat`] for anything else unparseable.
///
/// # Examples
///
/// ```ignore
/// let ts = parse_timestamp("2024-01-01").unwrap();
/// assert_eq!(ts.to_rfc3339(), "2024-01-01T00:00:00+00:00");
/// ```
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimestampError::Empty);
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TimestampError::InvalidFormat(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_calendar_date() {
        assert_eq!(
            parse_timestamp("2024-01-03").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        assert_eq!(
            parse_timestamp("2024-01-01T14:00:00+02:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_timestamp("  2024-01-01  ").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_timestamp("   "), Err(TimestampError::Empty));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            parse_timestamp("next tuesday"),
            Err(TimestampError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_timestamp("2024-02-30"),
            Err(TimestampError::InvalidFormat(_))
        ));
    }
}
