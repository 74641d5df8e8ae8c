//! Caller-facing units to vendor units.

use chrono::{DateTime, Utc};

use crate::error::{ServiceError, ServiceResult};

pub fn minutes_to_seconds(minutes: i64) -> ServiceResult<i64> {
    if minutes < 0 {
        return Err(ServiceError::InvalidArgument(format!(
            "duration_minutes must not be negative (got {minutes})"
        )));
    }
    minutes
        .checked_mul(60)
        .ok_or_else(|| ServiceError::InvalidArgument("duration_minutes is too large".to_string()))
}

/// Rounds to the nearest second.
pub fn hours_to_seconds(hours: f64) -> ServiceResult<i64> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(ServiceError::InvalidArgument(format!(
            "estimated_hours must be a non-negative number (got {hours})"
        )));
    }
    let seconds = (hours * 3600.0).round();
    // 2^63 itself is out of range
    if seconds >= i64::MAX as f64 {
        return Err(ServiceError::InvalidArgument(
            "estimated_hours is too large".to_string(),
        ));
    }
    Ok(seconds as i64)
}

/// Parse an ISO 8601 / RFC 3339 timestamp such as `2024-01-01T10:00:00Z`.
pub fn parse_timestamp(field: &str, value: &str) -> ServiceResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            ServiceError::InvalidArgument(format!("{field} is not a valid ISO 8601 timestamp: {e}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn minutes_convert_to_seconds() {
        assert_eq!(minutes_to_seconds(90).unwrap(), 5400);
        assert_eq!(minutes_to_seconds(0).unwrap(), 0);
    }

    #[test]
    fn negative_minutes_rejected() {
        assert!(matches!(
            minutes_to_seconds(-5),
            Err(ServiceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn hours_round_to_nearest_second() {
        assert_eq!(hours_to_seconds(2.0).unwrap(), 7200);
        assert_eq!(hours_to_seconds(1.5).unwrap(), 5400);
        // 0.0003h = 1.08s
        assert_eq!(hours_to_seconds(0.0003).unwrap(), 1);
        assert_eq!(hours_to_seconds(0.33333).unwrap(), 1200);
    }

    #[test]
    fn invalid_hours_rejected() {
        assert!(hours_to_seconds(-1.0).is_err());
        assert!(hours_to_seconds(f64::NAN).is_err());
        assert!(hours_to_seconds(f64::INFINITY).is_err());
    }

    #[test]
    fn hours_beyond_i64_seconds_rejected() {
        assert!(matches!(
            hours_to_seconds(1e300),
            Err(ServiceError::InvalidArgument(msg)) if msg == "estimated_hours is too large"
        ));
        // i64::MAX seconds is about 2.56e15 hours
        assert!(hours_to_seconds(3e15).is_err());
        assert_eq!(hours_to_seconds(1e9).unwrap(), 3_600_000_000_000);
    }

    #[test]
    fn timestamps_parse_with_z_and_offset() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(
            parse_timestamp("start_time", "2024-01-01T10:00:00Z").unwrap(),
            expected
        );
        assert_eq!(
            parse_timestamp("start_time", "2024-01-01T12:00:00+02:00").unwrap(),
            expected
        );
    }

    #[test]
    fn invalid_timestamp_rejected() {
        let err = parse_timestamp("start_time", "yesterday").unwrap_err();
        assert!(err.to_string().starts_with("start_time is not a valid"));
    }
}
