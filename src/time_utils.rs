// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
///
/// Fractional seconds are kept when present.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse an RFC3339 timestamp with any offset into UTC.
pub fn parse_utc_rfc3339(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc))
}

/// Serde adapter storing timestamps as `Z`-suffixed RFC3339 strings.
///
/// Use with `#[serde(with = "crate::time_utils::rfc3339_utc")]`.
pub mod rfc3339_utc {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_utc_rfc3339(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_utc_rfc3339(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_uses_z_suffix() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 18, 30, 0).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2024-03-05T18:30:00Z");
    }

    #[test]
    fn test_parse_normalizes_offset() {
        let parsed = parse_utc_rfc3339("2024-03-05T19:30:00+01:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 5, 18, 30, 0).unwrap());
        assert!(parse_utc_rfc3339("yesterday").is_err());
    }

    #[test]
    fn test_sub_second_precision_survives() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 18, 30, 0).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);
        let formatted = format_utc_rfc3339(date);
        assert_eq!(formatted, "2024-03-05T18:30:00.123456789Z");
        assert_eq!(parse_utc_rfc3339(&formatted).unwrap(), date);
    }
}
