//! Wall-clock "HH:MM" parsing and formatting.
//!
//! All schedule math in this service is time-of-day only — no dates. Arithmetic
//! on `chrono::NaiveTime` wraps across midnight, which is exactly the behavior
//! the bedtime and meal-window calculations rely on.

use chrono::NaiveTime;

const FORMAT: &str = "%H:%M";

/// Parses a `"HH:MM"` string into a time-of-day. Returns `None` on any
/// malformed input; callers decide whether that is a validation error.
pub fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), FORMAT).ok()
}

pub fn format_hhmm(time: NaiveTime) -> String {
    time.format(FORMAT).to_string()
}

/// Serde adapter: serialize a `NaiveTime` field as `"HH:MM"`.
/// Use as `#[serde(with = "crate::clock::hhmm")]`. Responses only carry times
/// outward; request times arrive as strings and go through `parse_hhmm`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hhmm(*time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_parse_valid_times() {
        assert_eq!(
            parse_hhmm("07:00"),
            NaiveTime::from_hms_opt(7, 0, 0)
        );
        assert_eq!(
            parse_hhmm(" 23:45 "),
            NaiveTime::from_hms_opt(23, 45, 0)
        );
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(parse_hhmm("").is_none());
        assert!(parse_hhmm("7am").is_none());
        assert!(parse_hhmm("25:00").is_none());
        assert!(parse_hhmm("07:61").is_none());
    }

    #[test]
    fn test_format_round_trips() {
        let time = parse_hhmm("09:05").unwrap();
        assert_eq!(format_hhmm(time), "09:05");
    }

    #[test]
    fn test_naive_time_wraps_across_midnight() {
        let half_past_midnight = parse_hhmm("00:30").unwrap();
        let earlier = half_past_midnight - Duration::minutes(90);
        assert_eq!(format_hhmm(earlier), "23:00");
    }
}
