use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::core::{TimelineEntry, Timestamp};

/// How times are rendered in range and tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeLabelPolicy {
    /// `YYYY-MM-DD HH:MM:SS` in UTC.
    #[default]
    UtcDateTime,
    /// Raw seconds since the Unix epoch.
    UnixSeconds,
}

/// Drops sub-second precision from a window bound.
///
/// Floors toward the containing second; out-of-range values saturate.
#[must_use]
pub fn truncate_to_timestamp(time: f64) -> Timestamp {
    if time.is_nan() {
        return 0;
    }
    let floored = time.floor();
    if floored >= Timestamp::MAX as f64 {
        Timestamp::MAX
    } else if floored <= Timestamp::MIN as f64 {
        Timestamp::MIN
    } else {
        floored as Timestamp
    }
}

#[must_use]
pub fn format_timestamp(timestamp: Timestamp, policy: TimeLabelPolicy) -> String {
    match policy {
        TimeLabelPolicy::UtcDateTime => DateTime::from_timestamp(timestamp, 0).map_or_else(
            || timestamp.to_string(),
            |time| time.format("%Y-%m-%d %H:%M:%S").to_string(),
        ),
        TimeLabelPolicy::UnixSeconds => timestamp.to_string(),
    }
}

/// Formats a (fractional) window bound for the range labels.
#[must_use]
pub fn format_time_label(time: f64, policy: TimeLabelPolicy) -> String {
    format_timestamp(truncate_to_timestamp(time), policy)
}

#[must_use]
pub fn format_entry_label(entry: &TimelineEntry, policy: TimeLabelPolicy) -> String {
    format!("{} {}", entry.name, format_timestamp(entry.timestamp, policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_floors_fractional_seconds() {
        assert_eq!(truncate_to_timestamp(12.9), 12);
        assert_eq!(truncate_to_timestamp(-0.5), -1);
        assert_eq!(truncate_to_timestamp(f64::INFINITY), Timestamp::MAX);
        assert_eq!(truncate_to_timestamp(f64::NAN), 0);
    }

    #[test]
    fn out_of_calendar_range_falls_back_to_seconds() {
        let label = format_timestamp(Timestamp::MAX, TimeLabelPolicy::UtcDateTime);
        assert_eq!(label, Timestamp::MAX.to_string());
    }
}
