//! Display rendering for elapsed totals.

use chrono::TimeDelta;

/// Render an elapsed total as `MM:SS.hh`, or `H:MM:SS.hh` once a full hour
/// has passed.
///
/// The total is rounded to the nearest hundredth of a second (ties away from
/// zero), and the rounding carries into the larger fields: 59.999 s renders
/// as `01:00.00`. Hours are unbounded in width; minutes, seconds, and
/// hundredths are zero-padded to two digits. Negative totals render as zero.
#[must_use]
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let micros = elapsed.num_microseconds().unwrap_or(i64::MAX).max(0);
    let hundredths = micros.saturating_add(5_000) / 10_000;

    let hours = hundredths / 360_000;
    let minutes = (hundredths / 6_000) % 60;
    let seconds = (hundredths / 100) % 60;
    let rest = hundredths % 100;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}.{rest:02}")
    } else {
        format!("{minutes:02}:{seconds:02}.{rest:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(value: i64) -> TimeDelta {
        TimeDelta::milliseconds(value)
    }

    #[test]
    fn zero_renders_without_hours() {
        assert_eq!(format_elapsed(TimeDelta::zero()), "00:00.00");
    }

    #[test]
    fn minutes_and_seconds_are_zero_padded() {
        assert_eq!(format_elapsed(millis(65_000)), "01:05.00");
        assert_eq!(format_elapsed(millis(9_010)), "00:09.01");
    }

    #[test]
    fn hours_appear_unpadded_past_one_hour() {
        assert_eq!(format_elapsed(millis(3_661_000)), "1:01:01.00");
        assert_eq!(format_elapsed(millis(36_000_000)), "10:00:00.00");
    }

    #[test]
    fn rounding_carries_into_seconds_and_minutes() {
        assert_eq!(format_elapsed(millis(59_999)), "01:00.00");
        assert_eq!(format_elapsed(millis(3_599_999)), "1:00:00.00");
    }

    #[test]
    fn ties_round_away_from_zero() {
        // 1.005 s sits exactly on the hundredth boundary.
        assert_eq!(format_elapsed(TimeDelta::microseconds(1_005_000)), "00:01.01");
        assert_eq!(format_elapsed(TimeDelta::microseconds(1_004_999)), "00:01.00");
    }

    #[test]
    fn sub_hundredth_values_round_down_to_zero() {
        assert_eq!(format_elapsed(TimeDelta::microseconds(4_999)), "00:00.00");
        assert_eq!(format_elapsed(TimeDelta::microseconds(5_000)), "00:00.01");
    }

    #[test]
    fn negative_totals_render_as_zero() {
        assert_eq!(format_elapsed(millis(-1_500)), "00:00.00");
    }

    #[test]
    fn pause_scenario_matches_display() {
        assert_eq!(format_elapsed(millis(65_300)), "01:05.30");
    }
}
