//! Builders for raw provider samples.

use chrono::{DateTime, Utc};
use lapwing_health::{RawSample, SampleUnit};

/// A single bpm reading recorded at `recorded_at`.
#[must_use]
pub const fn bpm_sample(value: f64, recorded_at: DateTime<Utc>) -> RawSample {
    RawSample {
        value,
        unit: SampleUnit::CountsPerMinute,
        recorded_at,
    }
}

/// A series of bpm readings from `(value, unix seconds)` pairs.
///
/// # Panics
///
/// Panics if a timestamp is out of chrono's representable range.
#[must_use]
pub fn bpm_series(points: &[(f64, i64)]) -> Vec<RawSample> {
    points
        .iter()
        .map(|&(value, seconds)| {
            bpm_sample(
                value,
                DateTime::from_timestamp(seconds, 0).expect("in-range timestamp"),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_preserves_order_and_values() {
        let series = bpm_series(&[(72.0, 100), (68.0, 200)]);
        assert_eq!(series.len(), 2);
        assert!((series[0].value - 72.0).abs() < f64::EPSILON);
        assert_eq!(series[1].recorded_at.timestamp(), 200);
        assert!(series.iter().all(|s| s.unit == SampleUnit::CountsPerMinute));
    }
}
