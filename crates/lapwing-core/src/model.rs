//! Health-metric domain types shared across the workspace.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of physiological measurement the provider can be asked for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Instantaneous heart rate.
    HeartRate,
    /// Resting heart rate.
    RestingHeartRate,
}

impl MetricKind {
    /// The kinds the application reads, in display order.
    pub const ALL: [Self; 2] = [Self::HeartRate, Self::RestingHeartRate];

    /// Human-readable label used in rendered output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HeartRate => "heart rate",
            Self::RestingHeartRate => "resting heart rate",
        }
    }

    /// Canonical unit samples of this kind are reported in.
    #[must_use]
    pub const fn canonical_unit(self) -> Unit {
        match self {
            Self::HeartRate | Self::RestingHeartRate => Unit::CountsPerMinute,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical unit attached to a returned sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Counts per minute; rendered as `bpm` for the heart-rate family.
    CountsPerMinute,
}

impl Unit {
    /// Short symbol used when rendering values.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::CountsPerMinute => "bpm",
        }
    }
}

/// One timestamped measurement returned to the caller.
///
/// Immutable once produced; the requesting caller owns it outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetricSample {
    /// Which metric this sample measures.
    pub metric: MetricKind,
    /// Measured value in `unit`.
    pub value: f64,
    /// Canonical unit of `value`.
    pub unit: Unit,
    /// Instant the measurement was recorded by the provider.
    pub recorded_at: DateTime<Utc>,
}

impl fmt::Display for HealthMetricSample {
    /// Render like the watch face does: whole-number value plus symbol.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} {}", self.value, self.unit.symbol())
    }
}
