//! Provider seam implemented by health-data adapters.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lapwing_core::MetricKind;
use serde::{Deserialize, Serialize};

use crate::error::AuthResult;

/// Unit a raw sample was recorded in by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleUnit {
    /// Counts per minute (already canonical for the heart-rate family).
    CountsPerMinute,
    /// Counts per second; converted on the way out.
    CountsPerSecond,
}

/// One measurement as stored by the provider, prior to canonicalisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Measured value in `unit`.
    pub value: f64,
    /// Provider-native unit of `value`.
    pub unit: SampleUnit,
    /// End timestamp of the measurement.
    pub recorded_at: DateTime<Utc>,
}

/// Metric kinds an authorization request covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationRequest {
    /// Kinds the application may write back to the store.
    pub to_share: BTreeSet<MetricKind>,
    /// Kinds the application may read.
    pub to_read: BTreeSet<MetricKind>,
}

impl AuthorizationRequest {
    /// Request read access only.
    #[must_use]
    pub fn read_only(kinds: impl IntoIterator<Item = MetricKind>) -> Self {
        Self {
            to_share: BTreeSet::new(),
            to_read: kinds.into_iter().collect(),
        }
    }

    /// Request read and share access for the same kind set.
    #[must_use]
    pub fn read_and_share(kinds: impl IntoIterator<Item = MetricKind>) -> Self {
        let to_read: BTreeSet<MetricKind> = kinds.into_iter().collect();
        Self {
            to_share: to_read.clone(),
            to_read,
        }
    }
}

/// External health-data store boundary.
///
/// Both asynchronous operations suspend the caller until the provider
/// responds; the seam imposes no timeout and supports no cancellation. A
/// host that needs either wraps the call itself.
#[async_trait]
pub trait HealthProvider: Send + Sync {
    /// Whether health data exists on this host at all.
    fn is_available(&self) -> bool;

    /// Prompt for access to the requested kinds, resolving once the user
    /// (or platform) has answered.
    async fn request_authorization(&self, request: &AuthorizationRequest) -> AuthResult<()>;

    /// Most recent samples for `kind`, ordered by descending end timestamp,
    /// at most `limit` results. Provider failures surface as opaque errors;
    /// the fetcher maps them into the typed taxonomy.
    async fn latest_samples(&self, kind: MetricKind, limit: usize) -> anyhow::Result<Vec<RawSample>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_and_share_mirrors_the_kind_set() {
        let request = AuthorizationRequest::read_and_share(MetricKind::ALL);
        assert_eq!(request.to_read, request.to_share);
        assert!(request.to_read.contains(&MetricKind::HeartRate));
        assert!(request.to_read.contains(&MetricKind::RestingHeartRate));
    }

    #[test]
    fn read_only_leaves_share_empty() {
        let request = AuthorizationRequest::read_only([MetricKind::HeartRate]);
        assert!(request.to_share.is_empty());
        assert_eq!(request.to_read.len(), 1);
    }
}
