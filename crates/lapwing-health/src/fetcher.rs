//! Snapshot fetching service layered over the provider seam.

use std::sync::Arc;

use lapwing_core::{HealthMetricSample, MetricKind};
use tracing::{debug, warn};

use crate::error::{AuthError, AuthResult, FetchError, FetchResult};
use crate::provider::{AuthorizationRequest, HealthProvider, RawSample, SampleUnit};

/// Fetches the single most-recent sample per metric kind.
///
/// Cheap to clone; clones share the underlying provider.
#[derive(Clone)]
pub struct SnapshotFetcher {
    provider: Arc<dyn HealthProvider>,
}

impl SnapshotFetcher {
    /// Wrap a provider adapter.
    #[must_use]
    pub fn new(provider: Arc<dyn HealthProvider>) -> Self {
        Self { provider }
    }

    /// Request read and share access for `kinds`, suspending until the
    /// provider answers.
    ///
    /// # Errors
    ///
    /// [`AuthError::Unavailable`] when the provider is absent on this host;
    /// otherwise whatever typed outcome the provider reports.
    pub async fn request_authorization(
        &self,
        kinds: impl IntoIterator<Item = MetricKind> + Send,
    ) -> AuthResult<()> {
        if !self.provider.is_available() {
            warn!("authorization requested but health data is unavailable");
            return Err(AuthError::Unavailable);
        }
        let request = AuthorizationRequest::read_and_share(kinds);
        self.provider.request_authorization(&request).await
    }

    /// Fetch the most recent sample for `kind`, converted to its canonical
    /// unit.
    ///
    /// # Errors
    ///
    /// [`FetchError::Unavailable`] when the provider is absent,
    /// [`FetchError::QueryFailed`] when the provider reports an error, and
    /// [`FetchError::NoData`] when the store holds no samples for `kind`.
    pub async fn fetch_latest(&self, kind: MetricKind) -> FetchResult<HealthMetricSample> {
        if !self.provider.is_available() {
            return Err(FetchError::Unavailable);
        }

        let samples = self
            .provider
            .latest_samples(kind, 1)
            .await
            .map_err(|err| FetchError::QueryFailed { source: err.into() })?;

        let newest = samples
            .into_iter()
            .next()
            .ok_or(FetchError::NoData { metric: kind })?;

        debug!(metric = %kind, "latest sample fetched");
        Ok(canonicalize(kind, &newest))
    }

    /// Fetch each kind with an independent query, reporting every outcome on
    /// its own.
    ///
    /// Queries run concurrently; one kind failing never blocks another, and
    /// the returned pairs follow the requested order.
    pub async fn fetch_each(
        &self,
        kinds: &[MetricKind],
    ) -> Vec<(MetricKind, FetchResult<HealthMetricSample>)> {
        let mut handles = Vec::with_capacity(kinds.len());
        for kind in kinds.iter().copied() {
            let fetcher = self.clone();
            handles.push((
                kind,
                tokio::spawn(async move { fetcher.fetch_latest(kind).await }),
            ));
        }

        let mut results = Vec::with_capacity(handles.len());
        for (kind, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(err) => Err(FetchError::QueryFailed {
                    source: Box::new(err),
                }),
            };
            results.push((kind, result));
        }
        results
    }
}

/// Convert a raw provider sample into the caller-facing canonical form.
fn canonicalize(kind: MetricKind, raw: &RawSample) -> HealthMetricSample {
    let value = match raw.unit {
        SampleUnit::CountsPerMinute => raw.value,
        SampleUnit::CountsPerSecond => raw.value * 60.0,
    };
    HealthMetricSample {
        metric: kind,
        value,
        unit: kind.canonical_unit(),
        recorded_at: raw.recorded_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use lapwing_core::Unit;

    fn stamp(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).expect("in-range timestamp")
    }

    struct EmptyProvider;

    #[async_trait]
    impl HealthProvider for EmptyProvider {
        fn is_available(&self) -> bool {
            true
        }

        async fn request_authorization(&self, _request: &AuthorizationRequest) -> AuthResult<()> {
            Ok(())
        }

        async fn latest_samples(
            &self,
            _kind: MetricKind,
            _limit: usize,
        ) -> anyhow::Result<Vec<RawSample>> {
            Ok(Vec::new())
        }
    }

    struct FixedProvider {
        unit: SampleUnit,
        value: f64,
    }

    #[async_trait]
    impl HealthProvider for FixedProvider {
        fn is_available(&self) -> bool {
            true
        }

        async fn request_authorization(&self, _request: &AuthorizationRequest) -> AuthResult<()> {
            Ok(())
        }

        async fn latest_samples(
            &self,
            _kind: MetricKind,
            limit: usize,
        ) -> anyhow::Result<Vec<RawSample>> {
            assert_eq!(limit, 1);
            Ok(vec![RawSample {
                value: self.value,
                unit: self.unit,
                recorded_at: stamp(1_000),
            }])
        }
    }

    #[tokio::test]
    async fn empty_store_yields_no_data() {
        let fetcher = SnapshotFetcher::new(Arc::new(EmptyProvider));
        let err = fetcher
            .fetch_latest(MetricKind::HeartRate)
            .await
            .expect_err("no samples seeded");
        assert!(matches!(
            err,
            FetchError::NoData {
                metric: MetricKind::HeartRate
            }
        ));
    }

    #[tokio::test]
    async fn counts_per_second_convert_to_per_minute() {
        let fetcher = SnapshotFetcher::new(Arc::new(FixedProvider {
            unit: SampleUnit::CountsPerSecond,
            value: 1.5,
        }));
        let sample = fetcher
            .fetch_latest(MetricKind::HeartRate)
            .await
            .expect("sample seeded");
        assert!((sample.value - 90.0).abs() < f64::EPSILON);
        assert_eq!(sample.unit, Unit::CountsPerMinute);
    }

    #[tokio::test]
    async fn per_minute_samples_pass_through_unchanged() {
        let fetcher = SnapshotFetcher::new(Arc::new(FixedProvider {
            unit: SampleUnit::CountsPerMinute,
            value: 64.0,
        }));
        let sample = fetcher
            .fetch_latest(MetricKind::RestingHeartRate)
            .await
            .expect("sample seeded");
        assert!((sample.value - 64.0).abs() < f64::EPSILON);
        assert_eq!(sample.recorded_at, stamp(1_000));
    }
}
