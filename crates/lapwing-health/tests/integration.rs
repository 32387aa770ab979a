use std::sync::Arc;

use chrono::DateTime;
use lapwing_core::{MetricKind, Unit};
use lapwing_health::{
    AuthBehavior, AuthError, FetchError, RawSample, SampleUnit, SimulatedProvider, SnapshotFetcher,
};

fn bpm_at(value: f64, seconds: i64) -> RawSample {
    RawSample {
        value,
        unit: SampleUnit::CountsPerMinute,
        recorded_at: DateTime::from_timestamp(seconds, 0).expect("in-range timestamp"),
    }
}

#[tokio::test]
async fn fetches_the_most_recent_sample() {
    let provider = SimulatedProvider::new();
    provider.record(MetricKind::HeartRate, bpm_at(68.0, 1_000));
    provider.record(MetricKind::HeartRate, bpm_at(91.0, 2_000));
    let fetcher = SnapshotFetcher::new(Arc::new(provider));

    let sample = fetcher
        .fetch_latest(MetricKind::HeartRate)
        .await
        .expect("samples seeded");
    assert!((sample.value - 91.0).abs() < f64::EPSILON);
    assert_eq!(sample.unit, Unit::CountsPerMinute);
    assert_eq!(sample.metric, MetricKind::HeartRate);
    assert_eq!(sample.recorded_at, bpm_at(91.0, 2_000).recorded_at);
}

#[tokio::test]
async fn empty_store_reports_no_data_not_a_crash() {
    let fetcher = SnapshotFetcher::new(Arc::new(SimulatedProvider::new()));
    let err = fetcher
        .fetch_latest(MetricKind::RestingHeartRate)
        .await
        .expect_err("nothing seeded");
    assert!(matches!(
        err,
        FetchError::NoData {
            metric: MetricKind::RestingHeartRate
        }
    ));
}

#[tokio::test]
async fn unavailable_provider_yields_typed_errors() {
    let fetcher = SnapshotFetcher::new(Arc::new(SimulatedProvider::new().availability(false)));

    let fetch_err = fetcher
        .fetch_latest(MetricKind::HeartRate)
        .await
        .expect_err("unavailable");
    assert!(matches!(fetch_err, FetchError::Unavailable));

    let auth_err = fetcher
        .request_authorization(MetricKind::ALL)
        .await
        .expect_err("unavailable");
    assert!(matches!(auth_err, AuthError::Unavailable));
}

#[tokio::test]
async fn authorization_outcomes_are_surfaced() {
    let granted = SnapshotFetcher::new(Arc::new(SimulatedProvider::new()));
    granted
        .request_authorization(MetricKind::ALL)
        .await
        .expect("grant scripted");

    let denied = SnapshotFetcher::new(Arc::new(
        SimulatedProvider::new().auth_behavior(AuthBehavior::Deny),
    ));
    assert!(matches!(
        denied.request_authorization(MetricKind::ALL).await,
        Err(AuthError::Denied)
    ));

    let unconfigured = SnapshotFetcher::new(Arc::new(
        SimulatedProvider::new().auth_behavior(AuthBehavior::MissingConfiguration),
    ));
    assert!(matches!(
        unconfigured.request_authorization(MetricKind::ALL).await,
        Err(AuthError::ConfigurationMissing)
    ));
}

#[tokio::test]
async fn provider_errors_map_to_query_failed() {
    let fetcher = SnapshotFetcher::new(Arc::new(
        SimulatedProvider::new().query_failure("store offline"),
    ));
    let err = fetcher
        .fetch_latest(MetricKind::HeartRate)
        .await
        .expect_err("scripted failure");
    match err {
        FetchError::QueryFailed { source } => {
            assert!(source.to_string().contains("store offline"));
        }
        other => panic!("expected QueryFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn partial_failure_reports_each_kind_independently() {
    let provider = SimulatedProvider::new();
    provider.record(MetricKind::HeartRate, bpm_at(74.0, 5_000));
    // Resting heart rate is left unseeded on purpose.
    let fetcher = SnapshotFetcher::new(Arc::new(provider));

    let results = fetcher.fetch_each(&MetricKind::ALL).await;
    assert_eq!(results.len(), 2);

    let (kind, heart) = &results[0];
    assert_eq!(*kind, MetricKind::HeartRate);
    let sample = heart.as_ref().expect("heart rate seeded");
    assert!((sample.value - 74.0).abs() < f64::EPSILON);

    let (kind, resting) = &results[1];
    assert_eq!(*kind, MetricKind::RestingHeartRate);
    assert!(matches!(
        resting.as_ref().expect_err("resting unseeded"),
        FetchError::NoData {
            metric: MetricKind::RestingHeartRate
        }
    ));
}
