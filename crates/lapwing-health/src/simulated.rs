//! In-memory provider adapter for the demo shell and test suites.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::bail;
use async_trait::async_trait;
use chrono::Utc;
use lapwing_core::MetricKind;
use rand::Rng;
use tracing::debug;

use crate::error::{AuthError, AuthResult};
use crate::provider::{AuthorizationRequest, HealthProvider, RawSample, SampleUnit};

/// Scripted outcome for authorization requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthBehavior {
    /// Grant access.
    #[default]
    Grant,
    /// Report a user denial.
    Deny,
    /// Report that the host lacks the required configuration.
    MissingConfiguration,
}

/// In-memory health store with scripted failure knobs.
///
/// Samples are recorded per kind and returned newest-first. With jitter
/// enabled, an empty kind synthesises a plausible reading instead of
/// reporting no data, which keeps the demo shell lively without seeding.
pub struct SimulatedProvider {
    available: bool,
    auth: AuthBehavior,
    query_failure: Option<String>,
    jitter: bool,
    samples: Mutex<HashMap<MetricKind, Vec<RawSample>>>,
}

impl SimulatedProvider {
    /// Empty, available store that grants authorization.
    #[must_use]
    pub fn new() -> Self {
        Self {
            available: true,
            auth: AuthBehavior::Grant,
            query_failure: None,
            jitter: false,
            samples: Mutex::new(HashMap::new()),
        }
    }

    /// Store that synthesises readings for kinds with no recorded samples.
    #[must_use]
    pub fn with_jitter() -> Self {
        Self {
            jitter: true,
            ..Self::new()
        }
    }

    /// Override host availability.
    #[must_use]
    pub fn availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Script the authorization outcome.
    #[must_use]
    pub fn auth_behavior(mut self, auth: AuthBehavior) -> Self {
        self.auth = auth;
        self
    }

    /// Make every query fail with `message`.
    #[must_use]
    pub fn query_failure(mut self, message: impl Into<String>) -> Self {
        self.query_failure = Some(message.into());
        self
    }

    /// Record a sample for `kind`.
    ///
    /// # Panics
    ///
    /// Panics if the sample store mutex has been poisoned.
    pub fn record(&self, kind: MetricKind, sample: RawSample) {
        let mut samples = self.samples.lock().expect("sample store mutex poisoned");
        samples.entry(kind).or_default().push(sample);
    }

    fn synthesize(kind: MetricKind) -> RawSample {
        let mut rng = rand::rng();
        let value = match kind {
            MetricKind::HeartRate => rng.random_range(62.0..=96.0),
            MetricKind::RestingHeartRate => rng.random_range(52.0..=64.0),
        };
        RawSample {
            value,
            unit: SampleUnit::CountsPerMinute,
            recorded_at: Utc::now(),
        }
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HealthProvider for SimulatedProvider {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn request_authorization(&self, request: &AuthorizationRequest) -> AuthResult<()> {
        if !self.available {
            return Err(AuthError::Unavailable);
        }
        debug!(kinds = request.to_read.len(), "authorization requested");
        match self.auth {
            AuthBehavior::Grant => Ok(()),
            AuthBehavior::Deny => Err(AuthError::Denied),
            AuthBehavior::MissingConfiguration => Err(AuthError::ConfigurationMissing),
        }
    }

    async fn latest_samples(&self, kind: MetricKind, limit: usize) -> anyhow::Result<Vec<RawSample>> {
        if let Some(message) = &self.query_failure {
            bail!("{message}");
        }

        let mut rows = {
            let samples = self.samples.lock().expect("sample store mutex poisoned");
            samples.get(&kind).cloned().unwrap_or_default()
        };

        if rows.is_empty() && self.jitter {
            rows.push(Self::synthesize(kind));
        }

        rows.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        rows.truncate(limit);
        Ok(rows)
    }
}
