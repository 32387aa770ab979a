//! Error types for authorization and snapshot queries.
//!
//! Every provider failure is surfaced as a typed result. Nothing in this
//! crate terminates the process: an absent or misconfigured provider is an
//! expected external condition, not an invariant violation.

use std::error::Error;

use lapwing_core::MetricKind;
use thiserror::Error;

/// Failures while requesting read access from the provider.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Health data is not available on this host at all.
    #[error("health data is not available on this device")]
    Unavailable,
    /// The user declined the authorization request.
    #[error("health data authorization was denied")]
    Denied,
    /// The host lacks the entitlement or usage declarations the provider
    /// requires before it will show an authorization prompt.
    #[error("health data authorization is not configured for this host")]
    ConfigurationMissing,
}

/// Convenience alias for authorization results.
pub type AuthResult<T> = Result<T, AuthError>;

/// Failures while fetching the latest sample for a metric kind.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Health data is not available on this host at all.
    #[error("health data is not available on this device")]
    Unavailable,
    /// The provider reported an error while running the query.
    #[error("health data query failed")]
    QueryFailed {
        /// Underlying provider failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// The provider completed the query but holds no samples for the kind.
    #[error("no samples recorded for {metric}")]
    NoData {
        /// Metric kind the query asked for.
        metric: MetricKind,
    },
}

/// Convenience alias for fetch results.
pub type FetchResult<T> = Result<T, FetchError>;
