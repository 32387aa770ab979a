//! Health snapshot fetching over an abstract provider.
//!
//! The provider seam ([`HealthProvider`]) is the only boundary to the
//! external health-data store. [`SnapshotFetcher`] layers the typed error
//! taxonomy, canonical-unit conversion, and independent per-kind queries on
//! top of it. [`SimulatedProvider`] is the in-memory adapter used by the
//! demo shell and the test suites.
//!
//! Layout: `provider.rs` (seam + raw DTOs), `fetcher.rs` (service),
//! `error.rs` (taxonomies), `simulated.rs` (in-memory adapter).

pub mod error;
pub mod fetcher;
pub mod provider;
pub mod simulated;

pub use error::{AuthError, AuthResult, FetchError, FetchResult};
pub use fetcher::SnapshotFetcher;
pub use provider::{AuthorizationRequest, HealthProvider, RawSample, SampleUnit};
pub use simulated::{AuthBehavior, SimulatedProvider};
