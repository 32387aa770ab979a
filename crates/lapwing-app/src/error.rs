//! # Design
//!
//! - Centralize host-shell errors for configuration, telemetry, and IO.
//! - Keep error messages constant while carrying context fields for
//!   debugging.
//! - Provider failures are never `AppError`s: the shell reports them as text
//!   and keeps running.

use std::error::Error as StdError;
use std::io;

use thiserror::Error;

/// Result alias for host-shell operations.
pub type AppResult<T> = Result<T, AppError>;

/// Host-shell error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// A configuration value failed validation.
    #[error("invalid configuration value")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Telemetry initialisation failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    /// Terminal IO failed.
    #[error("terminal io failed")]
    Io {
        /// Operation identifier.
        operation: &'static str,
        /// Source IO error.
        #[source]
        source: io::Error,
    },
}
