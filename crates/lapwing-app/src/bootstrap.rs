//! Shell bootstrap: flag parsing, telemetry, and provider wiring.

use std::sync::Arc;

use clap::Parser;
use lapwing_core::SystemClock;
use lapwing_health::{AuthBehavior, SimulatedProvider, SnapshotFetcher};
use lapwing_telemetry::LoggingConfig;
use tracing::info;
use uuid::Uuid;

use crate::config::{AppConfig, Cli};
use crate::error::{AppError, AppResult};
use crate::shell::Shell;

/// Parse flags, install telemetry, wire the shell, and run it to
/// completion.
///
/// # Errors
///
/// Returns an [`AppError`] for invalid configuration, failed telemetry
/// installation, or terminal IO failures. Provider failures never surface
/// here; the shell reports them as text.
pub async fn run_shell() -> AppResult<()> {
    let config = AppConfig::from_cli(Cli::parse())?;
    lapwing_telemetry::init_logging(&LoggingConfig {
        level: &config.log_level,
        format: config.log_format,
    })
    .map_err(|err| AppError::Telemetry {
        operation: "telemetry.init",
        source: err.into(),
    })?;

    let session_id = Uuid::new_v4();
    info!(%session_id, tick = ?config.tick, "lapwing shell starting");

    let fetcher = SnapshotFetcher::new(Arc::new(build_provider(&config)));
    let mut shell = Shell::new(Arc::new(SystemClock), fetcher, &config);
    shell.run().await
}

/// Map the provider knobs onto the simulated adapter.
fn build_provider(config: &AppConfig) -> SimulatedProvider {
    let mut provider = SimulatedProvider::with_jitter().availability(!config.health_unavailable);
    if config.deny_authorization {
        provider = provider.auth_behavior(AuthBehavior::Deny);
    }
    provider
}

#[cfg(test)]
mod tests {
    use super::*;
    use lapwing_health::HealthProvider as _;
    use std::time::Duration;

    fn config(health_unavailable: bool) -> AppConfig {
        AppConfig {
            tick: Duration::from_millis(50),
            log_level: "info".to_string(),
            log_format: lapwing_telemetry::LogFormat::Pretty,
            output: crate::config::OutputFormat::Text,
            health_unavailable,
            deny_authorization: false,
        }
    }

    #[test]
    fn availability_knob_reaches_the_provider() {
        assert!(build_provider(&config(false)).is_available());
        assert!(!build_provider(&config(true)).is_available());
    }
}
