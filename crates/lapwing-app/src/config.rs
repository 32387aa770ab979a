//! Command-line flags and environment fallbacks for the host shell.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use lapwing_telemetry::LogFormat;

use crate::error::{AppError, AppResult};

/// Upper bound on the watch cadence; anything slower stops feeling like a
/// stopwatch display.
const MAX_TICK_MS: u64 = 60_000;

/// Command-line interface for the lapwing shell.
#[derive(Debug, Parser)]
#[command(
    name = "lapwing",
    about = "Wrist stopwatch core with a heart-rate glance",
    version
)]
pub struct Cli {
    /// Display refresh cadence for the `watch` command, in milliseconds.
    #[arg(long, env = "LAPWING_TICK_MS", default_value_t = 50)]
    pub tick_ms: u64,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, env = "LAPWING_LOG", default_value = lapwing_telemetry::DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Log output format.
    #[arg(long, value_enum, env = "LAPWING_LOG_FORMAT", default_value_t = LogFormatArg::Auto)]
    pub log_format: LogFormatArg,

    /// Rendering for fetched health samples.
    #[arg(long, value_enum, env = "LAPWING_OUTPUT", default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Simulate a host without health data.
    #[arg(long, env = "LAPWING_HEALTH_UNAVAILABLE")]
    pub health_unavailable: bool,

    /// Simulate the user denying the authorization prompt.
    #[arg(long, env = "LAPWING_DENY_AUTHORIZATION")]
    pub deny_authorization: bool,
}

/// Log format flag; `auto` defers to the build-profile default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    /// Infer from the build profile.
    Auto,
    /// Structured JSON lines.
    Json,
    /// Human-readable output.
    Pretty,
}

/// Rendering for fetched health samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per result.
    Text,
    /// One JSON object per result.
    Json,
}

/// Validated shell configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Watch-command refresh cadence.
    pub tick: Duration,
    /// Log level used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Resolved log output format.
    pub log_format: LogFormat,
    /// Rendering for fetched health samples.
    pub output: OutputFormat,
    /// Whether the simulated provider reports health data as absent.
    pub health_unavailable: bool,
    /// Whether the simulated provider denies authorization.
    pub deny_authorization: bool,
}

impl AppConfig {
    /// Validate parsed flags into a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidConfig`] when a flag is out of range.
    pub fn from_cli(cli: Cli) -> AppResult<Self> {
        if cli.tick_ms == 0 || cli.tick_ms > MAX_TICK_MS {
            return Err(AppError::InvalidConfig {
                field: "tick_ms",
                reason: "must be between 1 and 60000 milliseconds",
            });
        }

        let log_format = match cli.log_format {
            LogFormatArg::Auto => LogFormat::infer(),
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Pretty => LogFormat::Pretty,
        };

        Ok(Self {
            tick: Duration::from_millis(cli.tick_ms),
            log_level: cli.log_level,
            log_format,
            output: cli.output,
            health_unavailable: cli.health_unavailable,
            deny_authorization: cli.deny_authorization,
        })
    }
}
