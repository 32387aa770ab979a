//! Interactive line-driven host standing in for the watch UI.
//!
//! The shell owns the stopwatch and the snapshot fetcher, renders one line
//! per outcome, and keeps running across provider failures. Presentation
//! policies (such as refusing `reset` while running or at zero) live here,
//! computed from the state the core exposes.

use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use lapwing_core::{
    Clock, HealthMetricSample, MetricKind, Stopwatch, ToggleTransition, format_elapsed,
};
use lapwing_health::{FetchResult, SnapshotFetcher};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info};

use crate::config::{AppConfig, OutputFormat};
use crate::error::{AppError, AppResult};

/// One parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Start,
    Pause,
    Toggle,
    Reset,
    Status,
    Watch,
    Auth,
    Value,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines parse to `None`.
    pub(crate) fn parse(line: &str) -> Result<Option<Self>, String> {
        let token = line.trim();
        if token.is_empty() {
            return Ok(None);
        }
        match token.to_ascii_lowercase().as_str() {
            "start" => Ok(Some(Self::Start)),
            "pause" => Ok(Some(Self::Pause)),
            "toggle" => Ok(Some(Self::Toggle)),
            "reset" => Ok(Some(Self::Reset)),
            "status" => Ok(Some(Self::Status)),
            "watch" => Ok(Some(Self::Watch)),
            "auth" => Ok(Some(Self::Auth)),
            "value" => Ok(Some(Self::Value)),
            "help" => Ok(Some(Self::Help)),
            "quit" | "exit" => Ok(Some(Self::Quit)),
            other => Err(format!("unknown command: {other} (try 'help')")),
        }
    }
}

/// Interactive host shell over the stopwatch core and the health fetcher.
pub struct Shell {
    stopwatch: Stopwatch,
    clock: Arc<dyn Clock>,
    fetcher: SnapshotFetcher,
    tick: Duration,
    output: OutputFormat,
}

impl Shell {
    /// Wire a shell from its collaborators and validated configuration.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, fetcher: SnapshotFetcher, config: &AppConfig) -> Self {
        Self {
            stopwatch: Stopwatch::new(),
            clock,
            fetcher,
            tick: config.tick,
            output: config.output,
        }
    }

    /// Run the interactive loop over stdin until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] when the terminal becomes unusable. Provider
    /// failures are rendered as text and never end the loop.
    pub async fn run(&mut self) -> AppResult<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        println!("lapwing shell (type 'help' for commands)");

        loop {
            let line = lines.next_line().await.map_err(|source| AppError::Io {
                operation: "stdin.read_line",
                source,
            })?;
            let Some(line) = line else { break };

            match Command::parse(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(Command::Watch)) => self.watch(&mut lines).await?,
                Ok(Some(command)) => {
                    for rendered in self.dispatch(command).await {
                        println!("{rendered}");
                    }
                }
                Err(message) => println!("{message}"),
            }
        }

        info!("shell exiting");
        Ok(())
    }

    /// Execute every command except the interactive ones handled by the run
    /// loop, returning the lines to render.
    pub(crate) async fn dispatch(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::Start => {
                if self.stopwatch.start_at(self.clock.now()) {
                    info!("stopwatch started");
                    vec!["started".to_string()]
                } else {
                    debug!("start ignored while running");
                    vec!["already running".to_string()]
                }
            }
            Command::Pause => {
                if self.stopwatch.pause_at(self.clock.now()) {
                    info!("stopwatch paused");
                    vec![format!("paused at {}", self.display())]
                } else {
                    vec!["not running".to_string()]
                }
            }
            Command::Toggle => match self.stopwatch.toggle_at(self.clock.now()) {
                ToggleTransition::Started => vec!["started".to_string()],
                ToggleTransition::Paused => vec![format!("paused at {}", self.display())],
            },
            Command::Reset => self.reset_lines(),
            Command::Status => vec![self.status_line()],
            Command::Auth => self.auth_lines().await,
            Command::Value => self.value_lines().await,
            Command::Help => help_lines(),
            // Handled by the run loop.
            Command::Watch | Command::Quit => Vec::new(),
        }
    }

    /// Reset with the watch-face policy: unavailable while running and when
    /// the display is already zero.
    fn reset_lines(&mut self) -> Vec<String> {
        if self.stopwatch.is_running() {
            return vec!["reset unavailable while running".to_string()];
        }
        if self.stopwatch.elapsed_at(self.clock.now()).is_zero() {
            return vec!["nothing to reset".to_string()];
        }
        let _ = self.stopwatch.reset();
        info!("stopwatch reset");
        vec!["reset".to_string()]
    }

    async fn auth_lines(&self) -> Vec<String> {
        match self.fetcher.request_authorization(MetricKind::ALL).await {
            Ok(()) => vec!["authorization granted".to_string()],
            Err(err) => vec![format!("authorization failed: {err}")],
        }
    }

    async fn value_lines(&self) -> Vec<String> {
        self.fetcher
            .fetch_each(&MetricKind::ALL)
            .await
            .into_iter()
            .map(|(kind, result)| self.render_result(kind, &result))
            .collect()
    }

    fn render_result(
        &self,
        kind: MetricKind,
        result: &FetchResult<HealthMetricSample>,
    ) -> String {
        match (self.output, result) {
            (OutputFormat::Text, Ok(sample)) => format!("{}: {sample}", kind.label()),
            (OutputFormat::Text, Err(err)) => format!("{}: {err}", kind.label()),
            (OutputFormat::Json, Ok(sample)) => json!(sample).to_string(),
            (OutputFormat::Json, Err(err)) => {
                json!({ "metric": kind, "error": err.to_string() }).to_string()
            }
        }
    }

    /// Stream the formatted display at the configured cadence until the user
    /// presses Enter.
    async fn watch(&mut self, lines: &mut Lines<BufReader<Stdin>>) -> AppResult<()> {
        println!("watching (press Enter to stop)");
        let mut ticker = tokio::time::interval(self.tick);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let mut stdout = std::io::stdout();
                    write!(stdout, "\r{}", self.display()).and_then(|()| stdout.flush()).map_err(
                        |source| AppError::Io {
                            operation: "stdout.write",
                            source,
                        },
                    )?;
                }
                line = lines.next_line() => {
                    line.map_err(|source| AppError::Io {
                        operation: "stdin.read_line",
                        source,
                    })?;
                    println!();
                    break;
                }
            }
        }
        Ok(())
    }

    fn status_line(&self) -> String {
        let state = if self.stopwatch.is_running() {
            "running"
        } else {
            "paused"
        };
        format!("{} ({state})", self.display())
    }

    fn display(&self) -> String {
        format_elapsed(self.stopwatch.elapsed_at(self.clock.now()))
    }
}

fn help_lines() -> Vec<String> {
    vec![
        "start   begin or resume the stopwatch".to_string(),
        "pause   pause the stopwatch".to_string(),
        "toggle  flip between running and paused".to_string(),
        "reset   zero the stopwatch (idle only)".to_string(),
        "status  show the current display".to_string(),
        "watch   stream the display until Enter".to_string(),
        "auth    request health-data authorization".to_string(),
        "value   fetch latest heart rate and resting heart rate".to_string(),
        "quit    leave the shell".to_string(),
    ]
}
