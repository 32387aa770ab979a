//! Elapsed-time state machine.
//!
//! Two states: idle and running. `start_at` moves idle to running,
//! `pause_at` folds the current run into the accumulated total, `reset`
//! zeroes the total while idle. Transitions that are undefined for the
//! current state are safe no-ops; each mutating call reports whether it
//! changed state so hosts can log ignored input.

use chrono::{DateTime, TimeDelta, Utc};

/// Accumulating stopwatch driven by caller-supplied instants.
///
/// The running flag is encoded by `started_at`: the stopwatch is running
/// exactly when a start instant is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stopwatch {
    started_at: Option<DateTime<Utc>>,
    accumulated: TimeDelta,
}

/// Which transition a [`Stopwatch::toggle_at`] call performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleTransition {
    /// The stopwatch was idle and is now running.
    Started,
    /// The stopwatch was running and is now paused.
    Paused,
}

impl Stopwatch {
    /// Create an idle stopwatch with zero accumulation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            started_at: None,
            accumulated: TimeDelta::zero(),
        }
    }

    /// Whether a run is currently in progress.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Total folded into the stopwatch by completed runs.
    #[must_use]
    pub const fn accumulated(&self) -> TimeDelta {
        self.accumulated
    }

    /// Begin a run at `now`. Returns `false` (no-op) if already running.
    pub fn start_at(&mut self, now: DateTime<Utc>) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// End the current run at `now`, folding it into the accumulated total.
    /// Returns `false` (no-op) if not running.
    pub fn pause_at(&mut self, now: DateTime<Utc>) -> bool {
        let Some(started) = self.started_at.take() else {
            return false;
        };
        self.accumulated = self.accumulated + (now - started).max(TimeDelta::zero());
        true
    }

    /// Flip between running and paused, mirroring a single start/pause
    /// control.
    pub fn toggle_at(&mut self, now: DateTime<Utc>) -> ToggleTransition {
        if self.pause_at(now) {
            ToggleTransition::Paused
        } else {
            let _ = self.start_at(now);
            ToggleTransition::Started
        }
    }

    /// Zero the accumulated total. Defined only while idle; returns `false`
    /// (no-op) while running.
    pub fn reset(&mut self) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.accumulated = TimeDelta::zero();
        true
    }

    /// Elapsed total as observed at `now`: the accumulated total plus the
    /// current run, if any. Pure; callable at arbitrary cadence.
    ///
    /// A `now` earlier than the recorded start instant (host clock skew)
    /// contributes zero rather than shrinking the total.
    #[must_use]
    pub fn elapsed_at(&self, now: DateTime<Utc>) -> TimeDelta {
        match self.started_at {
            Some(started) => self.accumulated + (now - started).max(TimeDelta::zero()),
            None => self.accumulated,
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
