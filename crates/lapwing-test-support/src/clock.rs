//! Manually advanced clock for driving stopwatch scenarios without real
//! time passing.

use std::sync::Mutex;

use chrono::{DateTime, TimeDelta, Utc};
use lapwing_core::Clock;

/// [`Clock`] implementation whose instant only moves when a test says so.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Clock pinned to `start`.
    #[must_use]
    pub const fn at(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Clock pinned to the Unix epoch.
    ///
    /// # Panics
    ///
    /// Never panics; the epoch is always representable.
    #[must_use]
    pub fn epoch() -> Self {
        Self::at(DateTime::from_timestamp(0, 0).expect("epoch is representable"))
    }

    /// Pin the clock to `now`.
    ///
    /// # Panics
    ///
    /// Panics if the clock mutex has been poisoned.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("manual clock mutex poisoned") = now;
    }

    /// Move the clock forward by `step`.
    ///
    /// # Panics
    ///
    /// Panics if the clock mutex has been poisoned.
    pub fn advance(&self, step: TimeDelta) {
        let mut now = self.now.lock().expect("manual clock mutex poisoned");
        *now += step;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("manual clock mutex poisoned")
    }
}
