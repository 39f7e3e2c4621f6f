//! Test clocks — deterministic `Clock` implementations for tests.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use lingua_core::clock::Clock;

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that advances by a fixed step on every call, for tests that
/// measure elapsed time without sleeping.
#[derive(Debug)]
pub struct StepClock {
    current: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl StepClock {
    /// Creates a clock starting at `start` that advances by `step` per call.
    #[must_use]
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            current: Mutex::new(start),
            step,
        }
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.current.lock().expect("clock mutex poisoned");
        let now = *current;
        *current += self.step;
        now
    }
}
