//! Session score aggregation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use lingua_core::clock::Clock;
use serde::Serialize;

/// Frozen end-of-session summary shown on the finish screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Total XP earned this session.
    pub xp: u32,
    /// Accuracy in whole percent, 0 when nothing was answered.
    pub accuracy_pct: u32,
    /// Whole minutes elapsed.
    pub minutes: u32,
    /// Remaining seconds, 0..=59.
    pub seconds: u32,
}

/// Accumulates XP, correctness counts, and elapsed time for one session.
///
/// Pure accumulator with no I/O; time comes from the injected [`Clock`].
/// A session that never finalizes is simply discarded.
pub struct ScoreAggregator {
    clock: Arc<dyn Clock>,
    started_at: DateTime<Utc>,
    xp: u32,
    correct: u32,
    answered: u32,
    frozen: Option<SessionSummary>,
}

impl ScoreAggregator {
    /// Starts a session at the clock's current instant.
    #[must_use]
    pub fn start(clock: Arc<dyn Clock>) -> Self {
        let started_at = clock.now();
        Self {
            clock,
            started_at,
            xp: 0,
            correct: 0,
            answered: 0,
            frozen: None,
        }
    }

    /// Records one answered question. Recording after `finalize` is ignored;
    /// the summary is already frozen.
    pub fn record(&mut self, correct: bool, xp: u32) {
        if self.frozen.is_some() {
            return;
        }
        self.answered += 1;
        if correct {
            self.correct += 1;
        }
        self.xp += xp;
    }

    /// Closes the session and returns its summary. Idempotent: repeated
    /// calls return the identical frozen value without re-accumulating.
    pub fn finalize(&mut self) -> SessionSummary {
        if let Some(summary) = self.frozen {
            return summary;
        }

        let elapsed = (self.clock.now() - self.started_at).num_seconds().max(0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let elapsed = elapsed as u32;

        let summary = SessionSummary {
            xp: self.xp,
            accuracy_pct: accuracy_pct(self.correct, self.answered),
            minutes: elapsed / 60,
            seconds: elapsed % 60,
        };
        self.frozen = Some(summary);
        summary
    }
}

impl std::fmt::Debug for ScoreAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreAggregator")
            .field("started_at", &self.started_at)
            .field("xp", &self.xp)
            .field("correct", &self.correct)
            .field("answered", &self.answered)
            .field("frozen", &self.frozen)
            .finish_non_exhaustive()
    }
}

/// Whole-percent accuracy, round-half-up, clamped to 0..=100.
fn accuracy_pct(correct: u32, answered: u32) -> u32 {
    if answered == 0 {
        return 0;
    }
    ((100 * correct + answered / 2) / answered).min(100)
}
