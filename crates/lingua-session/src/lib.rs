//! Lingua — Session & Progress bounded context.
//!
//! Owns one learner's attempt at a node's question sequence: the
//! per-question answer state machine and the session-scoped score
//! aggregator. Nothing here is shared across concurrent sessions.

pub mod quiz;
pub mod score;

pub use quiz::{QuestionAttempt, QuestionState, QuizSession};
pub use score::{ScoreAggregator, SessionSummary};
