//! Per-question answer state machine and the sequential quiz session.

use lingua_catalog::model::QuizQuestion;
use lingua_core::error::DomainError;
use uuid::Uuid;

/// Answer state for one question instance.
///
/// `Unanswered` → `OptionSelected` → `Submitted`; `Submitted` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionState {
    /// No option selected yet.
    Unanswered,
    /// An option is selected but not yet submitted. Re-selection replaces
    /// the prior choice without an observable intermediate transition.
    OptionSelected {
        /// The currently selected option.
        option_id: String,
    },
    /// The answer has been graded. Immutable thereafter.
    Submitted {
        /// The option that was graded.
        option_id: String,
        /// Whether the graded option carried the correctness flag.
        correct: bool,
    },
}

/// One learner's attempt at one question.
#[derive(Debug)]
pub struct QuestionAttempt<'a> {
    question: &'a QuizQuestion,
    state: QuestionState,
}

impl<'a> QuestionAttempt<'a> {
    /// Starts an attempt in the `Unanswered` state.
    #[must_use]
    pub fn new(question: &'a QuizQuestion) -> Self {
        Self {
            question,
            state: QuestionState::Unanswered,
        }
    }

    /// The question under attempt.
    #[must_use]
    pub fn question(&self) -> &'a QuizQuestion {
        self.question
    }

    /// Current answer state.
    #[must_use]
    pub fn state(&self) -> &QuestionState {
        &self.state
    }

    /// Selects an option, replacing any prior unsubmitted selection.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OptionNotFound` when the identifier does not
    /// belong to this question, and `DomainError::Validation` when the
    /// attempt is already submitted.
    pub fn select(&mut self, option_id: &str) -> Result<(), DomainError> {
        if matches!(self.state, QuestionState::Submitted { .. }) {
            return Err(DomainError::Validation(
                "cannot change selection after submission".to_owned(),
            ));
        }
        // Resolve before transitioning so an unknown id leaves state intact.
        let option = self.question.option(option_id)?;
        self.state = QuestionState::OptionSelected {
            option_id: option.id.clone(),
        };
        Ok(())
    }

    /// Grades the selected option and moves to the terminal state.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when nothing is selected or the
    /// attempt was already submitted.
    pub fn submit(&mut self) -> Result<bool, DomainError> {
        let option_id = match &self.state {
            QuestionState::OptionSelected { option_id } => option_id.clone(),
            QuestionState::Unanswered => {
                return Err(DomainError::Validation(
                    "cannot submit without a selected option".to_owned(),
                ));
            }
            QuestionState::Submitted { .. } => {
                return Err(DomainError::Validation(
                    "question already submitted".to_owned(),
                ));
            }
        };

        let correct = self.question.option(&option_id)?.correct;
        self.state = QuestionState::Submitted { option_id, correct };
        Ok(correct)
    }
}

/// One learner's pass through a node's ordered question sequence.
///
/// The session borrows the catalog's questions for the duration of the
/// request; it owns only its own answer state.
#[derive(Debug)]
pub struct QuizSession<'a> {
    id: Uuid,
    attempts: Vec<QuestionAttempt<'a>>,
    cursor: usize,
}

impl<'a> QuizSession<'a> {
    /// Starts a session over the given question sequence.
    #[must_use]
    pub fn new(questions: &'a [QuizQuestion]) -> Self {
        Self {
            id: Uuid::new_v4(),
            attempts: questions.iter().map(QuestionAttempt::new).collect(),
            cursor: 0,
        }
    }

    /// Session instance identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The attempt currently presented, or `None` when the session is past
    /// the last question.
    #[must_use]
    pub fn current(&self) -> Option<&QuestionAttempt<'a>> {
        self.attempts.get(self.cursor)
    }

    /// Selects an option on the current question.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the session is complete, and
    /// propagates the current attempt's selection errors.
    pub fn select(&mut self, option_id: &str) -> Result<(), DomainError> {
        self.current_mut()?.select(option_id)
    }

    /// Submits the current question and returns whether it was correct.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the session is complete, and
    /// propagates the current attempt's submission errors.
    pub fn submit_current(&mut self) -> Result<bool, DomainError> {
        self.current_mut()?.submit()
    }

    /// Advances presentation to the next question.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the current question is not
    /// yet submitted; the session is strictly sequential.
    pub fn advance(&mut self) -> Result<(), DomainError> {
        match self.current() {
            Some(attempt) if matches!(attempt.state(), QuestionState::Submitted { .. }) => {
                self.cursor += 1;
                Ok(())
            }
            Some(_) => Err(DomainError::Validation(
                "cannot advance past an unsubmitted question".to_owned(),
            )),
            None => Err(DomainError::Validation(
                "session is already complete".to_owned(),
            )),
        }
    }

    /// True once every question has been submitted and passed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.attempts.len()
    }

    /// Restarts presentation from the first question without touching any
    /// recorded answer state or scores.
    pub fn review(&mut self) {
        self.cursor = 0;
    }

    fn current_mut(&mut self) -> Result<&mut QuestionAttempt<'a>, DomainError> {
        let cursor = self.cursor;
        self.attempts.get_mut(cursor).ok_or_else(|| {
            DomainError::Validation("session is already complete".to_owned())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingua_test_support::sample_catalog;

    #[test]
    fn test_attempt_starts_unanswered() {
        let catalog = sample_catalog();
        let questions = catalog.questions("n42").unwrap();

        let attempt = QuestionAttempt::new(&questions[0]);

        assert_eq!(*attempt.state(), QuestionState::Unanswered);
    }

    #[test]
    fn test_reselection_replaces_prior_choice() {
        let catalog = sample_catalog();
        let questions = catalog.questions("n42").unwrap();
        let mut attempt = QuestionAttempt::new(&questions[0]);

        attempt.select("q1-b").unwrap();
        attempt.select("q1-a").unwrap();

        assert_eq!(
            *attempt.state(),
            QuestionState::OptionSelected {
                option_id: "q1-a".to_owned()
            }
        );
    }

    #[test]
    fn test_select_unknown_option_leaves_state_intact() {
        let catalog = sample_catalog();
        let questions = catalog.questions("n42").unwrap();
        let mut attempt = QuestionAttempt::new(&questions[0]);

        let err = attempt.select("q9-z").unwrap_err();

        assert!(matches!(err, DomainError::OptionNotFound(_)));
        assert_eq!(*attempt.state(), QuestionState::Unanswered);
    }

    #[test]
    fn test_submit_grades_against_answer_key() {
        let catalog = sample_catalog();
        let questions = catalog.questions("n42").unwrap();
        let mut attempt = QuestionAttempt::new(&questions[0]);

        attempt.select("q1-a").unwrap();
        assert!(attempt.submit().unwrap());

        let mut wrong = QuestionAttempt::new(&questions[1]);
        wrong.select("q2-b").unwrap();
        assert!(!wrong.submit().unwrap());
    }

    #[test]
    fn test_submit_without_selection_is_rejected() {
        let catalog = sample_catalog();
        let questions = catalog.questions("n42").unwrap();
        let mut attempt = QuestionAttempt::new(&questions[0]);

        assert!(matches!(
            attempt.submit().unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn test_submitted_state_is_terminal() {
        let catalog = sample_catalog();
        let questions = catalog.questions("n42").unwrap();
        let mut attempt = QuestionAttempt::new(&questions[0]);
        attempt.select("q1-a").unwrap();
        attempt.submit().unwrap();

        assert!(matches!(
            attempt.select("q1-b").unwrap_err(),
            DomainError::Validation(_)
        ));
        assert!(matches!(
            attempt.submit().unwrap_err(),
            DomainError::Validation(_)
        ));
        assert_eq!(
            *attempt.state(),
            QuestionState::Submitted {
                option_id: "q1-a".to_owned(),
                correct: true
            }
        );
    }

    #[test]
    fn test_session_advances_sequentially() {
        let catalog = sample_catalog();
        let questions = catalog.questions("n42").unwrap();
        let mut session = QuizSession::new(questions);
        assert_eq!(session.current().unwrap().question().id, "q1");

        session.select("q1-a").unwrap();
        session.submit_current().unwrap();
        session.advance().unwrap();
        assert_eq!(session.current().unwrap().question().id, "q2");

        session.select("q2-a").unwrap();
        session.submit_current().unwrap();
        session.advance().unwrap();

        assert!(session.is_complete());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_advance_before_submission_is_rejected() {
        let catalog = sample_catalog();
        let questions = catalog.questions("n42").unwrap();
        let mut session = QuizSession::new(questions);
        session.select("q1-a").unwrap();

        assert!(matches!(
            session.advance().unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn test_session_grades_flow_into_score_aggregator() {
        use std::sync::Arc;

        use chrono::{Duration, TimeZone, Utc};
        use lingua_test_support::StepClock;

        use crate::score::ScoreAggregator;

        let catalog = sample_catalog();
        let questions = catalog.questions("n42").unwrap();
        let mut session = QuizSession::new(questions);

        // First call stamps the start; second call (finalize) is 40s later.
        let start = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let mut score = ScoreAggregator::start(Arc::new(StepClock::new(
            start,
            Duration::seconds(40),
        )));

        // One right, one wrong.
        for option in ["q1-a", "q2-b"] {
            session.select(option).unwrap();
            let correct = session.submit_current().unwrap();
            score.record(correct, if correct { 10 } else { 0 });
            session.advance().unwrap();
        }
        assert!(session.is_complete());

        let summary = score.finalize();

        assert_eq!(summary.xp, 10);
        assert_eq!(summary.accuracy_pct, 50);
        assert_eq!(summary.minutes, 0);
        assert_eq!(summary.seconds, 40);
    }

    #[test]
    fn test_review_restarts_presentation_without_clearing_answers() {
        let catalog = sample_catalog();
        let questions = catalog.questions("n42").unwrap();
        let mut session = QuizSession::new(questions);
        session.select("q1-a").unwrap();
        session.submit_current().unwrap();
        session.advance().unwrap();
        session.select("q2-b").unwrap();
        session.submit_current().unwrap();
        session.advance().unwrap();
        assert!(session.is_complete());

        session.review();

        let first = session.current().unwrap();
        assert_eq!(first.question().id, "q1");
        // The recorded answer survives review.
        assert!(matches!(
            first.state(),
            QuestionState::Submitted { correct: true, .. }
        ));
    }
}
