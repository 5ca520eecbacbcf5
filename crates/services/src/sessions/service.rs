use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

use drill_core::grading;
use drill_core::model::{Attempt, DrillSummary, WordBank, WordPair};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── SUBMISSION RESULT ─────────────────────────────────────────────────────────
//

/// Everything a front-end needs after one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub correct: bool,
    pub hint: String,
    pub attempt: Attempt,
    /// `None` once the drill is complete.
    pub next_prompt: Option<WordPair>,
}

/// Lifecycle of a drill. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Finished,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One pass through a word bank.
///
/// Every submission is graded, recorded and moves the drill forward, right or
/// wrong; a prompt is never asked twice. The session finishes once the last
/// pair has been answered.
pub struct DrillSession {
    bank: Arc<WordBank>,
    position: usize,
    history: Vec<Attempt>,
    finished: bool,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl DrillSession {
    /// Start a drill at the first pair of `bank`.
    ///
    /// `started_at` should come from the services layer clock.
    #[must_use]
    pub fn new(bank: Arc<WordBank>, started_at: DateTime<Utc>) -> Self {
        // Banks refuse to be empty, but a session must not rely on that.
        let finished = bank.is_empty();
        Self {
            bank,
            position: 0,
            history: Vec::new(),
            finished,
            started_at,
            completed_at: finished.then_some(started_at),
        }
    }

    #[must_use]
    pub fn bank(&self) -> &Arc<WordBank> {
        &self.bank
    }

    /// Index of the pair currently asked; equals the bank length once finished.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.finished {
            SessionState::Finished
        } else {
            SessionState::Active
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// The pair waiting for an answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` once every pair has been answered.
    pub fn current_prompt(&self) -> Result<&WordPair, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        Ok(self.bank.at(self.position)?)
    }

    /// Grade `submitted` against the current pair and advance.
    ///
    /// The text is stored exactly as typed; grading trims it.
    /// `answered_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` if the session is already complete,
    /// leaving it untouched.
    pub fn submit_answer(
        &mut self,
        submitted: &str,
        answered_at: DateTime<Utc>,
    ) -> Result<SubmissionResult, SessionError> {
        let pair = self.current_prompt()?.clone();
        let grade = grading::grade(pair.answer(), submitted);
        let attempt = Attempt::new(pair, submitted, grade, answered_at);

        self.history.push(attempt.clone());
        self.position += 1;
        self.finished = self.position == self.bank.len();
        if self.finished {
            // A wall clock may step backwards mid-drill; never finish before starting.
            self.completed_at = Some(answered_at.max(self.started_at));
        }

        let next_prompt = if self.finished {
            None
        } else {
            Some(self.current_prompt()?.clone())
        };

        Ok(SubmissionResult {
            correct: attempt.is_correct(),
            hint: attempt.hint().to_owned(),
            attempt,
            next_prompt,
        })
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let correct = self.history.iter().filter(|a| a.is_correct()).count();
        SessionProgress {
            total: self.bank.len(),
            answered: self.history.len(),
            remaining: self.bank.len().saturating_sub(self.position),
            correct,
            incorrect: self.history.len() - correct,
            is_complete: self.finished,
        }
    }

    /// Pairs answered wrongly so far, in drill order.
    #[must_use]
    pub fn missed_pairs(&self) -> Vec<&WordPair> {
        self.history
            .iter()
            .filter(|a| !a.is_correct())
            .map(Attempt::pair)
            .collect()
    }

    /// Summary of the drill, available once it is finished.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Summary` if the recorded timestamps are inconsistent.
    pub fn summary(&self) -> Result<Option<DrillSummary>, SessionError> {
        let Some(completed_at) = self.completed_at else {
            return Ok(None);
        };
        Ok(Some(DrillSummary::from_attempts(
            self.started_at,
            completed_at,
            &self.history,
        )?))
    }
}

impl fmt::Debug for DrillSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrillSession")
            .field("bank_len", &self.bank.len())
            .field("position", &self.position)
            .field("history_len", &self.history.len())
            .field("finished", &self.finished)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
