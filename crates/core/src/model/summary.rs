use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::attempt::Attempt;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DrillSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,
}

/// Aggregate outcome of a finished drill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillSummary {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total: usize,
    correct: usize,
    incorrect: usize,
}

impl DrillSummary {
    /// Build a summary from a session's attempts.
    ///
    /// # Errors
    ///
    /// Returns `DrillSummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    pub fn from_attempts(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        attempts: &[Attempt],
    ) -> Result<Self, DrillSummaryError> {
        if completed_at < started_at {
            return Err(DrillSummaryError::InvalidTimeRange);
        }
        let correct = attempts.iter().filter(|a| a.is_correct()).count();

        Ok(Self {
            started_at,
            completed_at,
            total: attempts.len(),
            correct,
            incorrect: attempts.len() - correct,
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.incorrect
    }

    /// Share of correct answers in percent; `0.0` for an empty drill.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::grade;
    use crate::model::WordPair;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn attempt(answer: &str, submitted: &str) -> Attempt {
        let pair = WordPair::new("prompt", answer);
        Attempt::new(pair, submitted, grade(answer, submitted), fixed_now())
    }

    #[test]
    fn summary_counts_outcomes() {
        let attempts = vec![
            attempt("die Haut", "die Haut"),
            attempt("die Hand", "die hand"),
            attempt("das Ohr", "das Ohr"),
            attempt("der Arm", ""),
        ];
        let done = fixed_now() + Duration::minutes(3);

        let summary = DrillSummary::from_attempts(fixed_now(), done, &attempts).unwrap();

        assert_eq!(summary.total(), 4);
        assert_eq!(summary.correct(), 2);
        assert_eq!(summary.incorrect(), 2);
        assert!((summary.accuracy() - 50.0).abs() < f64::EPSILON);
        assert_eq!(summary.completed_at(), done);
    }

    #[test]
    fn inverted_time_range_is_rejected() {
        let err = DrillSummary::from_attempts(
            fixed_now(),
            fixed_now() - Duration::seconds(1),
            &[],
        )
        .unwrap_err();
        assert_eq!(err, DrillSummaryError::InvalidTimeRange);
    }

    #[test]
    fn empty_drill_has_zero_accuracy() {
        let summary = DrillSummary::from_attempts(fixed_now(), fixed_now(), &[]).unwrap();
        assert!(summary.accuracy().abs() < f64::EPSILON);
    }
}
