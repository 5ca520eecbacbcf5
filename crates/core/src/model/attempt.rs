use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::grading::Grade;
use crate::model::word::WordPair;

/// Record of a single submission within a drill session.
///
/// Attempts are written once and never changed; a session's history is the
/// ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pair: WordPair,
    submitted: String,
    correct: bool,
    hint: String,
    attempted_at: DateTime<Utc>,
}

impl Attempt {
    #[must_use]
    pub fn new(
        pair: WordPair,
        submitted: impl Into<String>,
        grade: Grade,
        attempted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            pair,
            submitted: submitted.into(),
            correct: grade.correct,
            hint: grade.hint,
            attempted_at,
        }
    }

    #[must_use]
    pub fn pair(&self) -> &WordPair {
        &self.pair
    }

    /// The answer exactly as typed, untrimmed.
    #[must_use]
    pub fn submitted(&self) -> &str {
        &self.submitted
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn attempted_at(&self) -> DateTime<Utc> {
        self.attempted_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::grade;
    use crate::time::fixed_now;

    #[test]
    fn keeps_raw_submission() {
        let pair = WordPair::new("skin", "die Haut");
        let outcome = grade(pair.answer(), " die Haut\n");
        let attempt = Attempt::new(pair.clone(), " die Haut\n", outcome, fixed_now());

        assert_eq!(attempt.submitted(), " die Haut\n");
        assert!(attempt.is_correct());
        assert_eq!(attempt.pair(), &pair);
        assert_eq!(attempt.attempted_at(), fixed_now());
    }
}
