use serde::Serialize;

/// Aggregated view of drill progress, useful for front-ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// Share of answered pairs judged correct, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy(&self) -> f64 {
        if self.answered == 0 {
            return 0.0;
        }
        self.correct as f64 / self.answered as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_counts_answered_pairs_only() {
        let progress = SessionProgress {
            total: 10,
            answered: 4,
            remaining: 6,
            correct: 3,
            incorrect: 1,
            is_complete: false,
        };
        assert!((progress.accuracy() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn accuracy_before_any_answer_is_zero() {
        let progress = SessionProgress {
            total: 2,
            answered: 0,
            remaining: 2,
            correct: 0,
            incorrect: 0,
            is_complete: false,
        };
        assert!(progress.accuracy().abs() < f64::EPSILON);
    }
}
