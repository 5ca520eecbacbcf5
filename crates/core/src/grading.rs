//! Answer comparison and hint policy.
//!
//! Answers are compared after trimming leading and trailing whitespace only.
//! Internal whitespace and letter case are significant: many drills test
//! exact spelling, e.g. the article that carries a noun's gender.

/// Hint shown when an answer is judged correct.
pub const AFFIRMATION: &str = "Great :)";

/// Outcome of judging one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    pub correct: bool,
    pub hint: String,
}

/// Strip the whitespace that typed input commonly carries at its edges.
#[must_use]
pub fn normalize(answer: &str) -> &str {
    answer.trim()
}

#[must_use]
pub fn is_correct(expected: &str, submitted: &str) -> bool {
    normalize(submitted) == normalize(expected)
}

/// Cue shown after a submission: the affirmation on success, otherwise the
/// expected answer verbatim.
#[must_use]
pub fn hint_for(expected: &str, correct: bool) -> String {
    if correct {
        AFFIRMATION.to_owned()
    } else {
        expected.to_owned()
    }
}

#[must_use]
pub fn grade(expected: &str, submitted: &str) -> Grade {
    let correct = is_correct(expected, submitted);
    Grade {
        correct,
        hint: hint_for(expected, correct),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(is_correct("Antwort", " Antwort "));
        assert!(is_correct("Antwort", "Antwort\n"));
        assert!(is_correct(" Antwort", "Antwort"));
    }

    #[test]
    fn case_is_significant() {
        assert!(!is_correct("Antwort", "antwort"));
        assert!(!is_correct("die Hand", "die hand"));
    }

    #[test]
    fn internal_whitespace_is_significant() {
        assert!(!is_correct("die Haut", "die  Haut"));
        assert!(!is_correct("die Haut", "dieHaut"));
    }

    #[test]
    fn empty_submission_is_wrong_not_an_error() {
        let outcome = grade("die Haut", "");
        assert!(!outcome.correct);
        assert_eq!(outcome.hint, "die Haut");
    }

    #[test]
    fn correct_answer_gets_affirmation() {
        let outcome = grade("die Haut", "die Haut");
        assert!(outcome.correct);
        assert_eq!(outcome.hint, AFFIRMATION);
    }

    #[test]
    fn wrong_answer_reveals_expected_verbatim() {
        assert_eq!(hint_for("  die Hand ", false), "  die Hand ");
    }
}
