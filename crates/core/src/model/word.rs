use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordPairError {
    #[error("prompt cannot be empty")]
    EmptyPrompt,

    #[error("answer cannot be empty")]
    EmptyAnswer,
}

//
// ─── WORD PAIR ─────────────────────────────────────────────────────────────────
//

/// One prompt/answer unit of a drill vocabulary.
///
/// A pair is plain data: it is checked when a `WordBank` is built from it,
/// which is the only place pairs enter a drill.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    prompt: String,
    answer: String,
}

impl WordPair {
    #[must_use]
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the pair drilled in the opposite direction.
    #[must_use]
    pub fn flip(&self) -> Self {
        Self {
            prompt: self.answer.clone(),
            answer: self.prompt.clone(),
        }
    }

    /// Checks that both sides carry visible text.
    ///
    /// # Errors
    ///
    /// Returns `WordPairError::EmptyPrompt` or `WordPairError::EmptyAnswer`
    /// when a side is empty or whitespace only.
    pub fn validate(&self) -> Result<(), WordPairError> {
        if self.prompt.trim().is_empty() {
            return Err(WordPairError::EmptyPrompt);
        }
        if self.answer.trim().is_empty() {
            return Err(WordPairError::EmptyAnswer);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_pair_passes() {
        assert!(WordPair::new("skin", "die Haut").validate().is_ok());
    }

    #[test]
    fn blank_prompt_is_rejected() {
        let err = WordPair::new("   ", "die Haut").validate().unwrap_err();
        assert_eq!(err, WordPairError::EmptyPrompt);
    }

    #[test]
    fn empty_answer_is_rejected() {
        let err = WordPair::new("skin", "").validate().unwrap_err();
        assert_eq!(err, WordPairError::EmptyAnswer);
    }

    #[test]
    fn flip_swaps_sides() {
        let pair = WordPair::new("hand", "die Hand").flip();
        assert_eq!(pair.prompt(), "die Hand");
        assert_eq!(pair.answer(), "hand");
    }
}
