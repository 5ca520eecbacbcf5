use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::language::Language;
use crate::model::word::{WordPair, WordPairError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordBankError {
    #[error("word bank must contain at least one pair")]
    Empty,

    #[error("invalid pair at index {index}: {reason}")]
    InvalidPair {
        index: usize,
        #[source]
        reason: WordPairError,
    },

    #[error("index {index} is out of range for a bank of {len} pairs")]
    OutOfRange { index: usize, len: usize },
}

//
// ─── METADATA ──────────────────────────────────────────────────────────────────
//

/// Descriptive data attached to a bank; none of it affects drilling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankMetadata {
    pub name: Option<String>,
    /// Language of the prompts.
    pub input_language: Option<Language>,
    /// Language of the expected answers.
    pub output_language: Option<Language>,
}

impl BankMetadata {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    fn flipped(&self) -> Self {
        Self {
            name: self.name.clone(),
            input_language: self.output_language,
            output_language: self.input_language,
        }
    }
}

//
// ─── WORD BANK ─────────────────────────────────────────────────────────────────
//

/// Ordered, immutable catalog of word pairs.
///
/// Never empty once built. Sessions share a bank through `Arc<WordBank>` and
/// only ever read from it, so order here is drill order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    pairs: Vec<WordPair>,
    metadata: BankMetadata,
}

impl WordBank {
    /// Build a bank from pairs, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::Empty` when `pairs` is empty.
    /// Returns `WordBankError::InvalidPair` for the first pair with an empty side.
    pub fn new(pairs: Vec<WordPair>) -> Result<Self, WordBankError> {
        if pairs.is_empty() {
            return Err(WordBankError::Empty);
        }
        for (index, pair) in pairs.iter().enumerate() {
            pair.validate()
                .map_err(|reason| WordBankError::InvalidPair { index, reason })?;
        }

        Ok(Self {
            pairs,
            metadata: BankMetadata::default(),
        })
    }

    /// Concatenate banks in the given order.
    ///
    /// The metadata of the first bank is kept.
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::Empty` when no bank is given.
    pub fn merged<'a>(banks: impl IntoIterator<Item = &'a WordBank>) -> Result<Self, WordBankError> {
        let mut pairs = Vec::new();
        let mut metadata = None;
        for bank in banks {
            if metadata.is_none() {
                metadata = Some(bank.metadata.clone());
            }
            pairs.extend(bank.pairs.iter().cloned());
        }

        Ok(Self::new(pairs)?.with_metadata(metadata.unwrap_or_default()))
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: BankMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    #[must_use]
    pub fn metadata(&self) -> &BankMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    /// Fetch the pair at `index`.
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::OutOfRange` when `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&WordPair, WordBankError> {
        self.pairs.get(index).ok_or(WordBankError::OutOfRange {
            index,
            len: self.pairs.len(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordPair> {
        self.pairs.iter()
    }

    /// Returns a bank that drills answers as prompts, languages swapped.
    #[must_use]
    pub fn flip(&self) -> Self {
        Self {
            pairs: self.pairs.iter().map(WordPair::flip).collect(),
            metadata: self.metadata.flipped(),
        }
    }
}

impl<'a> IntoIterator for &'a WordBank {
    type Item = &'a WordPair;
    type IntoIter = std::slice::Iter<'a, WordPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn body_parts() -> WordBank {
        WordBank::new(vec![
            WordPair::new("skin", "die Haut"),
            WordPair::new("hand", "die Hand"),
        ])
        .unwrap()
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert_eq!(WordBank::new(Vec::new()).unwrap_err(), WordBankError::Empty);
    }

    #[test]
    fn invalid_pair_reports_its_index() {
        let err = WordBank::new(vec![
            WordPair::new("skin", "die Haut"),
            WordPair::new("hand", " "),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            WordBankError::InvalidPair {
                index: 1,
                reason: WordPairError::EmptyAnswer
            }
        );
    }

    #[test]
    fn order_is_preserved() {
        let bank = body_parts();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.at(0).unwrap().prompt(), "skin");
        assert_eq!(bank.at(1).unwrap().prompt(), "hand");
    }

    #[test]
    fn at_out_of_range_fails() {
        let err = body_parts().at(2).unwrap_err();
        assert_eq!(err, WordBankError::OutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn flip_swaps_pairs_and_languages() {
        let bank = body_parts().with_metadata(BankMetadata {
            name: Some("Body".into()),
            input_language: Some(Language::English),
            output_language: Some(Language::German),
        });

        let flipped = bank.flip();
        assert_eq!(flipped.at(0).unwrap().prompt(), "die Haut");
        assert_eq!(flipped.metadata().input_language, Some(Language::German));
        assert_eq!(flipped.metadata().output_language, Some(Language::English));
        assert_eq!(flipped.name(), Some("Body"));
    }

    #[test]
    fn merged_concatenates_in_order() {
        let first = body_parts().with_metadata(BankMetadata::named("first"));
        let second = WordBank::new(vec![WordPair::new("ear", "das Ohr")])
            .unwrap()
            .with_metadata(BankMetadata::named("second"));

        let merged = WordBank::merged([&first, &second]).unwrap();
        let prompts: Vec<_> = merged.iter().map(WordPair::prompt).collect();
        assert_eq!(prompts, ["skin", "hand", "ear"]);
        assert_eq!(merged.name(), Some("first"));
    }

    #[test]
    fn merged_without_banks_is_empty() {
        let none: [&WordBank; 0] = [];
        assert_eq!(WordBank::merged(none).unwrap_err(), WordBankError::Empty);
    }
}
