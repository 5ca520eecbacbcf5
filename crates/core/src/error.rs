use thiserror::Error;

use crate::model::{DrillSummaryError, WordBankError, WordPairError};
use crate::wordlist::WordListError;

/// Umbrella error for callers that do not care which core step failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    WordPair(#[from] WordPairError),
    #[error(transparent)]
    WordBank(#[from] WordBankError),
    #[error(transparent)]
    WordList(#[from] WordListError),
    #[error(transparent)]
    Summary(#[from] DrillSummaryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{WordBank, WordPair};
    use crate::wordlist::parse_word_list;

    fn load(source: &str) -> Result<usize, Error> {
        let bank = parse_word_list(source)?;
        let extra = WordBank::new(vec![WordPair::new("door", "die Tür")])?;
        Ok(WordBank::merged([&bank, &extra])?.len())
    }

    #[test]
    fn core_errors_convert_into_umbrella() {
        assert_eq!(load("die Haut;skin\n").unwrap(), 2);
        assert!(matches!(load("no separator"), Err(Error::WordList(_))));
        assert!(matches!(
            WordBank::new(Vec::new()).map_err(Error::from),
            Err(Error::WordBank(WordBankError::Empty))
        ));
    }
}
