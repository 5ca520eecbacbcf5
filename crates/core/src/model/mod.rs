mod attempt;
mod bank;
mod ids;
mod language;
mod summary;
mod word;

pub use ids::{BankId, ParseIdError, SessionId};

pub use attempt::Attempt;
pub use bank::{BankMetadata, WordBank, WordBankError};
pub use language::Language;
pub use summary::{DrillSummary, DrillSummaryError};
pub use word::{WordPair, WordPairError};
