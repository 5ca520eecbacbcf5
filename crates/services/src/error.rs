//! Shared error types for the services crate.

use thiserror::Error;

use drill_core::model::{BankId, DrillSummaryError, SessionId, WordBankError};
use storage::repository::StorageError;

/// Errors emitted by `BankService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankServiceError {
    #[error("word bank {0} does not exist")]
    UnknownBank(BankId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by a drill session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session already completed")]
    Finished,
    #[error(transparent)]
    Bank(#[from] WordBankError),
    #[error(transparent)]
    Summary(#[from] DrillSummaryError),
}

/// Errors emitted by `SessionRegistry`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("unknown session {0}")]
    UnknownSession(SessionId),
    #[error("session registry lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Bank(#[from] BankServiceError),
    #[error(transparent)]
    InvalidBank(#[from] WordBankError),
}

impl RegistryError {
    /// True when the caller tried to keep drilling a completed session.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, RegistryError::Session(SessionError::Finished))
    }
}
