use std::sync::Arc;

use drill_core::model::{BankId, WordBank};
use storage::repository::{BankEntry, BankRepository, StorageError};

use crate::error::BankServiceError;

/// Read access to the word banks sessions can be started from.
#[derive(Clone)]
pub struct BankService {
    banks: Arc<dyn BankRepository>,
}

impl BankService {
    #[must_use]
    pub fn new(banks: Arc<dyn BankRepository>) -> Self {
        Self { banks }
    }

    /// List available banks ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `BankServiceError::Storage` if repository access fails.
    pub async fn list_banks(&self) -> Result<Vec<BankEntry>, BankServiceError> {
        Ok(self.banks.list_banks().await?)
    }

    /// Fetch a bank by ID.
    ///
    /// # Errors
    ///
    /// Returns `BankServiceError::UnknownBank` when the bank does not exist.
    /// Returns `BankServiceError::Storage` if repository access fails.
    pub async fn get_bank(&self, bank_id: BankId) -> Result<Arc<WordBank>, BankServiceError> {
        match self.banks.get_bank(bank_id).await {
            Ok(bank) => Ok(bank),
            Err(StorageError::NotFound) => Err(BankServiceError::UnknownBank(bank_id)),
            Err(err) => Err(err.into()),
        }
    }
}
