use async_trait::async_trait;
use drill_core::model::{BankId, BankMetadata, WordBank};
use drill_core::wordlist::WordListError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by bank sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid word list {path}: {source}")]
    WordList {
        path: PathBuf,
        #[source]
        source: WordListError,
    },

    #[error("no word lists found in {0}")]
    NoWordLists(PathBuf),
}

/// Listing shape for a stored bank; avoids handing out every pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankEntry {
    pub id: BankId,
    #[serde(flatten)]
    pub metadata: BankMetadata,
    pub word_count: usize,
}

impl BankEntry {
    #[must_use]
    pub fn from_bank(id: BankId, bank: &WordBank) -> Self {
        Self {
            id,
            metadata: bank.metadata().clone(),
            word_count: bank.len(),
        }
    }
}

/// Repository contract for word banks.
#[async_trait]
pub trait BankRepository: Send + Sync {
    /// Persist or replace a bank under `id`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the bank cannot be stored.
    async fn upsert_bank(&self, id: BankId, bank: WordBank) -> Result<(), StorageError>;

    /// Fetch a bank by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_bank(&self, id: BankId) -> Result<Arc<WordBank>, StorageError>;

    /// List every bank ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the listing cannot be produced.
    async fn list_banks(&self) -> Result<Vec<BankEntry>, StorageError>;
}

/// In-memory bank repository; also the landing place for word lists read from disk.
#[derive(Clone, Debug, Default)]
pub struct InMemoryBankRepository {
    banks: Arc<Mutex<BTreeMap<BankId, Arc<WordBank>>>>,
}

impl InMemoryBankRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BankRepository for InMemoryBankRepository {
    async fn upsert_bank(&self, id: BankId, bank: WordBank) -> Result<(), StorageError> {
        let mut guard = self
            .banks
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(id, Arc::new(bank));
        Ok(())
    }

    async fn get_bank(&self, id: BankId) -> Result<Arc<WordBank>, StorageError> {
        let guard = self
            .banks
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.get(&id).cloned().ok_or(StorageError::NotFound)
    }

    async fn list_banks(&self) -> Result<Vec<BankEntry>, StorageError> {
        let guard = self
            .banks
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard
            .iter()
            .map(|(id, bank)| BankEntry::from_bank(*id, bank))
            .collect())
    }
}

/// Bank source behind a trait object so callers can swap backends.
#[derive(Clone)]
pub struct Storage {
    pub banks: Arc<dyn BankRepository>,
}

impl Storage {
    /// Build a `Storage` from a word list file or a directory of them.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lists cannot be read or parsed.
    pub async fn word_lists(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let repo = crate::wordlists::load_word_lists(path).await?;
        Ok(Self {
            banks: Arc::new(repo),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::model::WordPair;

    fn build_bank(name: &str, words: usize) -> WordBank {
        let pairs = (1..=words)
            .map(|i| WordPair::new(format!("Q{i}"), format!("A{i}")))
            .collect();
        WordBank::new(pairs)
            .unwrap()
            .with_metadata(BankMetadata::named(name))
    }

    #[tokio::test]
    async fn stores_and_fetches_banks() {
        let repo = InMemoryBankRepository::new();
        repo.upsert_bank(BankId::new(1), build_bank("one", 2))
            .await
            .unwrap();

        let bank = repo.get_bank(BankId::new(1)).await.unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.name(), Some("one"));
    }

    #[tokio::test]
    async fn missing_bank_is_not_found() {
        let repo = InMemoryBankRepository::new();
        let err = repo.get_bank(BankId::new(9)).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn listing_is_ordered_by_id() {
        let repo = InMemoryBankRepository::new();
        repo.upsert_bank(BankId::new(2), build_bank("two", 1))
            .await
            .unwrap();
        repo.upsert_bank(BankId::new(1), build_bank("one", 3))
            .await
            .unwrap();

        let entries = repo.list_banks().await.unwrap();
        let ids: Vec<_> = entries.iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(entries[0].word_count, 3);
        assert_eq!(entries[1].metadata.name.as_deref(), Some("two"));
    }

    #[tokio::test]
    async fn fetched_banks_share_one_allocation() {
        let repo = InMemoryBankRepository::new();
        repo.upsert_bank(BankId::new(1), build_bank("one", 1))
            .await
            .unwrap();

        let a = repo.get_bank(BankId::new(1)).await.unwrap();
        let b = repo.get_bank(BankId::new(1)).await.unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
