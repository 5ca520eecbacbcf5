//! Loading word lists from the filesystem.
//!
//! A path may name a single list or a directory. In a directory every `*.txt`
//! file becomes one bank; banks are numbered from 1 in file-name order so ids
//! stay stable between restarts as long as the directory does.

use std::path::{Path, PathBuf};

use drill_core::model::{BankId, WordBank};
use drill_core::wordlist::parse_word_list;
use tracing::{debug, info};

use crate::repository::{BankRepository, InMemoryBankRepository, StorageError};

const WORD_LIST_EXTENSION: &str = "txt";

/// Read and parse one word list.
///
/// A list without a `#name` directive is named after its file stem.
///
/// # Errors
///
/// Returns `StorageError::Io` if the file cannot be read and
/// `StorageError::WordList` if its contents are malformed.
pub async fn load_word_list_file(path: impl AsRef<Path>) -> Result<WordBank, StorageError> {
    let path = path.as_ref();
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let bank = parse_word_list(&source).map_err(|source| StorageError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    if bank.name().is_some() {
        return Ok(bank);
    }
    let mut metadata = bank.metadata().clone();
    metadata.name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned());
    Ok(bank.with_metadata(metadata))
}

/// Load a word list file, or every list in a directory, into a repository.
///
/// # Errors
///
/// Returns `StorageError::NoWordLists` for a directory without lists, and
/// propagates read/parse failures of any single list.
pub async fn load_word_lists(path: impl Into<PathBuf>) -> Result<InMemoryBankRepository, StorageError> {
    let path = path.into();
    let io_error = |source| StorageError::Io {
        path: path.clone(),
        source,
    };

    let files = if tokio::fs::metadata(&path).await.map_err(io_error)?.is_dir() {
        list_word_list_files(&path).await?
    } else {
        vec![path.clone()]
    };
    if files.is_empty() {
        return Err(StorageError::NoWordLists(path));
    }

    let repo = InMemoryBankRepository::new();
    for (id, file) in (1_u64..).zip(files) {
        let bank = load_word_list_file(&file).await?;
        info!(
            bank_id = id,
            file = %file.display(),
            words = bank.len(),
            "loaded word list"
        );
        repo.upsert_bank(BankId::new(id), bank).await?;
    }
    Ok(repo)
}

async fn list_word_list_files(dir: &Path) -> Result<Vec<PathBuf>, StorageError> {
    let io_error = |source| StorageError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_error)?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
        let path = entry.path();
        let is_list = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(WORD_LIST_EXTENSION));
        if is_list && entry.file_type().await.map_err(io_error)?.is_file() {
            files.push(path);
        } else {
            debug!(path = %path.display(), "skipping non word list entry");
        }
    }
    files.sort();
    Ok(files)
}
