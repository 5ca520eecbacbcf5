use std::fs;

use drill_core::model::{BankId, Language};
use storage::repository::{BankRepository, StorageError};
use storage::wordlists::{load_word_list_file, load_word_lists};
use storage::Storage;

const BODY: &str = "#input en\n#output de\n#name der Körper;body\ndie Haut;skin\ndie Hand;hand\n";
const HOUSE: &str = "das Haus;house\ndie Tür;door\n";

#[tokio::test]
async fn directory_lists_get_ids_in_file_name_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b_house.txt"), HOUSE).unwrap();
    fs::write(dir.path().join("a_body.txt"), BODY).unwrap();
    fs::write(dir.path().join("notes.md"), "not a list").unwrap();

    let repo = load_word_lists(dir.path()).await.unwrap();
    let entries = repo.list_banks().await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, BankId::new(1));
    assert_eq!(entries[0].metadata.name.as_deref(), Some("body"));
    assert_eq!(entries[0].metadata.output_language, Some(Language::German));
    assert_eq!(entries[0].word_count, 3);
    assert_eq!(entries[1].metadata.name.as_deref(), Some("b_house"));
}

#[tokio::test]
async fn single_file_becomes_bank_one() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("house.txt");
    fs::write(&file, HOUSE).unwrap();

    let storage = Storage::word_lists(&file).await.unwrap();
    let bank = storage.banks.get_bank(BankId::new(1)).await.unwrap();

    assert_eq!(bank.len(), 2);
    assert_eq!(bank.at(0).unwrap().prompt(), "house");
    assert_eq!(bank.at(0).unwrap().answer(), "das Haus");
    assert_eq!(bank.name(), Some("house"));
}

#[tokio::test]
async fn malformed_list_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("broken.txt");
    fs::write(&file, "das Haus house\n").unwrap();

    let err = load_word_list_file(&file).await.unwrap_err();
    match err {
        StorageError::WordList { path, .. } => assert_eq!(path, file),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn empty_directory_has_no_word_lists() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_word_lists(dir.path()).await.unwrap_err();
    assert!(matches!(err, StorageError::NoWordLists(_)));
}

#[tokio::test]
async fn missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_word_lists(dir.path().join("missing")).await.unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }));
}
