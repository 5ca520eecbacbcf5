#![forbid(unsafe_code)]

pub mod repository;
pub mod wordlists;

pub use repository::{BankEntry, BankRepository, InMemoryBankRepository, Storage, StorageError};
