#![forbid(unsafe_code)]

pub mod bank_service;
pub mod error;
pub mod sessions;

pub use drill_core::Clock;

pub use bank_service::BankService;
pub use error::{BankServiceError, RegistryError, SessionError};

pub use sessions::{
    DrillSession, SessionProgress, SessionRegistry, SessionSnapshot, SessionStart, SessionState,
    SubmissionOutcome, SubmissionResult, shuffled,
};
