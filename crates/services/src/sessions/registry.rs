use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use rand::rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use drill_core::model::{BankId, DrillSummary, SessionId, WordBank, WordBankError, WordPair};

use super::progress::SessionProgress;
use super::service::{DrillSession, SubmissionResult};
use crate::error::RegistryError;
use crate::{BankService, Clock};

type SharedSession = Arc<Mutex<DrillSession>>;

/// Handle and first prompt of a newly created session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStart {
    pub session_id: SessionId,
    pub prompt: WordPair,
}

/// Result of submitting an answer through the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub session_id: SessionId,
    pub result: SubmissionResult,
    pub progress: SessionProgress,
}

/// Point-in-time view of a registered session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub current_prompt: Option<WordPair>,
    pub progress: SessionProgress,
    pub summary: Option<DrillSummary>,
}

/// Maps session handles to live drill sessions.
///
/// Each session sits behind its own mutex, so submissions against one
/// session are serialized while different sessions proceed independently.
/// The map lock is only held to look a session up, never across `.await`.
#[derive(Clone)]
pub struct SessionRegistry {
    clock: Clock,
    banks: BankService,
    default_bank: BankId,
    shuffle: bool,
    sessions: Arc<Mutex<HashMap<SessionId, SharedSession>>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new(clock: Clock, banks: BankService) -> Self {
        Self {
            clock,
            banks,
            default_bank: BankId::new(1),
            shuffle: false,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Bank used when `create_session` is called without one.
    #[must_use]
    pub fn with_default_bank(mut self, bank_id: BankId) -> Self {
        self.default_bank = bank_id;
        self
    }

    /// Drill each new session in a random order instead of bank order.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn banks(&self) -> &BankService {
        &self.banks
    }

    /// Start a drill over `bank_id`, or the default bank.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Bank` when the bank cannot be loaded.
    pub async fn create_session(
        &self,
        bank_id: Option<BankId>,
    ) -> Result<SessionStart, RegistryError> {
        let bank_id = bank_id.unwrap_or(self.default_bank);
        let mut bank = self.banks.get_bank(bank_id).await?;
        if self.shuffle {
            bank = Arc::new(shuffled(&bank)?);
        }

        let session = DrillSession::new(bank, self.clock.now());
        let prompt = session.current_prompt()?.clone();
        let session_id = SessionId::generate();
        self.lock_sessions()?
            .insert(session_id, Arc::new(Mutex::new(session)));

        info!(%session_id, %bank_id, "drill session created");
        Ok(SessionStart { session_id, prompt })
    }

    /// Submit an answer to the session's current prompt.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownSession` for unknown handles and
    /// `RegistryError::Session(SessionError::Finished)` once the drill is over.
    pub fn submit(
        &self,
        session_id: SessionId,
        submitted: &str,
    ) -> Result<SubmissionOutcome, RegistryError> {
        let shared = self.session(session_id)?;
        let mut session = shared.lock().map_err(|_| RegistryError::Poisoned)?;

        let result = session.submit_answer(submitted, self.clock.now())?;
        let progress = session.progress();
        debug!(
            %session_id,
            correct = result.correct,
            answered = progress.answered,
            total = progress.total,
            "answer submitted"
        );
        if progress.is_complete {
            info!(%session_id, accuracy = progress.accuracy(), "drill session finished");
        }

        Ok(SubmissionOutcome {
            session_id,
            result,
            progress,
        })
    }

    /// Current prompt, progress and summary of a session.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownSession` for unknown handles.
    pub fn snapshot(&self, session_id: SessionId) -> Result<SessionSnapshot, RegistryError> {
        let shared = self.session(session_id)?;
        let session = shared.lock().map_err(|_| RegistryError::Poisoned)?;

        Ok(SessionSnapshot {
            session_id,
            current_prompt: session.current_prompt().ok().cloned(),
            progress: session.progress(),
            summary: session.summary()?,
        })
    }

    /// Drop a session. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Poisoned` if the registry lock is poisoned.
    pub fn discard(&self, session_id: SessionId) -> Result<bool, RegistryError> {
        let removed = self.lock_sessions()?.remove(&session_id).is_some();
        if removed {
            debug!(%session_id, "drill session discarded");
        }
        Ok(removed)
    }

    /// Number of registered sessions, finished ones included.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Poisoned` if the registry lock is poisoned.
    pub fn session_count(&self) -> Result<usize, RegistryError> {
        Ok(self.lock_sessions()?.len())
    }

    fn session(&self, session_id: SessionId) -> Result<SharedSession, RegistryError> {
        self.lock_sessions()?
            .get(&session_id)
            .cloned()
            .ok_or(RegistryError::UnknownSession(session_id))
    }

    fn lock_sessions(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<SessionId, SharedSession>>, RegistryError> {
        self.sessions.lock().map_err(|_| RegistryError::Poisoned)
    }
}

/// Copy of `bank` with its pairs in random order; metadata is kept.
///
/// # Errors
///
/// Only fails if `bank` itself would not validate.
pub fn shuffled(bank: &WordBank) -> Result<WordBank, WordBankError> {
    let mut pairs = bank.pairs().to_vec();
    pairs.shuffle(&mut rng());
    Ok(WordBank::new(pairs)?.with_metadata(bank.metadata().clone()))
}
