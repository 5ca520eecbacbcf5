mod progress;
mod registry;
mod service;

// Public API of the session subsystem.
pub use crate::error::{RegistryError, SessionError};
pub use progress::SessionProgress;
pub use registry::{SessionRegistry, SessionSnapshot, SessionStart, SubmissionOutcome, shuffled};
pub use service::{DrillSession, SessionState, SubmissionResult};
