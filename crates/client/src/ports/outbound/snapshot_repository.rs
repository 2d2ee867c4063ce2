//! Snapshot persistence port.

use gcms_shared::EnvelopeError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("Failed to serialize snapshot for '{key}': {message}")]
    Serialize { key: String, message: String },

    #[error("Stored snapshot under '{key}' is corrupt: {message}")]
    Corrupt { key: String, message: String },

    #[error("Stored snapshot under '{key}' has version {found}, expected {expected}")]
    VersionMismatch {
        key: String,
        found: u32,
        expected: u32,
    },
}

impl PersistenceError {
    pub fn from_envelope(key: &str, err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Serialize(message) => Self::Serialize {
                key: key.to_string(),
                message,
            },
            EnvelopeError::Malformed(message) => Self::Corrupt {
                key: key.to_string(),
                message,
            },
            EnvelopeError::VersionMismatch { found, expected } => Self::VersionMismatch {
                key: key.to_string(),
                found,
                expected,
            },
        }
    }
}

/// Loads and saves one store's whole snapshot.
///
/// `load` returns `Ok(None)` when nothing has been persisted yet.
pub trait SnapshotRepository<S>: Send + Sync {
    fn load(&self) -> Result<Option<S>, PersistenceError>;

    fn save(&self, snapshot: &S) -> Result<(), PersistenceError>;

    /// Forget the persisted snapshot
    fn clear(&self);

    /// Namespace key the snapshot is stored under
    fn key(&self) -> &str;
}
