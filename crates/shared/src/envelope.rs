//! Versioned wrapper around every persisted snapshot.
//!
//! Stored form: `{ "state": <snapshot>, "version": <u32> }`.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(String),

    #[error("Malformed snapshot: {0}")]
    Malformed(String),

    #[error("Snapshot version {found} does not match expected version {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedEnvelope<T> {
    pub state: T,
    pub version: u32,
}

/// Serialize `state` inside an envelope stamped with `version`.
pub fn encode<T: Serialize>(state: &T, version: u32) -> Result<String, EnvelopeError> {
    serde_json::to_string(&PersistedEnvelope { state, version })
        .map_err(|e| EnvelopeError::Serialize(e.to_string()))
}

/// Parse an envelope and return its state if the version matches.
pub fn decode<T: DeserializeOwned>(raw: &str, expected_version: u32) -> Result<T, EnvelopeError> {
    let envelope: PersistedEnvelope<T> =
        serde_json::from_str(raw).map_err(|e| EnvelopeError::Malformed(e.to_string()))?;

    if envelope.version != expected_version {
        return Err(EnvelopeError::VersionMismatch {
            found: envelope.version,
            expected: expected_version,
        });
    }

    Ok(envelope.state)
}
