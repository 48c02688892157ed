//! Error types for the hres interop layer.
//!
//! Construction of exception values is total: every public constructor
//! succeeds for any well-typed input. The single failure mode in this
//! crate is the legacy-deserialization surface, which is permanently
//! disabled and rejects every payload.

use thiserror::Error;

/// Root error type for the hres interop layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Legacy binary exception deserialization was attempted.
    ///
    /// Cross-process and cross-version exception deserialization is
    /// unsupported on this platform. The rejection is unconditional: no
    /// payload, however well-formed, produces a constructed exception.
    #[error("legacy exception deserialization is not supported on this platform")]
    DeserializationUnsupported,
}

/// Result type used throughout the hres interop layer.
pub type Result<T> = std::result::Result<T, Error>;
