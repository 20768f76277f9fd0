//! Error types for the stores crate.

use thiserror::Error;

/// Errors that can occur while persisting or restoring store state.
///
/// Read-side corruption is deliberately NOT represented here: a snapshot
/// that fails to decode degrades to the store's default state (with a
/// warning) instead of failing the caller. Only genuine I/O problems and
/// encode failures surface as errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing medium could not be read or written
    #[error("storage I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A snapshot could not be encoded for writing
    #[error("failed to encode state '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StorageError>;
