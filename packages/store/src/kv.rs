//! # Durable key/value storage
//!
//! The client persists exactly two small entries between runs: the current
//! [`User`](crate::User) as JSON and the dark-mode flag. [`KeyValueStore`]
//! abstracts where they live so the same session and theme logic works
//! against browser `localStorage` ([`crate::LocalStorageStore`]), a directory
//! of files on desktop ([`crate::FileStore`]) or memory in tests
//! ([`crate::MemoryStore`]).
//!
//! Reads never fail: a missing, unreadable or undecodable entry is reported
//! as absent. Writes return [`StorageError`] so callers can log them.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Failure to write or encode a stored entry.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("failed to write entry `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode entry: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Synchronous string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Read and decode a JSON entry; undecodable entries read as absent.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T>
    where
        Self: Sized,
    {
        let raw = self.get(key)?;
        serde_json::from_str(&raw).ok()
    }

    /// Encode `value` as JSON and store it under `key`.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}
