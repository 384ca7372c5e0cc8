use ahash::AHashMap;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StorageError;

/// A durable key-value store, scoped per user.
///
/// Implementations are expected to survive process restarts (the browser
/// counterpart survives page reloads); values are opaque bytes owned by
/// the caller.
pub trait UsageStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}

/// In-memory store used by tests and the CLI tool.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: AHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UsageStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// The persisted execution counter for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub executions: u32,
}

impl UsageRecord {
    fn to_bytes(self) -> Result<Vec<u8>, StorageError> {
        encode_to_vec(self, standard()).map_err(|e| StorageError::Codec(e.to_string()))
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, StorageError> {
        decode_from_slice(bytes, standard())
            .map(|(record, _)| record)
            .map_err(|e| StorageError::Codec(e.to_string()))
    }
}

/// The single accessor for the per-user execution counter.
///
/// The store is the source of truth: every read goes back to it, and the
/// only mutations are [`UsageLedger::record_execution`] (one atomic
/// read-increment-write per confirmed submission) and
/// [`UsageLedger::reset`], which exists for support and test tooling.
/// Nothing in the crate decrements the counter implicitly.
#[derive(Debug)]
pub struct UsageLedger<S: UsageStore> {
    store: S,
    key: String,
}

impl<S: UsageStore> UsageLedger<S> {
    /// Opens the ledger for a user. The record is created lazily on the
    /// first execution; a missing key reads as zero.
    pub fn open(store: S, user_id: &str) -> Self {
        Self {
            store,
            key: format!("usage/{user_id}/executions"),
        }
    }

    fn load(&self) -> Result<UsageRecord, StorageError> {
        match self.store.get(&self.key)? {
            Some(bytes) => UsageRecord::from_bytes(&bytes),
            None => Ok(UsageRecord::default()),
        }
    }

    /// Total executions recorded so far.
    pub fn count(&self) -> Result<u32, StorageError> {
        Ok(self.load()?.executions)
    }

    /// Adds exactly one execution and persists the record. Returns the
    /// new total.
    pub fn record_execution(&mut self) -> Result<u32, StorageError> {
        let mut record = self.load()?;
        record.executions += 1;
        self.store.set(&self.key, &record.to_bytes()?)?;
        debug!(key = %self.key, executions = record.executions, "recorded execution");
        Ok(record.executions)
    }

    /// Zeroes the counter. Support/testing only — never called from the
    /// submission path.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.store
            .set(&self.key, &UsageRecord::default().to_bytes()?)
    }

    /// Read access to the underlying store (shared with other ledgers in
    /// tests).
    pub fn store(&self) -> &S {
        &self.store
    }
}
