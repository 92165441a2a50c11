//! Identifier-keyed persistence for packed sequences.
//!
//! A record is the immutable pair `(packed bytes, symbol count)` stored
//! under an opaque, store-generated identifier. The [`RecordStore`] trait
//! is the whole contract the codec side relies on: create once, fetch by
//! id, never mutate. [`SqliteStore`] persists records in SQLite;
//! [`MemStore`] is the in-memory substitute used in tests and for
//! throwaway sessions.

mod error;
mod memory;
mod sqlite;

use core::fmt;

use serde::{Deserialize, Serialize};

pub use error::StoreError;
pub use memory::MemStore;
pub use sqlite::{SqliteStore, StoreStats};

/// Opaque record identifier.
///
/// Generated by a store at create time and treated as an uninterpreted
/// token everywhere else, so stores remain substitutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for RecordId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable stored sequence record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    /// Packed 2-bit representation, round-tripped byte-for-byte.
    pub packed: Vec<u8>,
    /// Count of symbols encoded, needed to strip decode-time padding.
    pub symbol_count: usize,
    /// Creation time, seconds since the Unix epoch.
    pub created_at: i64,
}

/// Storage contract required by the encode/decode paths.
///
/// `create` persists an immutable record under a freshly generated unique
/// identifier and must never silently overwrite an existing record.
/// `fetch` resolves an identifier to its record, with `Ok(None)` as the
/// distinguishable not-found signal. No update or delete is part of the
/// contract; records are immutable once created, which keeps concurrent
/// reads safe without coordination.
pub trait RecordStore {
    fn create(&self, packed: &[u8], symbol_count: usize) -> Result<RecordId, StoreError>;

    fn fetch(&self, id: &RecordId) -> Result<Option<Record>, StoreError>;
}

/// Attempts at minting a fresh identifier before giving up with
/// [`StoreError::Duplicate`].
pub(crate) const MAX_ID_ATTEMPTS: usize = 4;

/// Mint a random identifier token: 16 random bytes, hex-encoded.
pub(crate) fn generate_token() -> String {
    use rand::Rng;

    let mut bytes = [0u8; 16];
    rand::thread_rng().fill(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
