//! In-memory record store.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{generate_token, Record, RecordId, RecordStore, StoreError, MAX_ID_ATTEMPTS};

/// HashMap-backed store.
///
/// Fulfills the same contract as [`crate::SqliteStore`] without touching
/// disk. Useful as a test double and for throwaway sessions where
/// persistence across runs is not wanted.
#[derive(Debug, Default)]
pub struct MemStore {
    records: Mutex<HashMap<String, Record>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemStore {
    fn create(&self, packed: &[u8], symbol_count: usize) -> Result<RecordId, StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::Insert("store lock poisoned".into()))?;

        for _ in 0..MAX_ID_ATTEMPTS {
            let token = generate_token();
            if records.contains_key(&token) {
                continue;
            }

            let id = RecordId::from(token.clone());
            records.insert(
                token,
                Record {
                    id: id.clone(),
                    packed: packed.to_vec(),
                    symbol_count,
                    created_at: SystemTime::now()
                        .duration_since(UNIX_EPOCH)
                        .map(|d| d.as_secs() as i64)
                        .unwrap_or(0),
                },
            );
            return Ok(id);
        }

        Err(StoreError::Duplicate)
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<Record>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|_| StoreError::Query("store lock poisoned".into()))?;
        Ok(records.get(id.as_str()).cloned())
    }
}
