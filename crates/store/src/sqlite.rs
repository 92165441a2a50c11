//! SQLite-backed record store.

use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{generate_token, Record, RecordId, RecordStore, StoreError, MAX_ID_ATTEMPTS};

/// SQLite connection wrapper with schema management.
///
/// The connection sits behind a mutex so the store can be shared across
/// threads; records themselves are immutable once inserted, so fetches
/// need no coordination beyond the connection itself.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
    db_path: String,
}

impl SqliteStore {
    /// Open (or create) a store at the specified path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let conn =
            Connection::open(&path_str).map_err(|e| StoreError::Connection(e.to_string()))?;

        // Performance pragmas for faster inserts
        conn.execute_batch(
            "PRAGMA synchronous = NORMAL;
             PRAGMA journal_mode = WAL;
             PRAGMA temp_store = MEMORY;",
        )
        .map_err(|e| StoreError::Initialization(e.to_string()))?;

        let db = Self {
            conn: Mutex::new(conn),
            db_path: path_str,
        };

        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize database schema.
    fn initialize_schema(&self) -> Result<(), StoreError> {
        self.lock_conn()?
            .execute_batch(
                "-- One row per stored sequence, immutable after insert
                CREATE TABLE IF NOT EXISTS sequences (
                    id TEXT PRIMARY KEY,
                    packed BLOB NOT NULL,      -- 2-bit packed representation
                    symbol_count INTEGER NOT NULL,
                    created_at INTEGER NOT NULL
                );",
            )
            .map_err(|e| StoreError::Initialization(e.to_string()))?;

        Ok(())
    }

    fn lock_conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Connection("connection lock poisoned".into()))
    }

    /// Get database path.
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Close the store and clean up WAL files.
    pub fn close(self) -> Result<(), StoreError> {
        let conn = self
            .conn
            .into_inner()
            .map_err(|_| StoreError::Close("connection lock poisoned".into()))?;

        // Checkpoint and truncate WAL
        if let Err(e) = conn.execute_batch(
            "PRAGMA wal_checkpoint(TRUNCATE);
             PRAGMA journal_mode = DELETE;",
        ) {
            eprintln!("Warning: failed to checkpoint/truncate WAL: {e}");
        }

        conn.close()
            .map_err(|(_conn, e)| StoreError::Close(e.to_string()))?;

        // Remove WAL/SHM files
        for suffix in &["-wal", "-shm"] {
            let fname = format!("{}{}", self.db_path, suffix);
            if let Err(e) = std::fs::remove_file(&fname) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    eprintln!("Warning: failed to remove {fname}: {e}");
                }
            }
        }

        Ok(())
    }

    /// Get store statistics.
    pub fn stats(&self) -> Result<StoreStats, StoreError> {
        let conn = self.lock_conn()?;
        let (records, total_symbols, total_packed_bytes) = conn
            .query_row(
                "SELECT COUNT(*),
                        COALESCE(SUM(symbol_count), 0),
                        COALESCE(SUM(LENGTH(packed)), 0)
                 FROM sequences",
                [],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, i64>(1)?,
                        row.get::<_, i64>(2)?,
                    ))
                },
            )
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(StoreStats {
            records: records as usize,
            total_symbols: total_symbols as usize,
            total_packed_bytes: total_packed_bytes as usize,
        })
    }
}

impl RecordStore for SqliteStore {
    fn create(&self, packed: &[u8], symbol_count: usize) -> Result<RecordId, StoreError> {
        let conn = self.lock_conn()?;
        let created_at = unix_now();

        // The primary key makes an id collision a constraint failure, never
        // a silent overwrite; retry with a fresh token a bounded number of
        // times.
        for _ in 0..MAX_ID_ATTEMPTS {
            let token = generate_token();
            let result = conn.execute(
                "INSERT INTO sequences (id, packed, symbol_count, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![token, packed, symbol_count as i64, created_at],
            );

            match result {
                Ok(_) => return Ok(RecordId::from(token)),
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.code == ErrorCode::ConstraintViolation =>
                {
                    continue;
                }
                Err(e) => return Err(StoreError::Insert(e.to_string())),
            }
        }

        Err(StoreError::Duplicate)
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<Record>, StoreError> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT packed, symbol_count, created_at
                 FROM sequences WHERE id = ?1",
            )
            .map_err(|e| StoreError::Query(e.to_string()))?;

        stmt.query_row(params![id.as_str()], |row| {
            Ok(Record {
                id: id.clone(),
                packed: row.get::<_, Vec<u8>>(0)?,
                symbol_count: row.get::<_, i64>(1)? as usize,
                created_at: row.get::<_, i64>(2)?,
            })
        })
        .optional()
        .map_err(|e| StoreError::Query(e.to_string()))
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Store statistics.
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub records: usize,
    pub total_symbols: usize,
    pub total_packed_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_store_creation() {
        let temp = tempdir().expect("Failed to create temp dir");
        let path = temp.path().join("store.db");

        let store = SqliteStore::open(&path).expect("Failed to create store");
        assert_eq!(store.path(), path.to_string_lossy());
        assert!(path.exists());

        store.close().expect("Failed to close store");
    }

    #[test]
    fn test_create_and_fetch() {
        let temp = tempdir().expect("Failed to create temp dir");
        let store =
            SqliteStore::open(temp.path().join("store.db")).expect("Failed to create store");

        let packed = vec![0b00011011, 0b11000000];
        let id = store.create(&packed, 5).expect("Failed to create record");

        let record = store
            .fetch(&id)
            .expect("Failed to fetch record")
            .expect("Record not found");

        assert_eq!(record.id, id);
        assert_eq!(record.packed, packed);
        assert_eq!(record.symbol_count, 5);
        assert!(record.created_at > 0);
    }

    #[test]
    fn test_fetch_unknown_id_is_none() {
        let temp = tempdir().expect("Failed to create temp dir");
        let store =
            SqliteStore::open(temp.path().join("store.db")).expect("Failed to create store");

        let missing = store
            .fetch(&RecordId::from("nonexistent-id"))
            .expect("Fetch failed");
        assert!(missing.is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let temp = tempdir().expect("Failed to create temp dir");
        let store =
            SqliteStore::open(temp.path().join("store.db")).expect("Failed to create store");

        let a = store.create(&[27], 4).expect("Failed to create record");
        let b = store.create(&[27], 4).expect("Failed to create record");
        assert_ne!(a, b);

        // Both records remain fetchable, nothing was overwritten
        assert!(store.fetch(&a).expect("Fetch failed").is_some());
        assert!(store.fetch(&b).expect("Fetch failed").is_some());
    }

    #[test]
    fn test_empty_blob_round_trips() {
        let temp = tempdir().expect("Failed to create temp dir");
        let store =
            SqliteStore::open(temp.path().join("store.db")).expect("Failed to create store");

        let id = store.create(&[], 0).expect("Failed to create record");
        let record = store
            .fetch(&id)
            .expect("Fetch failed")
            .expect("Record not found");
        assert!(record.packed.is_empty());
        assert_eq!(record.symbol_count, 0);
    }

    #[test]
    fn test_records_survive_reopen() {
        let temp = tempdir().expect("Failed to create temp dir");
        let path = temp.path().join("store.db");

        let store = SqliteStore::open(&path).expect("Failed to create store");
        let id = store.create(&[0xAB, 0xCD], 8).expect("Failed to create record");
        store.close().expect("Failed to close store");

        let store = SqliteStore::open(&path).expect("Failed to reopen store");
        let record = store
            .fetch(&id)
            .expect("Fetch failed")
            .expect("Record not found after reopen");
        assert_eq!(record.packed, vec![0xAB, 0xCD]);
    }

    #[test]
    fn test_stats() {
        let temp = tempdir().expect("Failed to create temp dir");
        let store =
            SqliteStore::open(temp.path().join("store.db")).expect("Failed to create store");

        store.create(&[27], 4).expect("Failed to create record");
        store.create(&[27, 0], 5).expect("Failed to create record");

        let stats = store.stats().expect("Failed to get stats");
        assert_eq!(stats.records, 2);
        assert_eq!(stats.total_symbols, 9);
        assert_eq!(stats.total_packed_bytes, 3);
    }
}
