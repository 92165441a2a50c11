pub mod add;
pub mod get;
pub mod info;
pub mod stats;

use anyhow::{Context, Result};
use seqstash_store::SqliteStore;
use std::path::Path;

pub fn open_store(database: &Path) -> Result<SqliteStore> {
    SqliteStore::open(database)
        .with_context(|| format!("Failed to open database at {}", database.display()))
}
