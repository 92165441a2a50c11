use anyhow::{bail, Context, Result};
use seqstash_store::{RecordId, RecordStore};
use serde::Serialize;
use std::path::Path;

/// Record metadata without the packed payload.
#[derive(Debug, Serialize)]
struct RecordInfo {
    id: String,
    symbol_count: usize,
    packed_bytes: usize,
    created_at: i64,
}

pub fn run(database: &Path, id: &str, json: bool) -> Result<()> {
    let store = super::open_store(database)?;

    let record = match store
        .fetch(&RecordId::from(id))
        .context("Failed to fetch record")?
    {
        Some(record) => record,
        None => bail!("Unknown identifier: {id}"),
    };

    let info = RecordInfo {
        id: record.id.to_string(),
        symbol_count: record.symbol_count,
        packed_bytes: record.packed.len(),
        created_at: record.created_at,
    };

    if json {
        let rendered =
            serde_json::to_string_pretty(&info).context("Failed to serialize record info")?;
        println!("{rendered}");
        return Ok(());
    }

    println!("\n📊 Record Information");
    println!("{}", "=".repeat(50));
    println!("Identifier: {}", info.id);
    println!("Symbols: {}", info.symbol_count);
    println!("Packed bytes: {}", info.packed_bytes);
    if info.packed_bytes > 0 {
        println!(
            "Packing ratio: {:.1}x",
            info.symbol_count as f64 / info.packed_bytes as f64
        );
    }
    println!("Created at (unix): {}", info.created_at);

    Ok(())
}
