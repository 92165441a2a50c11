use anyhow::{Context, Result};
use std::path::Path;

pub fn run(database: &Path) -> Result<()> {
    let store = super::open_store(database)?;
    let stats = store.stats().context("Failed to get store stats")?;

    println!("\n📈 Archive Statistics");
    println!("{}", "=".repeat(50));
    println!("Records: {}", stats.records);
    println!("Total symbols: {}", stats.total_symbols);
    println!("Total packed bytes: {}", stats.total_packed_bytes);

    Ok(())
}
