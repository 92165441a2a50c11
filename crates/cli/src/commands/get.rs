use anyhow::{bail, Context, Result};
use log::debug;
use seqstash_codec::decode;
use seqstash_store::{RecordId, RecordStore};
use std::path::Path;

pub fn run(database: &Path, id: &str, output: Option<&Path>) -> Result<()> {
    let store = super::open_store(database)?;

    let record = match store
        .fetch(&RecordId::from(id))
        .context("Failed to fetch record")?
    {
        Some(record) => record,
        None => bail!("Unknown identifier: {id}"),
    };

    debug!(
        "fetched record {id}: {} packed bytes, {} symbols",
        record.packed.len(),
        record.symbol_count
    );

    let sequence = decode(&record.packed, record.symbol_count)
        .context("Stored record is corrupt, could not decode")?;

    match output {
        Some(path) => {
            std::fs::write(path, &sequence)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {} symbols to {}", record.symbol_count, path.display());
        }
        None => println!("{sequence}"),
    }

    Ok(())
}
