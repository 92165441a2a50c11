use anyhow::{Context, Result};
use log::debug;
use seqstash_codec::encode;
use seqstash_store::RecordStore;
use std::io::Read;
use std::path::Path;

pub fn run(database: &Path, input: Option<&Path>) -> Result<()> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read sequence from stdin")?;
            buf
        }
    };

    let packed = encode(&raw);
    debug!(
        "encoded {} raw chars into {} symbols / {} packed bytes",
        raw.len(),
        packed.symbol_count(),
        packed.bytes().len()
    );

    if packed.is_empty() {
        println!("⚠️  Input contained no A/C/G/T symbols; storing an empty record.");
    }

    let store = super::open_store(database)?;
    let (bytes, symbol_count) = packed.into_parts();
    let packed_len = bytes.len();
    let id = store
        .create(&bytes, symbol_count)
        .context("Failed to store record")?;

    println!("\n🧬 Sequence stored");
    println!("  • Identifier: {id}");
    println!("  • Symbols: {symbol_count}");
    if packed_len > 0 {
        println!(
            "  • Packed size: {packed_len} bytes ({:.1}x)",
            symbol_count as f64 / packed_len as f64
        );
    } else {
        println!("  • Packed size: 0 bytes");
    }

    Ok(())
}
