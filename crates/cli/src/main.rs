mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{add, get, info, stats};

/// Seqstash: a packed nucleotide sequence archive
///
/// Stores DNA sequences at 2 bits per base in a local database and hands
/// back an opaque identifier; the identifier later reconstructs the exact
/// sequence.
#[derive(Parser, Debug)]
#[command(name = "seqstash")]
#[command(author, version, about = "Archive nucleotide sequences as packed records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a sequence and store it, printing the new identifier.
    ///
    /// Reads raw text (whitespace and case are forgiven; anything outside
    /// A/C/G/T is dropped) from a file or from stdin.
    Add {
        /// Database path (where to save records)
        #[arg(short, long, default_value = "seqstash.db")]
        database: PathBuf,

        /// Input file with the raw sequence text (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Fetch a stored record by identifier and reconstruct the sequence.
    Get {
        /// Record identifier printed by `add`
        id: String,

        /// Database path
        #[arg(short, long, default_value = "seqstash.db")]
        database: PathBuf,

        /// Write the sequence to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show a record's metadata without decoding it.
    Info {
        /// Record identifier
        id: String,

        /// Database path
        #[arg(short, long, default_value = "seqstash.db")]
        database: PathBuf,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Show totals for the whole archive.
    Stats {
        /// Database path
        #[arg(short, long, default_value = "seqstash.db")]
        database: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Add { database, input } => add::run(&database, input.as_deref()),
        Commands::Get {
            id,
            database,
            output,
        } => get::run(&database, &id, output.as_deref()),
        Commands::Info { id, database, json } => info::run(&database, &id, json),
        Commands::Stats { database } => stats::run(&database),
    }
}
