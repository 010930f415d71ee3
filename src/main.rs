//! # eurofuel
//!
//! Runs the fuel-price ingestion once and exits. Intended to be invoked by an
//! external scheduler.
//!
//! ```bash
//! EUROFUEL_DATA_DIR=./data eurofuel run
//! ```
//!
//! Exits non-zero only when every configured source failed.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use eurofuel_ingest::Ingest;

#[derive(Parser)]
#[command(
    name = "eurofuel",
    version,
    about = "Scrape European fuel prices into latest.json and history.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the first working source and publish both documents.
    ///
    /// The output directory is taken from `EUROFUEL_DATA_DIR` (default `./data`).
    Run,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("eurofuel_ingest=info,eurofuel=info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            if let Err(e) = run() {
                error!("{}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run() -> eurofuel_ingest::Result<()> {
    let ingest = Ingest::builder().build()?;
    info!("{}", ingest);

    let report = ingest.run()?;
    info!(
        as_of = %report.snapshot.as_of,
        source = %report.snapshot.source,
        countries = report.snapshot.countries.len(),
        history_entries = report.history_len,
        merge = ?report.merge,
        degraded_sources = report.failures.len(),
        "Ingestion complete"
    );
    Ok(())
}
