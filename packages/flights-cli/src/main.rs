//! Flight listing pipeline CLI
//!
//! Reads a JSON array of raw listing fragments, runs the normalization
//! and ranking pipeline, writes the `flight_data.json` / `flight_results.txt`
//! artifacts, and prints the result envelope to stdout.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use flights::{FsArtifactStore, Pipeline, PipelineConfig, RawListing};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "autoflights")]
#[command(about = "Normalize, deduplicate, and rank scraped flight listings")]
#[command(version)]
struct Cli {
    /// Input file with a JSON array of raw listings (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory for flight_data.json and flight_results.txt
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Maximum number of rows rendered in the table
    #[arg(long, default_value_t = 10)]
    table_rows: usize,

    /// Skip writing artifact files
    #[arg(long)]
    no_save: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,flights=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let raw = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let listings: Vec<RawListing> =
        serde_json::from_str(&raw).context("input is not a JSON array of listings")?;
    tracing::info!("read {} raw listings", listings.len());

    let pipeline = Pipeline::new(PipelineConfig::default().with_table_rows(cli.table_rows));
    let output = pipeline.process(&listings);

    if !cli.no_save {
        let store = FsArtifactStore::new(&cli.out_dir);
        output
            .persist(&store)
            .with_context(|| format!("failed to write artifacts to {}", cli.out_dir.display()))?;
    }

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}
