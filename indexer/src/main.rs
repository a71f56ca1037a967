use anyhow::{bail, Result};
use catalog::songs::scan_songs;
use clap::{Parser, Subcommand};
use mooziq_core::persist::save_snapshot;
use mooziq_core::{DataPaths, InvertedIndex};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build the lyric search index snapshot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the snapshot from every song in the dataset, replacing any existing one
    Build {
        /// Dataset directory containing songs/
        #[arg(long, default_value = "./dataset")]
        data: String,
        /// Snapshot path (defaults to <data>/inverted_index.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { data, output } => build_index(&data, output),
    }
}

fn build_index(data: &str, output: Option<PathBuf>) -> Result<()> {
    let mut paths = DataPaths::new(data, "./moosified");
    if let Some(output) = output {
        paths = paths.with_index_snapshot(output);
    }
    let songs = scan_songs(&paths.songs_dir());
    if songs.is_empty() {
        bail!("no songs found under {}", paths.songs_dir().display());
    }

    let index = InvertedIndex::build(&songs);
    tracing::info!(num_songs = songs.len(), num_tokens = index.num_tokens(), "ingested songs");

    // a snapshot that cannot be written fails the build
    save_snapshot(&paths.index_snapshot, &index)?;
    tracing::info!(output = %paths.index_snapshot.display(), "index build complete");
    Ok(())
}
