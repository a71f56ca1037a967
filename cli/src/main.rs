use anyhow::Result;
use catalog::Catalog;
use clap::Parser;
use mooziq::App;
use mooziq_core::DataPaths;
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "mooziq")]
#[command(about = "Browse a local music dataset: artists, albums, lyrics and concerts")]
struct Args {
    /// Dataset directory
    #[arg(long, default_value = "./dataset")]
    data: String,
    /// Where moosified lyrics are written
    #[arg(long, default_value = "./moosified")]
    moosified: String,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    let mut paths = DataPaths::new(&args.data, &args.moosified);
    // MOOZIQ_INDEX relocates the index snapshot, e.g. to keep it out of the dataset
    if let Ok(index) = std::env::var("MOOZIQ_INDEX") {
        paths = paths.with_index_snapshot(index);
    }
    tracing::debug!(?paths, "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(Catalog::new(paths), stdin.lock(), stdout.lock());
    app.run()
}
