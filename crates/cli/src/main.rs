use anyhow::Context;
use bdev_cli::commands::Commands;
use bdev_cli::{logging, Catalog, ConfigLoader};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bdev-frames")]
#[command(about = "Play B.DEV terminal spinners, status lines and progress bars", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to $BDEV_FRAMES_CONFIG, then <config dir>/bdev/frames.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config {
        loader = loader.path(path);
    }
    let settings = loader.load().context("failed to load configuration")?;
    let catalog = Catalog::from_settings(&settings)?;

    cli.command.execute(&catalog, &settings).await
}
