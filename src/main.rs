use anyhow::Result;
use clap::Parser;
use streamrec::{run_batch, Config};
use tracing::info;

#[derive(Parser)]
#[command(name = "streamrec")]
#[command(about = "Record network streams to disk for a fixed duration each")]
struct Args {
    /// Path to the configuration file, without extension
    #[arg(short, long, default_value = "config/streamrec")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("streamrec v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Recording {} stream(s) into {}",
        cfg.streams.urls.len(),
        cfg.base_dir().display()
    );

    run_batch(&cfg).await?;

    Ok(())
}
