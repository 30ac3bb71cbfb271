//! Garfield Vibes Server
//!
//! Serves the page bundle and the JSON content API.
//!
//! Run with: cargo run --bin garfield-vibes [-- --config path/to/config.toml]
//!
//! # Configuration
//!
//! Config file (first found): `--config`, `~/.config/garfield-vibes/config.toml`,
//! `/etc/garfield-vibes/config.toml`, `./config.toml`.
//!
//! Environment variables:
//! - `VIBES_HOST`: Host to bind to (default: 0.0.0.0)
//! - `VIBES_PORT`: Port to listen on (default: 8080)
//! - `VIBES_STATIC_DIR`: Page bundle directory (default: vibes-ui/dist)
//! - `VIBES_LOG_LEVEL`, `VIBES_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Full filter directive, overrides the level

use clap::Parser;
use std::path::PathBuf;

use garfield_vibes::api::{serve, AppState};
use garfield_vibes::config::Config;
use garfield_vibes::logging;

#[derive(Parser)]
#[command(name = "garfield-vibes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the Garfield Vibes page and content API")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the page bundle directory
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dir) = args.static_dir {
        config.server.static_dir = dir;
    }

    logging::init(&config.logging);

    tracing::info!("Starting Garfield Vibes v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Page bundle: {:?}", config.server.static_dir);
    tracing::info!(
        "Comic archive starts {} ({})",
        config.comics.first_strip,
        config.comics.image.base_url
    );

    let state = AppState::new(config.comics.clone(), config.server.clone());
    serve(state, &config.server).await?;

    tracing::info!("Garfield Vibes stopped");
    Ok(())
}
